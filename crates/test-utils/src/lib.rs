use async_trait::async_trait;
use nyaya::{errors::CompletionError, providers::ai::AiProvider, types::ChatMessage};
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A deterministic stand-in for the hosted completion service.
///
/// Responses can be keyed by a substring of any message in the request, or a
/// single default response can be set for every call. Every request is
/// recorded for assertions.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<Vec<(String, String)>>>,
    default_response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that answers every request with `response`.
    pub fn with_response(response: &str) -> Self {
        let provider = Self::new();
        *provider.default_response.lock().unwrap() = Some(response.to_string());
        provider
    }

    /// Pre-programs a response for requests where any message contains `key`.
    pub fn add_response(&self, key: &str, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .push((key.to_string(), response.to_string()));
    }

    /// Retrieves the recorded requests for assertion.
    pub fn get_calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(messages.to_vec());

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if messages.iter().any(|m| m.content.contains(key)) {
                return Ok(response.clone());
            }
        }
        if let Some(default) = self.default_response.lock().unwrap().as_ref() {
            return Ok(default.clone());
        }

        Err(CompletionError::Api(
            "MockAiProvider: no response programmed for this request".to_string(),
        ))
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates an A4 single-page PDF holding the given text, for exercising
    /// the document extraction path without fixture files on disk.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new("Uploaded Case File");
        let mut page = PdfPage::new(Mm(210.0), Mm(297.0), vec![]);
        let layer = Layer::new("Body");
        let layer_id = doc.add_layer(&layer);

        // printpdf 0.8 has no direct built-in-font text op; the built-in
        // font's subset bytes must be parsed back into a ParsedFont first.
        let font_bytes = BuiltinFont::Helvetica.get_subset_font().bytes;
        let font = ParsedFont::from_bytes(&font_bytes, 0, &mut Vec::new())
            .ok_or_else(|| anyhow::anyhow!("Failed to parse built-in font"))?;
        let font_id = doc.add_font(&font);

        page.ops = vec![
            Op::BeginLayer {
                layer_id: layer_id.clone(),
            },
            Op::SetFontSize {
                size: Pt(11.0),
                font: font_id.clone(),
            },
            Op::StartTextSection,
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(15.0).into(), Mm(275.0).into()),
            },
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Fill,
            },
            Op::WriteText {
                items: vec![TextItem::Text(text.to_string())],
                font: font_id,
            },
            Op::EndTextSection,
            Op::EndLayer { layer_id },
        ];
        doc.pages.push(page);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }

        Ok(bytes)
    }
}
