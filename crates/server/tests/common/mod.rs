//! # Common Test Utilities
//!
//! Centralizes the integration-test harness for `nyaya-server`:
//!
//! - `TestApp`: spawns the real server on a random port, configured through a
//!   temporary `config.yml` whose completion endpoint points at an
//!   `httpmock::MockServer`. A deterministic `AiProvider` can be injected in
//!   place of the real client for tests that assert on assembled requests.

// Allow unused code because this is a test utility module, and not all
// helpers are used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use nyaya::providers::ai::AiProvider;
use nyaya_server::{
    config::get_config,
    router::create_router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use std::{fs::File, io::Write, net::SocketAddr, sync::Arc};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application with a real completion client pointed at the
    /// harness's mock server.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_inner("test-key", None).await
    }

    /// Spawns the application with an empty API key, so completion calls
    /// fail fast without touching the network.
    pub async fn spawn_without_api_key() -> Result<Self> {
        Self::spawn_inner("", None).await
    }

    /// Spawns the application with an injected completion provider
    /// (e.g. `MockAiProvider`); the harness's mock server receives no
    /// traffic in this configuration.
    pub async fn spawn_with_provider(provider: Arc<dyn AiProvider>) -> Result<Self> {
        Self::spawn_inner("test-key", Some(provider)).await
    }

    async fn spawn_inner(
        api_key: &str,
        override_provider: Option<Arc<dyn AiProvider>>,
    ) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
api_url: "{}"
api_key: "{api_key}"
model_name: "mock-chat-model"
"#,
            mock_server.url("/v1/chat/completions"),
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = get_config(Some(config_path.to_str().unwrap()))?;
        let mut app_state = build_app_state(config)?;
        if let Some(provider) = override_provider {
            app_state.ai_provider = provider;
        }
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
