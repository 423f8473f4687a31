#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nyaya_server::start().await
}
