use is_it_prime::utils::logger;
use is_it_prime::{SessionEngine, StdinSource, StdoutConsole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting is-it-prime session");

    let engine = SessionEngine::new(StdinSource::new(), StdoutConsole::new());
    engine.run().await?;

    tracing::info!("Session ended");

    Ok(())
}
