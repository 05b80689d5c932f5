use anyhow::Result;
use porchest_ai::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on the configured level, so config comes first and
    // reports its own failures on stderr.
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = logging::init(&directives) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(log_filter = %directives, "Porchest AI service starting");
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration resolved"
    );

    server::run(config).await?;

    Ok(())
}
