use anyhow::Result;
use mavfast_api::{ApiServer, AppState, AutomationHandler, Config};
use mavfast_core::pricing::MockPriceSource;

pub fn execute(config: Config) -> Result<()> {
    tracing::info!("🚀 Starting MavFast Brighton Best API");
    tracing::info!("Port: {}", config.port);
    tracing::info!("Debug: {}", config.debug);
    tracing::info!(
        "Chrome Binary: {}",
        config
            .chrome_bin
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "auto-detect".to_string())
    );
    tracing::info!("Supplier: {}", config.supplier_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let handler = AutomationHandler::from_config(&config, Box::new(MockPriceSource))?;
        let server = ApiServer::new(config.bind_addr(), AppState::new(config, handler));

        tracing::debug!("Binding {}", server.addr());
        server.start().await?;

        Ok::<(), anyhow::Error>(())
    })
}
