use action_dashboard::{load_dataset, router, AppState, Config};
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().parse()?))
        .init();

    let today = Local::now().date_naive();
    let dataset = match load_dataset(&config.data_path, &config.sheet, today) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("failed to load actions: {err}");
            return Err(err.into());
        }
    };

    let app = router(AppState::new(dataset));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
