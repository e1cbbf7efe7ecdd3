use crypto_stats_relay::config::Config;
use crypto_stats_relay::responder::TelegramResponder;
use crypto_stats_relay::stats::StatsClient;
use crypto_stats_relay::webhook::{AppState, router};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    info!("Starting with {:?}", config);

    // Shared by both outbound calls; the timeout bounds each request
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let state = AppState::new(
        StatsClient::new(client.clone(), config.stats_api_url.clone()),
        TelegramResponder::new(client, &config),
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
