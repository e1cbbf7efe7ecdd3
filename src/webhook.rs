use std::sync::Arc;

use axum::{Router, body::Bytes, extract::State, http::StatusCode, routing::get, routing::post};
use log::{error, info};

use crate::error::RelayError;
use crate::normalize::clean;
use crate::responder::MessageSender;
use crate::stats::StatsSource;
use crate::types::TelegramWebhook;

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
    pub sender: Arc<dyn MessageSender>,
}

impl AppState {
    pub fn new(stats: impl StatsSource + 'static, sender: impl MessageSender + 'static) -> Self {
        Self {
            stats: Arc::new(stats),
            sender: Arc::new(sender),
        }
    }
}

/// How a single update ended
#[derive(Debug)]
pub enum Outcome {
    Ignored(RelayError),
    StatsUnavailable { symbol: String, error: RelayError },
    RelayFailed { chat_id: i64, error: RelayError },
    Delivered { chat_id: i64, stats: String },
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/webhook", post(webhook_handler))
        .with_state(state)
}

/// Decode, look up, relay. Stops at the first failure.
pub async fn relay_update(state: &AppState, body: &[u8]) -> Outcome {
    let update: TelegramWebhook = match serde_json::from_slice(body) {
        Ok(update) => update,
        Err(e) => return Outcome::Ignored(e.into()),
    };

    let chat_id = update.message.chat.id;
    let symbol = clean(&update.message.text);

    let stats = match state.stats.fetch(&symbol).await {
        Ok(stats) => stats,
        Err(error) => return Outcome::StatsUnavailable { symbol, error },
    };

    match state.sender.send_text(chat_id, &stats).await {
        Ok(_) => Outcome::Delivered { chat_id, stats },
        Err(error) => Outcome::RelayFailed { chat_id, error },
    }
}

// Always acknowledges with an empty 200, whatever happened downstream
async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> StatusCode {
    match relay_update(&state, &body).await {
        Outcome::Ignored(e) => error!("Error in parsing update: {}", e),
        Outcome::StatsUnavailable { symbol, error } => {
            error!("Error in calling crypto-stats-api for {}: {}", symbol, error)
        }
        Outcome::RelayFailed { chat_id, error } => {
            error!("Encountered error relaying to chat id {}: {}", chat_id, error)
        }
        Outcome::Delivered { chat_id, stats } => {
            info!("Stats {} successfully distributed to chat id {}", stats, chat_id)
        }
    }
    StatusCode::OK
}
