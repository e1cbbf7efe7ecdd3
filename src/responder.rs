use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

use crate::config::Config;
use crate::error::RelayError;

/// Delivers text to a chat
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<String, RelayError>;
}

pub struct TelegramResponder {
    client: Client,
    url: String,
}

impl TelegramResponder {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.send_message_url(),
        }
    }
}

#[async_trait]
impl MessageSender for TelegramResponder {
    /// Form-encoded sendMessage call. Returns the raw platform response.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<String, RelayError> {
        info!("Sending {} to chat_id: {}", text, chat_id);

        let chat_id = chat_id.to_string();
        let res = self
            .client
            .post(&self.url)
            .form(&[("chat_id", chat_id.as_str()), ("text", text)])
            .send()
            .await
            .map_err(RelayError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(RelayError::ResponseRead)?;

        if status.is_success() {
            info!("Body of response is: {}", body);
        } else {
            warn!("Telegram API error {}: {}", status, body);
        }

        Ok(body)
    }
}
