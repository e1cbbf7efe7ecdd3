use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TelegramWebhook {
    pub update_id: i64,
    pub message: TelegramMessage,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    #[serde(default)]
    pub text: String, // Non-text messages arrive without it
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// Structured view of a stats body. Only used for logging, the raw body is what gets relayed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub currency_name: Option<String>,
    pub price: Option<String>,
    pub change: Option<String>,
    pub change_percentage: Option<String>,
    pub prev_close: Option<String>,
    pub open: Option<String>,
    pub day_range: Option<String>,
    pub year_range: Option<String>,
    pub start_date: Option<String>,
    pub market_cap: Option<String>,
    pub circulating_supply: Option<String>,
    pub volume: Option<String>,
    pub desc: Option<String>,
}

impl StatsResponse {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
