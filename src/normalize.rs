pub const START_COMMAND: &str = "/start";
pub const STATS_COMMAND: &str = "/stats";
pub const BOT_TAG: &str = "@CryptoYVBot";

/// Quote currency appended to every looked-up symbol
pub const QUOTE_SUFFIX: &str = "-USD";

/// Turn raw message text into a stats lookup symbol
///
/// Each known prefix is checked once, in order: start command, stats command,
/// bot tag. A match strips exactly one occurrence. Nothing is trimmed or
/// case-folded.
///
/// Example: "/start/stats@CryptoYVBotBTC" -> "BTC-USD"
pub fn clean(text: &str) -> String {
    let mut rest = text;
    for prefix in [START_COMMAND, STATS_COMMAND, BOT_TAG] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
        }
    }
    format!("{}{}", rest, QUOTE_SUFFIX)
}
