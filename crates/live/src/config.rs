//! Live session settings loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `LIVE_MODEL` - Model identifier (default: models/gemini-2.0-flash-exp)
//! - `LIVE_VOICE` - Prebuilt voice name (default: Aoede)
//! - `LIVE_RESPONSE_MODALITY` - `audio` or `text` (default: audio)
//! - `LIVE_LOCALE` - System instruction locale, `sv` or `en` (default: sv)
//! - `LIVE_ACK_DELAY_MS` - Delay before acknowledging tool calls (default: 200)
//! - `LIVE_GOOGLE_SEARCH` - Offer the search tool (default: true)
//! - `LIVE_CHARTS` - Declare the chart rendering function (default: true)

use std::time::Duration;

use garderobe_core::Locale;
use thiserror::Error;

use crate::protocol::ResponseModality;

const DEFAULT_MODEL: &str = "models/gemini-2.0-flash-exp";
const DEFAULT_VOICE: &str = "Aoede";
const DEFAULT_ACK_DELAY_MS: u64 = 200;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings for one live classification session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSettings {
    /// Model identifier
    pub model: String,
    /// Prebuilt voice used for audio responses
    pub voice: String,
    /// Modality the model responds in
    pub response_modality: ResponseModality,
    /// Locale of the system instruction
    pub locale: Locale,
    /// Delay between receiving a tool call and acknowledging it
    pub ack_delay: Duration,
    /// Whether the search tool is offered to the model
    pub google_search: bool,
    /// Whether `render_altair` is declared
    pub charts: bool,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            response_modality: ResponseModality::Audio,
            locale: Locale::Swedish,
            ack_delay: Duration::from_millis(DEFAULT_ACK_DELAY_MS),
            google_search: true,
            charts: true,
        }
    }
}

impl LiveSettings {
    /// Load settings from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let response_modality = get_env_or_default("LIVE_RESPONSE_MODALITY", "audio")
            .parse::<ResponseModality>()
            .map_err(|e| ConfigError::InvalidEnvVar("LIVE_RESPONSE_MODALITY".to_string(), e))?;
        let locale = get_env_or_default("LIVE_LOCALE", "sv")
            .parse::<Locale>()
            .map_err(|e| ConfigError::InvalidEnvVar("LIVE_LOCALE".to_string(), e.to_string()))?;
        let ack_delay_ms = get_env_or_default("LIVE_ACK_DELAY_MS", "200")
            .trim()
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LIVE_ACK_DELAY_MS".to_string(), e.to_string())
            })?;
        let google_search =
            parse_flag("LIVE_GOOGLE_SEARCH", &get_env_or_default("LIVE_GOOGLE_SEARCH", "true"))?;
        let charts = parse_flag("LIVE_CHARTS", &get_env_or_default("LIVE_CHARTS", "true"))?;

        Ok(Self {
            model: get_env_or_default("LIVE_MODEL", DEFAULT_MODEL),
            voice: get_env_or_default("LIVE_VOICE", DEFAULT_VOICE),
            response_modality,
            locale,
            ack_delay: Duration::from_millis(ack_delay_ms),
            google_search,
            charts,
        })
    }
}

/// Parse a boolean flag, accepting the usual spellings.
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
