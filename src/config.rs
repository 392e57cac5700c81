use crate::error::{env_error, ApiResult};
use dotenvy::dotenv;
use std::env;

/// Gemini model used when GEMINI_MODEL is not set
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Main configuration structure for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model identifier
    pub gemini_model: String,
    /// Port for the HTTP server
    pub port: u16,
    /// Upper bound in seconds for a single generation request
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> ApiResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| env_error("GEMINI_API_KEY"))?;

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Config {
            gemini_api_key,
            gemini_model,
            port,
            request_timeout_secs,
        })
    }
}
