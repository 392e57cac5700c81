mod normalize;
mod rig_parser;

pub use normalize::normalize_response;
pub use rig_parser::GeminiGenerator;

use async_trait::async_trait;
use serde_json::{from_str, Value};
use tracing::{error, info, warn};

use crate::error::{ApiResult, Error};
use crate::model::Event;

/// Instruction block sent ahead of the user text. It pins the model to the
/// exact target JSON array layout and forbids anything else in the reply.
const INSTRUCTIONS: &str = "Convert the text that follows into structured calendar events.
Return ONLY a valid JSON array that matches this structure exactly:

[
  {
    \"title\": \"string\",
    \"date\": \"YYYY-MM-DD\",
    \"start_time\": \"HH:MM or null\",
    \"end_time\": \"HH:MM or null\",
    \"all_day\": true/false,
    \"location\": \"string or null\",
    \"description\": \"string or null\",
    \"reminder_minutes_before\": number or null,
    \"time_unspecified\": true/false
  }
]

No extra keys. No extra text. No explanations. The response must start with `[` and end with `]`.";

/// Remote text generation call
///
/// The production implementation talks to Gemini; tests substitute a canned
/// double. Implementations report rate limiting as
/// [`Error::QuotaExhausted`](crate::error::Error::QuotaExhausted) and every
/// other failure as [`Error::Completion`](crate::error::Error::Completion).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt to the model and return its raw text reply
    async fn generate(&self, prompt: &str) -> ApiResult<String>;
}

/// Combine the fixed instruction block with the user text
fn build_prompt(text: &str) -> String {
    format!("{}\n\nUser Input:\n{}", INSTRUCTIONS, text)
}

/// Parse free text into calendar events via the remote model.
///
/// A quota-exhausted rejection from the provider is the only error this
/// returns. Every other failure along the way (network error, reply that is
/// not a JSON array, an element that does not fit the event schema) is logged
/// and degrades to an empty list so one bad reply cannot take the service
/// down. An empty result therefore means either "the text contained no
/// events" or "the reply was discarded"; callers cannot tell the two apart.
pub async fn parse_text_to_events(
    generator: &dyn TextGenerator,
    text: &str,
) -> ApiResult<Vec<Event>> {
    match request_events(generator, text).await {
        Ok(events) => {
            info!("Extracted {} events from model reply", events.len());
            Ok(events)
        }
        Err(err @ Error::QuotaExhausted(_)) => Err(err),
        Err(err) => {
            warn!("Discarding model reply: {}", err);
            Ok(Vec::new())
        }
    }
}

/// Single round trip: prompt, generate, normalize, parse, validate
async fn request_events(generator: &dyn TextGenerator, text: &str) -> ApiResult<Vec<Event>> {
    let prompt = build_prompt(text);

    let raw = generator.generate(&prompt).await?;
    let normalized = normalize_response(&raw);

    let values: Vec<Value> = from_str(normalized).map_err(|e| {
        error!("Failed to parse model reply as a JSON array: {}", e);
        error!("Raw model reply: {}", raw);
        Error::MalformedResponse(e.to_string())
    })?;

    // One invalid element rejects the whole batch; there is no field-level
    // recovery.
    values.into_iter().map(Event::from_value).collect()
}
