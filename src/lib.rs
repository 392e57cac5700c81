pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod parser;
pub mod startup;

use std::sync::Arc;

use crate::parser::TextGenerator;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Remote text generation client
    pub generator: Arc<dyn TextGenerator>,
}
