//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::pdf::{MupdfExtractor, TextExtractor, TextService};

/// Shared application state, built once at startup and never mutated
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    text_service: TextService,
}

impl AppState {
    /// Create state backed by MuPDF
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Arc::new(MupdfExtractor::new()))
    }

    /// Create state with a custom extraction engine
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let text_service = TextService::new(extractor).with_timeout(config.extraction.timeout_secs);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                text_service,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the text extraction service
    pub fn text_service(&self) -> &TextService {
        &self.inner.text_service
    }
}
