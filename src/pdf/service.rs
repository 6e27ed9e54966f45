//! Async wrapper around a [`TextExtractor`]

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use super::{ExtractError, Result, TextExtractor};

/// Runs extraction on the blocking pool so a slow document never stalls the
/// async workers serving other requests.
#[derive(Clone)]
pub struct TextService {
    extractor: Arc<dyn TextExtractor>,
    timeout_secs: Option<u64>,
}

impl TextService {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            timeout_secs: None,
        }
    }

    /// Abort waiting after `secs` seconds. The blocking task itself is not
    /// interrupted; its result is discarded.
    pub fn with_timeout(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Name of the underlying extraction engine
    pub fn engine(&self) -> &'static str {
        self.extractor.engine()
    }

    /// Extract the text of `data` as a single string, pages joined by one space.
    pub async fn extract_text(&self, data: Vec<u8>) -> Result<String> {
        let extractor = Arc::clone(&self.extractor);
        let task = tokio::task::spawn_blocking(move || extractor.extract_pages(&data));

        let joined = match self.timeout_secs {
            Some(secs) => timeout(Duration::from_secs(secs), task)
                .await
                .map_err(|_| ExtractError::Timeout(secs))?,
            None => task.await,
        };

        let pages = joined.map_err(|e| ExtractError::Task(e.to_string()))??;
        Ok(join_pages(&pages))
    }
}

fn join_pages(pages: &[String]) -> String {
    pages.join(" ")
}
