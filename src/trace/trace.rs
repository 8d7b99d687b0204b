use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One strategy-resolution record in the extraction trace.
///
/// Every cascading decision (identifier source, title source, container
/// selector, field recovery) emits one event naming the strategy that won,
/// or `exhausted` when every strategy in the cascade came up empty.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Which decision this records: `form_id`, `title`, `containers`, `fields`.
    pub stage: String,

    /// Strategy that produced the result.
    pub strategy: String,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn new(stage: &str, strategy: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            stage: stage.to_string(),
            strategy: strategy.to_string(),
            detail: None,
        }
    }

    /// Record that every strategy for a stage failed.
    pub fn exhausted(stage: &str) -> Self {
        Self::new(stage, "exhausted")
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
