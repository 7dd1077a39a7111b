//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Maximum number of journal entries returned in one response.
pub const MAX_EVENT_LIMIT: usize = 200;

/// Default number of journal entries returned when `limit` is omitted.
pub const DEFAULT_EVENT_LIMIT: usize = 50;

/// `?limit=` for journal listing. Clamped to `1..=MAX_EVENT_LIMIT`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

impl LimitParams {
    pub fn clamped(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_EVENT_LIMIT)
            .clamp(1, MAX_EVENT_LIMIT)
    }
}
