use thiserror::Error;

/// Text used when a generator answers with nothing.
pub const SUMMARY_UNAVAILABLE: &str = "Executive summary not available.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary generator is not configured: {0}")]
    NotConfigured(String),

    #[error("summary request failed: {0}")]
    Transport(String),

    #[error("summary response was malformed: {0}")]
    InvalidResponse(String),
}
