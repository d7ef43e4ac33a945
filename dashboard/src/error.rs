//! Structured error type for the session boundary.

use thiserror::Error;

/// Failures while driving a dashboard session. Validation problems are not
/// here: those are data (the field→message map in the view state).
#[derive(Debug, Error)]
pub enum SessionError {
  #[error("read: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
