//! Create-incident draft and its validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Severity, Status};

/// The report form's working record. Severity and status come from
/// constrained selections and default like the original form: Low/Open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
  pub title: String,
  pub description: String,
  pub assignee: String,
  pub severity: Severity,
  pub status: Status,
}

/// Field name → human-readable message for every invalid field. Empty means
/// the draft is valid. BTreeMap keeps serialization order deterministic.
pub type FieldErrors = BTreeMap<String, String>;

/// Check the three required text fields after trimming whitespace. Severity
/// and status are always valid: the input mechanism constrains them to the
/// enumerated choices.
pub fn validate_new_incident(draft: &Draft) -> FieldErrors {
  let mut errors = FieldErrors::new();
  if draft.title.trim().is_empty() {
    errors.insert("title".into(), "Title is required".into());
  }
  if draft.description.trim().is_empty() {
    errors.insert("description".into(), "Description is required".into());
  }
  if draft.assignee.trim().is_empty() {
    errors.insert("assignee".into(), "Assignee is required".into());
  }
  errors
}
