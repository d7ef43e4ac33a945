//! Core types for the incident dashboard (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Incident record
// ---------------------------------------------------------------------------

/// A reported AI-safety issue. Never mutated or deleted once created; the
/// collection lives in process memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
  pub id: u64,
  pub title: String,
  pub description: String,
  pub severity: Severity,
  pub status: Status,
  pub assignee: String,
  pub reported_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Impact classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
  #[default]
  Low,
  Medium,
  High,
}

/// Lifecycle stage of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
  #[default]
  Open,
  Investigating,
  Resolved,
}

// ---------------------------------------------------------------------------
// View parameters (filter/sort selections)
// ---------------------------------------------------------------------------

/// Severity filter selection: `All` or one concrete level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeverityFilter {
  #[default]
  All,
  Low,
  Medium,
  High,
}

impl SeverityFilter {
  pub fn matches(self, severity: Severity) -> bool {
    match self {
      Self::All => true,
      Self::Low => severity == Severity::Low,
      Self::Medium => severity == Severity::Medium,
      Self::High => severity == Severity::High,
    }
  }
}

/// Status filter selection: `All` or one concrete stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
  #[default]
  All,
  Open,
  Investigating,
  Resolved,
}

impl StatusFilter {
  pub fn matches(self, status: Status) -> bool {
    match self {
      Self::All => true,
      Self::Open => status == Status::Open,
      Self::Investigating => status == Status::Investigating,
      Self::Resolved => status == Status::Resolved,
    }
  }
}

/// Chronological sort direction over `reported_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Newest,
  Oldest,
}
