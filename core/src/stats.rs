//! Aggregate statistics over the full (unfiltered) incident collection.
//!
//! One pass produces every count the dashboard shows: the stat cards, the
//! status distribution, and the severity breakdown. The original page
//! re-filtered the collection once per bucket on every render; a single
//! `aggregate` call replaces all of that.

use serde::Serialize;

use crate::types::{Incident, Severity, Status};

/// Summary statistics for the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
  pub total: usize,
  pub low: usize,
  pub medium: usize,
  pub high: usize,
  pub open: usize,
  pub investigating: usize,
  pub resolved: usize,
  /// Rounded integer percentage of resolved incidents; 0 when the
  /// collection is empty.
  pub resolution_rate: u8,
}

impl Stats {
  /// Open + investigating — the "In Progress" stat card.
  pub fn in_progress(&self) -> usize {
    self.open + self.investigating
  }
}

/// Compute `Stats` in a single pass.
pub fn aggregate(incidents: &[Incident]) -> Stats {
  let mut stats = Stats {
    total: incidents.len(),
    low: 0,
    medium: 0,
    high: 0,
    open: 0,
    investigating: 0,
    resolved: 0,
    resolution_rate: 0,
  };

  for incident in incidents {
    match incident.severity {
      Severity::Low => stats.low += 1,
      Severity::Medium => stats.medium += 1,
      Severity::High => stats.high += 1,
    }
    match incident.status {
      Status::Open => stats.open += 1,
      Status::Investigating => stats.investigating += 1,
      Status::Resolved => stats.resolved += 1,
    }
  }

  stats.resolution_rate = percent(stats.resolved, stats.total);
  stats
}

/// Rounded integer percentage of `part` in `total`, 0 when `total` is zero.
pub fn percent(part: usize, total: usize) -> u8 {
  if total == 0 {
    return 0;
  }
  (part as f64 * 100.0 / total as f64).round() as u8
}
