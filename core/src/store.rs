//! In-memory incident collection: id assignment and the create workflow.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Incident, Severity, Status};
use crate::validate::{validate_new_incident, Draft, FieldErrors};

/// `1` for an empty collection, otherwise `max(id) + 1`. Tolerates gaps in
/// the id sequence.
pub fn next_id(incidents: &[Incident]) -> u64 {
  incidents.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}

/// Owns the collection for the session's lifetime. Incidents are appended by
/// `submit` and never mutated or deleted; everything else reads borrowed
/// slices.
#[derive(Debug, Clone, Default)]
pub struct IncidentStore {
  incidents: Vec<Incident>,
}

impl IncidentStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_incidents(incidents: Vec<Incident>) -> Self {
    Self { incidents }
  }

  /// The three sample incidents the dashboard starts with.
  pub fn seed() -> Self {
    Self::from_incidents(vec![
      Incident {
        id: 1,
        title: "Biased Recommendation Algorithm".into(),
        description: "Algorithm consistently favored certain demographics in job \
          recommendations, creating an unfair advantage for some user groups while \
          disadvantaging others."
          .into(),
        severity: Severity::Medium,
        status: Status::Investigating,
        assignee: "Emma Thompson".into(),
        reported_at: seed_ts(2025, 3, 15, 10, 0),
      },
      Incident {
        id: 2,
        title: "LLM Hallucination in Critical Info".into(),
        description: "Large language model provided incorrect safety procedure \
          information when queried about emergency protocols, potentially endangering \
          users in critical situations."
          .into(),
        severity: Severity::High,
        status: Status::Open,
        assignee: "Alex Chen".into(),
        reported_at: seed_ts(2025, 4, 2, 14, 30),
      },
      Incident {
        id: 3,
        title: "Minor Data Leak via Chatbot".into(),
        description: "Chatbot inadvertently exposed non-sensitive user metadata through \
          its debugging logs, creating a minor privacy concern that was quickly \
          addressed."
          .into(),
        severity: Severity::Low,
        status: Status::Resolved,
        assignee: "Jordan Lee".into(),
        reported_at: seed_ts(2025, 3, 20, 9, 15),
      },
    ])
  }

  pub fn incidents(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn len(&self) -> usize {
    self.incidents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.incidents.is_empty()
  }

  pub fn get(&self, id: u64) -> Option<&Incident> {
    self.incidents.iter().find(|i| i.id == id)
  }

  pub fn next_id(&self) -> u64 {
    next_id(&self.incidents)
  }

  /// Validate the draft and append it as a new incident with a fresh id and
  /// `reported_at = now`. On validation failure the collection is left
  /// untouched and the field→message map is returned instead.
  pub fn submit(&mut self, draft: &Draft, now: DateTime<Utc>) -> Result<u64, FieldErrors> {
    let errors = validate_new_incident(draft);
    if !errors.is_empty() {
      return Err(errors);
    }

    let id = self.next_id();
    self.incidents.push(Incident {
      id,
      title: draft.title.clone(),
      description: draft.description.clone(),
      severity: draft.severity,
      status: draft.status,
      assignee: draft.assignee.clone(),
      reported_at: now,
    });
    Ok(id)
  }
}

// Known-valid constant timestamps for the seed collection.
fn seed_ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .unwrap()
}
