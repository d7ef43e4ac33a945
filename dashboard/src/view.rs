//! View-model assembly: state in, one serializable snapshot out.
//!
//! `render` is pure; it is called after every applied action and its output
//! is what a session driver (or UI) paints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use incident_core::{
  aggregate, percent, select, sort_by_date, FieldErrors, Incident, Severity, SortOrder, Stats,
  Status,
};

use crate::state::{Dashboard, Tab};

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Full rendered snapshot of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
  pub tab: Tab,
  pub dark_mode: bool,
  pub fullscreen: bool,
  pub stats: Stats,
  /// Open + investigating, the "In Progress" stat card.
  pub in_progress: usize,
  pub list: ListView,
  pub analytics: Analytics,
  #[serde(skip_serializing_if = "FieldErrors::is_empty")]
  pub form_errors: FieldErrors,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notification: Option<String>,
}

/// The incident list, distinguishing "nothing reported yet" from "filters
/// matched nothing".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
  /// No incidents exist at all.
  Empty,
  /// Incidents exist but none match the current filter criteria.
  NoMatches,
  Incidents { count: usize, rows: Vec<IncidentRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentRow {
  pub id: u64,
  /// Zero-padded display form, e.g. "#0004".
  pub display_id: String,
  pub title: String,
  pub severity: Severity,
  pub status: Status,
  pub assignee: String,
  pub reported_at: String,
  pub expanded: bool,
  /// Present only while the row is expanded.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
  pub status_distribution: Vec<Bar>,
  pub severity_breakdown: Vec<Bar>,
  pub recent_activity: Vec<RecentEntry>,
}

/// One labelled bar: absolute count plus share of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
  pub label: &'static str,
  pub count: usize,
  pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
  pub id: u64,
  pub title: String,
  pub status: Status,
  pub reported_at: String,
}

// ---------------------------------------------------------------------------
// Session stream wrapper
// ---------------------------------------------------------------------------

/// Structured error line for malformed session input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Derive the complete view model from the current state. One `aggregate`
/// call feeds the stat cards and both analytics panels.
pub fn render(dashboard: &Dashboard) -> ViewModel {
  let incidents = dashboard.store().incidents();
  let view = dashboard.view();
  let stats = aggregate(incidents);

  let rows = select(
    incidents,
    view.severity_filter,
    view.status_filter,
    &view.search_term,
    view.sort_order,
  );

  let list = if incidents.is_empty() {
    ListView::Empty
  } else if rows.is_empty() {
    ListView::NoMatches
  } else {
    ListView::Incidents {
      count: rows.len(),
      rows: rows
        .iter()
        .map(|incident| incident_row(incident, view.expanded == Some(incident.id)))
        .collect(),
    }
  };

  ViewModel {
    tab: view.tab,
    dark_mode: view.dark_mode,
    fullscreen: view.fullscreen,
    stats,
    in_progress: stats.in_progress(),
    list,
    analytics: analytics(incidents, &stats, dashboard.config().recent_activity_limit),
    form_errors: view.form_errors.clone(),
    notification: view.notification.as_ref().map(|n| n.message.clone()),
  }
}

fn incident_row(incident: &Incident, expanded: bool) -> IncidentRow {
  IncidentRow {
    id: incident.id,
    display_id: display_id(incident.id),
    title: incident.title.clone(),
    severity: incident.severity,
    status: incident.status,
    assignee: incident.assignee.clone(),
    reported_at: format_date(&incident.reported_at),
    expanded,
    description: expanded.then(|| incident.description.clone()),
  }
}

fn analytics(incidents: &[Incident], stats: &Stats, recent_limit: usize) -> Analytics {
  let bar = |label, count| Bar {
    label,
    count,
    percent: percent(count, stats.total),
  };

  let recent_activity = sort_by_date(incidents.iter().collect(), SortOrder::Newest)
    .into_iter()
    .take(recent_limit)
    .map(|incident| RecentEntry {
      id: incident.id,
      title: incident.title.clone(),
      status: incident.status,
      reported_at: format_date(&incident.reported_at),
    })
    .collect();

  Analytics {
    status_distribution: vec![
      bar("Open", stats.open),
      bar("Investigating", stats.investigating),
      bar("Resolved", stats.resolved),
    ],
    severity_breakdown: vec![
      bar("Low", stats.low),
      bar("Medium", stats.medium),
      bar("High", stats.high),
    ],
    recent_activity,
  }
}

fn display_id(id: u64) -> String {
  format!("#{:04}", id)
}

fn format_date(reported_at: &DateTime<Utc>) -> String {
  reported_at.format("%b %d, %Y %H:%M").to_string()
}
