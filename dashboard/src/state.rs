//! Dashboard state: one view-state record, tagged actions, and the reducer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use incident_core::{
  Draft, FieldErrors, IncidentStore, Severity, SeverityFilter, SortOrder, Status, StatusFilter,
};

use crate::config::Config;
use crate::env::Environment;

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// The dashboard's three screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
  #[default]
  List,
  Report,
  Analytics,
}

/// A transient success banner; expires against the environment clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
  pub message: String,
  pub until: DateTime<Utc>,
}

/// Everything the presentation layer tracks between renders, in one record.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
  pub tab: Tab,
  pub severity_filter: SeverityFilter,
  pub status_filter: StatusFilter,
  pub search_term: String,
  pub sort_order: SortOrder,
  /// Incident whose details are expanded in the list, if any.
  pub expanded: Option<u64>,
  pub draft: Draft,
  pub form_errors: FieldErrors,
  pub dark_mode: bool,
  pub fullscreen: bool,
  pub notification: Option<Notification>,
}

// ---------------------------------------------------------------------------
// Actions (JSON contract — what a session driver sends)
// ---------------------------------------------------------------------------

/// Every user-driven state transition. The engine never initiates any of
/// these; it is purely reactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
  SetSeverityFilter { severity: SeverityFilter },
  SetStatusFilter { status: StatusFilter },
  SetSearch { term: String },
  SetSort { order: SortOrder },
  SelectTab { tab: Tab },
  ClearFilters,
  ToggleExpand { id: u64 },
  SetDraftTitle { value: String },
  SetDraftDescription { value: String },
  SetDraftAssignee { value: String },
  SetDraftSeverity { severity: Severity },
  SetDraftStatus { status: Status },
  SubmitIncident,
  /// Leave the report form without submitting; the draft is kept so the
  /// user can come back to it.
  CancelReport,
  ToggleDarkMode,
  ToggleFullscreen,
  DismissNotification,
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Owns the incident collection and the view state; `apply` is the only
/// mutation path.
pub struct Dashboard {
  store: IncidentStore,
  view: ViewState,
  config: Config,
}

impl Dashboard {
  pub fn new(store: IncidentStore, config: Config) -> Self {
    Self {
      store,
      view: ViewState::default(),
      config,
    }
  }

  /// A dashboard pre-loaded with the sample incidents.
  pub fn seeded(config: Config) -> Self {
    Self::new(IncidentStore::seed(), config)
  }

  pub fn store(&self) -> &IncidentStore {
    &self.store
  }

  pub fn view(&self) -> &ViewState {
    &self.view
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Apply one user action. Runs synchronously to completion; a stale
  /// notification is dropped on any interaction before the transition.
  pub fn apply(&mut self, action: Action, env: &mut dyn Environment) {
    if let Some(notification) = &self.view.notification {
      if notification.until <= env.now() {
        self.view.notification = None;
      }
    }

    match action {
      Action::SetSeverityFilter { severity } => self.view.severity_filter = severity,
      Action::SetStatusFilter { status } => self.view.status_filter = status,
      Action::SetSearch { term } => self.view.search_term = term,
      Action::SetSort { order } => self.view.sort_order = order,
      Action::SelectTab { tab } => self.view.tab = tab,
      Action::ClearFilters => {
        self.view.severity_filter = SeverityFilter::All;
        self.view.status_filter = StatusFilter::All;
        self.view.search_term.clear();
      }
      Action::ToggleExpand { id } => {
        self.view.expanded = if self.view.expanded == Some(id) {
          None
        } else {
          Some(id)
        };
      }
      Action::SetDraftTitle { value } => self.view.draft.title = value,
      Action::SetDraftDescription { value } => self.view.draft.description = value,
      Action::SetDraftAssignee { value } => self.view.draft.assignee = value,
      Action::SetDraftSeverity { severity } => self.view.draft.severity = severity,
      Action::SetDraftStatus { status } => self.view.draft.status = status,
      Action::SubmitIncident => match self.store.submit(&self.view.draft, env.now()) {
        Ok(_id) => {
          self.view.draft = Draft::default();
          self.view.form_errors.clear();
          self.view.tab = Tab::List;
          self.view.notification = Some(Notification {
            message: "New incident reported successfully!".into(),
            until: env.now() + Duration::seconds(self.config.notification_secs),
          });
        }
        Err(errors) => self.view.form_errors = errors,
      },
      Action::CancelReport => {
        self.view.tab = Tab::List;
        self.view.form_errors.clear();
      }
      Action::ToggleDarkMode => {
        self.view.dark_mode = !self.view.dark_mode;
        env.set_dark_mode(self.view.dark_mode);
      }
      Action::ToggleFullscreen => {
        self.view.fullscreen = !self.view.fullscreen;
        env.set_fullscreen(self.view.fullscreen);
      }
      Action::DismissNotification => self.view.notification = None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::env::FixedEnv;
  use chrono::TimeZone;

  fn env() -> FixedEnv {
    FixedEnv::at(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap())
  }

  fn seeded() -> Dashboard {
    Dashboard::seeded(Config::default())
  }

  #[test]
  fn filter_actions_update_view_state() {
    let mut dashboard = seeded();
    let mut env = env();

    dashboard.apply(
      Action::SetSeverityFilter {
        severity: SeverityFilter::High,
      },
      &mut env,
    );
    dashboard.apply(
      Action::SetSearch {
        term: "llm".into(),
      },
      &mut env,
    );
    dashboard.apply(
      Action::SetSort {
        order: SortOrder::Oldest,
      },
      &mut env,
    );

    assert_eq!(dashboard.view().severity_filter, SeverityFilter::High);
    assert_eq!(dashboard.view().search_term, "llm");
    assert_eq!(dashboard.view().sort_order, SortOrder::Oldest);
  }

  #[test]
  fn clear_filters_resets_all_three() {
    let mut dashboard = seeded();
    let mut env = env();
    dashboard.apply(
      Action::SetStatusFilter {
        status: StatusFilter::Resolved,
      },
      &mut env,
    );
    dashboard.apply(Action::SetSearch { term: "x".into() }, &mut env);

    dashboard.apply(Action::ClearFilters, &mut env);

    assert_eq!(dashboard.view().severity_filter, SeverityFilter::All);
    assert_eq!(dashboard.view().status_filter, StatusFilter::All);
    assert!(dashboard.view().search_term.is_empty());
  }

  #[test]
  fn toggle_expand_flips_and_switches() {
    let mut dashboard = seeded();
    let mut env = env();

    dashboard.apply(Action::ToggleExpand { id: 2 }, &mut env);
    assert_eq!(dashboard.view().expanded, Some(2));

    dashboard.apply(Action::ToggleExpand { id: 3 }, &mut env);
    assert_eq!(dashboard.view().expanded, Some(3));

    dashboard.apply(Action::ToggleExpand { id: 3 }, &mut env);
    assert_eq!(dashboard.view().expanded, None);
  }

  #[test]
  fn submit_with_empty_draft_records_errors_and_adds_nothing() {
    let mut dashboard = seeded();
    let mut env = env();
    dashboard.apply(Action::SelectTab { tab: Tab::Report }, &mut env);

    dashboard.apply(Action::SubmitIncident, &mut env);

    assert_eq!(dashboard.view().form_errors.len(), 3);
    assert_eq!(dashboard.store().len(), 3);
    assert_eq!(dashboard.view().tab, Tab::Report);
    assert!(dashboard.view().notification.is_none());
  }

  #[test]
  fn successful_submit_appends_resets_and_notifies() {
    let mut dashboard = seeded();
    let mut env = env();
    dashboard.apply(Action::SelectTab { tab: Tab::Report }, &mut env);
    dashboard.apply(
      Action::SetDraftTitle {
        value: "Unsafe tool call loop".into(),
      },
      &mut env,
    );
    dashboard.apply(
      Action::SetDraftDescription {
        value: "Agent retried a destructive operation without confirmation.".into(),
      },
      &mut env,
    );
    dashboard.apply(
      Action::SetDraftAssignee {
        value: "Dana Ortiz".into(),
      },
      &mut env,
    );
    dashboard.apply(
      Action::SetDraftSeverity {
        severity: Severity::High,
      },
      &mut env,
    );

    dashboard.apply(Action::SubmitIncident, &mut env);

    assert_eq!(dashboard.store().len(), 4);
    let created = dashboard.store().get(4).unwrap();
    assert_eq!(created.severity, Severity::High);
    assert_eq!(created.reported_at, env.now);

    assert_eq!(dashboard.view().tab, Tab::List);
    assert_eq!(dashboard.view().draft, Draft::default());
    assert!(dashboard.view().form_errors.is_empty());
    let notification = dashboard.view().notification.as_ref().unwrap();
    assert_eq!(notification.message, "New incident reported successfully!");
    assert_eq!(notification.until, env.now + Duration::seconds(3));
  }

  #[test]
  fn notification_expires_on_later_interaction() {
    let mut dashboard = seeded();
    let mut env = env();
    dashboard.apply(
      Action::SetDraftTitle { value: "t".into() },
      &mut env,
    );
    dashboard.apply(
      Action::SetDraftDescription { value: "d".into() },
      &mut env,
    );
    dashboard.apply(
      Action::SetDraftAssignee { value: "a".into() },
      &mut env,
    );
    dashboard.apply(Action::SubmitIncident, &mut env);
    assert!(dashboard.view().notification.is_some());

    // Within the display window the notification survives.
    env.advance(Duration::seconds(1));
    dashboard.apply(Action::SetSearch { term: "x".into() }, &mut env);
    assert!(dashboard.view().notification.is_some());

    // After it, any interaction drops it.
    env.advance(Duration::seconds(5));
    dashboard.apply(Action::SetSearch { term: "".into() }, &mut env);
    assert!(dashboard.view().notification.is_none());
  }

  #[test]
  fn display_toggles_reach_the_environment() {
    let mut dashboard = seeded();
    let mut env = env();

    dashboard.apply(Action::ToggleDarkMode, &mut env);
    dashboard.apply(Action::ToggleDarkMode, &mut env);
    dashboard.apply(Action::ToggleFullscreen, &mut env);

    assert_eq!(env.dark_mode_calls, vec![true, false]);
    assert_eq!(env.fullscreen_calls, vec![true]);
    assert!(!dashboard.view().dark_mode);
    assert!(dashboard.view().fullscreen);
  }

  #[test]
  fn cancel_report_keeps_the_draft() {
    let mut dashboard = seeded();
    let mut env = env();
    dashboard.apply(Action::SelectTab { tab: Tab::Report }, &mut env);
    dashboard.apply(
      Action::SetDraftTitle {
        value: "half-written".into(),
      },
      &mut env,
    );

    dashboard.apply(Action::CancelReport, &mut env);

    assert_eq!(dashboard.view().tab, Tab::List);
    assert_eq!(dashboard.view().draft.title, "half-written");
  }

  #[test]
  fn actions_parse_from_their_json_contract() {
    let action: Action =
      serde_json::from_str(r#"{"action":"set_severity_filter","severity":"High"}"#).unwrap();
    assert_eq!(
      action,
      Action::SetSeverityFilter {
        severity: SeverityFilter::High
      }
    );

    let action: Action = serde_json::from_str(r#"{"action":"submit_incident"}"#).unwrap();
    assert_eq!(action, Action::SubmitIncident);

    let action: Action =
      serde_json::from_str(r#"{"action":"set_sort","order":"oldest"}"#).unwrap();
    assert_eq!(
      action,
      Action::SetSort {
        order: SortOrder::Oldest
      }
    );
  }
}
