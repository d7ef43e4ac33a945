//! Host environment capabilities the presentation layer depends on.
//!
//! The engine never sees this trait; only the reducer asks the host for the
//! current time and forwards display toggles.

use chrono::{DateTime, Utc};

pub trait Environment {
  fn now(&self) -> DateTime<Utc>;
  fn set_dark_mode(&mut self, on: bool);
  fn set_fullscreen(&mut self, on: bool);
}

/// Environment backed by the system clock. Display toggles are state-only in
/// a terminal session, so they are accepted and ignored.
#[derive(Debug, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }

  fn set_dark_mode(&mut self, _on: bool) {}

  fn set_fullscreen(&mut self, _on: bool) {}
}

/// Deterministic environment: a settable clock plus a record of every
/// display toggle. Used by tests and scripted sessions.
#[derive(Debug, Clone)]
pub struct FixedEnv {
  pub now: DateTime<Utc>,
  pub dark_mode_calls: Vec<bool>,
  pub fullscreen_calls: Vec<bool>,
}

impl FixedEnv {
  pub fn at(now: DateTime<Utc>) -> Self {
    Self {
      now,
      dark_mode_calls: Vec::new(),
      fullscreen_calls: Vec::new(),
    }
  }

  pub fn advance(&mut self, delta: chrono::Duration) {
    self.now += delta;
  }
}

impl Environment for FixedEnv {
  fn now(&self) -> DateTime<Utc> {
    self.now
  }

  fn set_dark_mode(&mut self, on: bool) {
    self.dark_mode_calls.push(on);
  }

  fn set_fullscreen(&mut self, on: bool) {
    self.fullscreen_calls.push(on);
  }
}
