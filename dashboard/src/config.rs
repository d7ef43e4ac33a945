//! Dashboard tunables with sane defaults.

/// Presentation knobs; nothing here changes engine semantics.
#[derive(Debug, Clone)]
pub struct Config {
  /// How many incidents the analytics "Recent Activity" feed shows.
  pub recent_activity_limit: usize,
  /// How long a success notification stays visible.
  pub notification_secs: i64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      recent_activity_limit: 3,
      notification_secs: 3,
    }
  }
}
