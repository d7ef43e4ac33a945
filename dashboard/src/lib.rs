//! AI Safety Incident Dashboard — presentation layer.
//!
//! The page's scattered UI flags become one explicit [`ViewState`] record,
//! mutated only through tagged [`Action`] variants by the reducer in
//! [`Dashboard::apply`]. Host concerns (clock, dark mode, fullscreen) sit
//! behind the [`Environment`] capability trait; [`view::render`] turns the
//! current state into a serializable [`ViewModel`] on every change.

pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod view;

pub use config::Config;
pub use env::{Environment, FixedEnv, SystemEnv};
pub use error::SessionError;
pub use state::{Action, Dashboard, Tab, ViewState};
pub use view::{render, ErrorOutput, ViewModel};
