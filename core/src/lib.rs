//! AI Safety Incident Dashboard — query engine core.
//!
//! Pure, deterministic functions over an in-memory incident collection:
//! filtering, sorting, aggregate statistics, id assignment, and
//! create-incident validation. Same inputs always produce the same outputs;
//! the engine holds no state of its own and never mutates its inputs.
//!
//! No DB, no network; pure computation + in-memory state.

pub mod query;
pub mod stats;
pub mod store;
pub mod types;
pub mod validate;

pub use query::{filter, select, sort_by_date};
pub use stats::{aggregate, percent, Stats};
pub use store::{next_id, IncidentStore};
pub use types::{Incident, Severity, SeverityFilter, SortOrder, Status, StatusFilter};
pub use validate::{validate_new_incident, Draft, FieldErrors};
