//! Filtering and sorting over the incident collection.
//!
//! Both operations borrow the collection read-only and preserve the caller's
//! data untouched; `filter` keeps the original relative order, `sort_by_date`
//! is stable so ties keep it too.

use crate::types::{Incident, SeverityFilter, SortOrder, StatusFilter};

/// Order-preserving subsequence of `incidents` matching all three predicates:
/// severity filter, status filter, and a case-insensitive substring search
/// over title and description. `All` filters and an empty search term match
/// every incident.
pub fn filter<'a>(
  incidents: &'a [Incident],
  severity: SeverityFilter,
  status: StatusFilter,
  search_term: &str,
) -> Vec<&'a Incident> {
  let needle = search_term.to_lowercase();
  incidents
    .iter()
    .filter(|incident| {
      severity.matches(incident.severity)
        && status.matches(incident.status)
        && (needle.is_empty()
          || incident.title.to_lowercase().contains(&needle)
          || incident.description.to_lowercase().contains(&needle))
    })
    .collect()
}

/// Sort by `reported_at`: `Newest` descending, `Oldest` ascending. Stable,
/// so incidents with equal timestamps keep their relative input order.
pub fn sort_by_date(mut incidents: Vec<&Incident>, order: SortOrder) -> Vec<&Incident> {
  incidents.sort_by(|a, b| match order {
    SortOrder::Newest => b.reported_at.cmp(&a.reported_at),
    SortOrder::Oldest => a.reported_at.cmp(&b.reported_at),
  });
  incidents
}

/// Filter then sort in one call — the list the dashboard renders.
pub fn select<'a>(
  incidents: &'a [Incident],
  severity: SeverityFilter,
  status: StatusFilter,
  search_term: &str,
  order: SortOrder,
) -> Vec<&'a Incident> {
  sort_by_date(filter(incidents, severity, status, search_term), order)
}
