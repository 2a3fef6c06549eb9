//! Filtering and sorting for the dashboard list views.
//!
//! Everything in this module is a pure function over borrowed slices:
//! inputs are never mutated, outputs are freshly allocated, and relative
//! input order is preserved wherever the query does not dictate one
//! (stable filter, stable sort). The functions are total: absent or
//! odd-looking field values degrade to safe defaults instead of failing.

use serde::Deserialize;

use crate::request::Request;
use crate::service::Service;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Service query state
// ---------------------------------------------------------------------------

/// Category wildcard accepted by [`ServiceQuery`].
pub const CATEGORY_ALL: &str = "All";

/// Derived status bucket for services, keyed off the open request tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatusFilter {
    #[default]
    All,
    /// Services with open requests. Currently the same bucket as
    /// [`ServiceStatusFilter::Active`]; whether the two should diverge is
    /// an open product question.
    Pending,
    /// Services with open requests.
    Active,
    /// Services with a zero request tally.
    Completed,
}

/// Inclusive submission-date bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// Query state for the service list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceQuery {
    /// Case-insensitive substring matched against name, description, and
    /// category. Empty means no search filtering.
    pub search_term: String,
    /// Exact category, or [`CATEGORY_ALL`] for no category filtering.
    pub category: String,
    pub status: ServiceStatusFilter,
    /// Accepted and parsed, but no predicate consumes it yet.
    /// TODO: apply once the date range picker is wired to the list.
    pub date_range: Option<DateRange>,
}

impl ServiceQuery {
    /// The unfiltered query: empty search, all categories, all statuses.
    pub fn unfiltered() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Service filtering
// ---------------------------------------------------------------------------

/// Derive the displayed subset of services for a query.
///
/// Filters are applied in sequence: search term, category, status. The
/// result keeps the input's relative order and is always a subset of the
/// input (no reordering, no duplication, no mutation).
pub fn filter_services(services: &[Service], query: &ServiceQuery) -> Vec<Service> {
    let term = query.search_term.to_lowercase();

    services
        .iter()
        .filter(|s| matches_search(s, &term))
        .filter(|s| matches_category(s, &query.category))
        .filter(|s| matches_status(s, query.status))
        .cloned()
        .collect()
}

fn matches_search(service: &Service, folded_term: &str) -> bool {
    if folded_term.is_empty() {
        return true;
    }
    service.name.to_lowercase().contains(folded_term)
        || service.description.to_lowercase().contains(folded_term)
        || service.category.to_lowercase().contains(folded_term)
}

fn matches_category(service: &Service, category: &str) -> bool {
    // Empty behaves like the wildcard so a default query filters nothing.
    category.is_empty() || category == CATEGORY_ALL || service.category == category
}

fn matches_status(service: &Service, status: ServiceStatusFilter) -> bool {
    match status {
        ServiceStatusFilter::All => true,
        // Pending and Active resolve to the same predicate; a negative
        // tally signals an error state and lands in neither bucket.
        ServiceStatusFilter::Pending | ServiceStatusFilter::Active => service.request_count > 0,
        ServiceStatusFilter::Completed => service.request_count == 0,
    }
}

// ---------------------------------------------------------------------------
// Request filtering and sorting
// ---------------------------------------------------------------------------

/// Status filter for the request ledger view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatusFilter {
    #[default]
    All,
    Pending,
    Active,
    Completed,
    Rejected,
}

/// Sortable columns of the request table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CandidateName,
    CandidateEmail,
    Reference,
    Status,
    Urgency,
    CreatedAt,
    CompletedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest first, matching the ledger's initial view.
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Column-header click behavior: re-selecting the current field flips
    /// the direction, selecting a new field resets to ascending.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }
}

/// Derive the displayed request list: status filter, then a stable sort.
///
/// `Desc` reverses the exact comparator `Asc` uses, so the two directions
/// are mirrors of one another. Ties keep their relative input order.
pub fn filter_and_sort_requests(
    requests: &[Request],
    status: RequestStatusFilter,
    sort: &SortState,
) -> Vec<Request> {
    let mut result: Vec<Request> = requests
        .iter()
        .filter(|r| matches_request_status(r, status))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    result
}

fn matches_request_status(request: &Request, status: RequestStatusFilter) -> bool {
    match status {
        RequestStatusFilter::All => true,
        RequestStatusFilter::Pending => request.status == crate::request::RequestStatus::Pending,
        RequestStatusFilter::Active => request.status == crate::request::RequestStatus::Active,
        RequestStatusFilter::Completed => {
            request.status == crate::request::RequestStatus::Completed
        }
        RequestStatusFilter::Rejected => request.status == crate::request::RequestStatus::Rejected,
    }
}

fn compare_by_field(a: &Request, b: &Request, field: SortField) -> std::cmp::Ordering {
    match field {
        SortField::CandidateName => fold_cmp(&a.candidate_name, &b.candidate_name),
        SortField::CandidateEmail => fold_cmp(&a.candidate_email, &b.candidate_email),
        SortField::Reference => fold_cmp(&a.reference, &b.reference),
        // Status and urgency order like their wire strings, which is what
        // the table columns display and sort on.
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Urgency => a.urgency.as_str().cmp(b.urgency.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        // A request without a completion instant sorts before any that
        // has one: absent timestamps are the earliest possible value.
        SortField::CompletedAt => a.completed_at.cmp(&b.completed_at),
    }
}

/// Case-insensitive lexicographic comparison.
fn fold_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
