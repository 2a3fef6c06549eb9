//! Derived KPI aggregation for the dashboard overview.
//!
//! All figures are recomputed from a snapshot of the source collections on
//! every call; nothing is cached or stored. The service request tally is
//! the single source of truth for the count KPIs; the request ledger
//! feeds only the processing-time average.

use serde::Serialize;

use crate::request::{Request, RequestStatus};
use crate::service::Service;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Dashboard KPI counts derived from the service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    /// Sum of per-service request tallies. Negative tallies signal an
    /// error state, not negative demand, and clamp to zero.
    pub total_requests: i64,
    /// Services with at least one open request.
    pub pending_requests: i64,
    /// Same bucket as `pending_requests`, reported under the label the
    /// overview cards use.
    pub active_services: i64,
    /// Services with a zero request tally.
    pub completed_requests: i64,
}

impl DerivedStats {
    /// Aggregate KPI counts over a service snapshot.
    ///
    /// Order-independent: any permutation of `services` yields the same
    /// result.
    pub fn from_services(services: &[Service]) -> Self {
        let total_requests = services.iter().map(|s| s.request_count.max(0)).sum();
        let with_open = services.iter().filter(|s| s.request_count > 0).count() as i64;
        let completed = services.iter().filter(|s| s.request_count == 0).count() as i64;

        Self {
            total_requests,
            pending_requests: with_open,
            active_services: with_open,
            completed_requests: completed,
        }
    }
}

/// Mean turnaround of completed requests, in whole days.
///
/// Only requests that are completed and carry a completion instant
/// participate; returns 0 when none qualify.
pub fn average_processing_days(requests: &[Request]) -> i64 {
    let durations: Vec<i64> = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Completed)
        .filter_map(|r| {
            r.completed_at
                .map(|done| (done - r.created_at).num_milliseconds())
        })
        .collect();

    if durations.is_empty() {
        return 0;
    }

    let total: i64 = durations.iter().sum();
    (total as f64 / durations.len() as f64 / MILLIS_PER_DAY).round() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
