//! Deterministic seed data for the in-memory store.
//!
//! One fixture set shared by the dev server and the integration tests.
//! Timestamps are fixed instants so list orderings and derived stats are
//! reproducible run to run.

use chrono::{TimeZone, Utc};
use compliancehub_core::messaging::{Message, PresenceStatus, User, VIEWER_ID};
use compliancehub_core::request::{Request, RequestStatus, Urgency};
use compliancehub_core::service::Service;
use compliancehub_core::types::{DbId, Timestamp};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// The verification service catalog.
pub fn services() -> Vec<Service> {
    let service = |id: DbId,
                   name: &str,
                   description: &str,
                   category: &str,
                   icon: &str,
                   processing_time: &str,
                   cost: f64,
                   request_count: i64| Service {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
        processing_time: processing_time.to_string(),
        cost,
        request_count,
    };

    vec![
        service(
            1,
            "Identity Check",
            "Government ID and biometric identity verification",
            "Identity Verification",
            "Shield",
            "1-2 business days",
            49.0,
            12,
        ),
        service(
            2,
            "Document Authentication",
            "Authenticity checks for passports, licences, and permits",
            "Identity Verification",
            "FileCheck",
            "2-3 business days",
            79.0,
            8,
        ),
        service(
            3,
            "Criminal Record Check",
            "National and county-level criminal history search",
            "Background Checks",
            "Search",
            "3-5 business days",
            59.0,
            15,
        ),
        service(
            4,
            "Employment History",
            "Employer-confirmed role and tenure verification",
            "Background Checks",
            "Briefcase",
            "5-7 business days",
            89.0,
            6,
        ),
        service(
            5,
            "Credit Assessment",
            "Consumer credit and adverse financial history report",
            "Financial Checks",
            "CreditCard",
            "2-4 business days",
            99.0,
            0,
        ),
        service(
            6,
            "PEP & Sanctions Screening",
            "Politically exposed persons and global sanctions lists",
            "Regulatory Checks",
            "AlertTriangle",
            "1 business day",
            129.0,
            9,
        ),
        service(
            7,
            "Compliance Audit",
            "Full regulatory compliance audit with written findings",
            "Regulatory Checks",
            "ClipboardCheck",
            "7-10 business days",
            499.0,
            0,
        ),
        // Negative tally: upstream sync error state, visible only under
        // the All filter.
        service(
            8,
            "Document Notarization",
            "Certified notarization of compliance documents",
            "Document Services",
            "FileText",
            "1 business day",
            25.0,
            -1,
        ),
    ]
}

/// The verification request ledger, spanning all four statuses.
pub fn requests() -> Vec<Request> {
    let request = |id: DbId,
                   service_id: DbId,
                   candidate_name: &str,
                   candidate_email: &str,
                   status: RequestStatus,
                   urgency: Urgency,
                   created_at: Timestamp,
                   completed_at: Option<Timestamp>,
                   documents: &[&str]| Request {
        id,
        service_id,
        candidate_name: candidate_name.to_string(),
        candidate_email: candidate_email.to_string(),
        candidate_phone: String::new(),
        reference: format!("REF-{:04}", 1000 + id),
        notes: String::new(),
        status,
        urgency,
        created_at,
        completed_at,
        documents: documents.iter().map(|d| d.to_string()).collect(),
    };

    vec![
        request(
            1,
            1,
            "Emily Carter",
            "emily.carter@example.com",
            RequestStatus::Pending,
            Urgency::Standard,
            at(2024, 2, 26, 10, 15),
            None,
            &[],
        ),
        request(
            2,
            3,
            "James Okafor",
            "james.okafor@example.com",
            RequestStatus::Active,
            Urgency::Priority,
            at(2024, 2, 20, 14, 30),
            None,
            &["passport.pdf"],
        ),
        request(
            3,
            2,
            "Maria Santos",
            "maria.santos@example.com",
            RequestStatus::Completed,
            Urgency::Standard,
            at(2024, 2, 10, 9, 0),
            Some(at(2024, 2, 14, 16, 45)),
            &["passport.pdf", "utility-bill.pdf"],
        ),
        request(
            4,
            6,
            "Daniel Kim",
            "daniel.kim@example.com",
            RequestStatus::Completed,
            Urgency::Urgent,
            at(2024, 1, 29, 11, 20),
            Some(at(2024, 2, 3, 10, 5)),
            &[],
        ),
        request(
            5,
            3,
            "Priya Patel",
            "priya.patel@example.com",
            RequestStatus::Rejected,
            Urgency::Standard,
            at(2024, 2, 18, 8, 45),
            None,
            &["consent-form.pdf"],
        ),
        request(
            6,
            4,
            "Lucas Meyer",
            "lucas.meyer@example.com",
            RequestStatus::Pending,
            Urgency::Priority,
            at(2024, 3, 1, 13, 10),
            None,
            &[],
        ),
    ]
}

/// The messaging roster. The dashboard viewer is not part of it.
pub fn users() -> Vec<User> {
    let user = |id: DbId, name: &str, status: PresenceStatus| User {
        id,
        name: name.to_string(),
        avatar: None,
        status,
    };

    vec![
        user(1, "Sarah Chen", PresenceStatus::Online),
        user(2, "Mike Johnson", PresenceStatus::Online),
        user(3, "Emma Davis", PresenceStatus::Online),
        user(4, "Alex Rodriguez", PresenceStatus::Away),
        user(5, "Lisa Wang", PresenceStatus::Online),
        user(6, "Tom Wilson", PresenceStatus::Offline),
        user(7, "Rachel Green", PresenceStatus::Online),
    ]
}

/// The opening sidebar conversation.
pub fn messages() -> Vec<Message> {
    let message = |id: DbId,
                   sender_id: DbId,
                   sender_name: &str,
                   text: &str,
                   timestamp: Timestamp,
                   is_read: bool| Message {
        id,
        sender_id,
        sender_name: sender_name.to_string(),
        text: text.to_string(),
        timestamp,
        is_read,
    };

    vec![
        message(
            1,
            2,
            "Mike Johnson",
            "The compliance audit for Q4 is ready for review. All documents have been submitted.",
            at(2024, 3, 15, 9, 30),
            false,
        ),
        message(
            2,
            VIEWER_ID,
            "You",
            "Great! I'll review it this afternoon.",
            at(2024, 3, 15, 9, 35),
            true,
        ),
        message(
            3,
            1,
            "Sarah Chen",
            "The new verification service is now live. We've already received 3 requests.",
            at(2024, 3, 15, 9, 40),
            false,
        ),
        message(
            4,
            5,
            "Lisa Wang",
            "Can we schedule a team meeting to discuss the upcoming regulatory changes?",
            at(2024, 3, 15, 9, 43),
            false,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_category_and_both_edge_tallies() {
        let services = services();

        let categories: std::collections::HashSet<&str> =
            services.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories.len(), 5);

        assert!(services.iter().any(|s| s.request_count == 0));
        assert!(services.iter().any(|s| s.request_count < 0));
    }

    #[test]
    fn ledger_spans_all_statuses_and_ids_are_unique() {
        let requests = requests();

        for status in [
            RequestStatus::Pending,
            RequestStatus::Active,
            RequestStatus::Completed,
            RequestStatus::Rejected,
        ] {
            assert!(requests.iter().any(|r| r.status == status), "{status:?} missing");
        }

        let mut ids: Vec<DbId> = requests.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
    }

    #[test]
    fn completed_requests_carry_a_completion_instant() {
        for request in requests() {
            assert_eq!(
                request.completed_at.is_some(),
                request.status == RequestStatus::Completed,
                "request {} has inconsistent completion state",
                request.id
            );
        }
    }

    #[test]
    fn every_request_references_a_cataloged_service() {
        let service_ids: Vec<DbId> = services().iter().map(|s| s.id).collect();
        for request in requests() {
            assert!(service_ids.contains(&request.service_id));
        }
    }
}
