use strum::Display;

use crate::entities::*;

use super::EnrichedListing;

pub const PENDING_NOTICE_TITLE: &str = "Pending Review";
pub const PENDING_NOTICE_MESSAGE: &str =
    "This listing is currently being reviewed by our moderators.";
pub const REJECTED_NOTICE_TITLE: &str = "Listing Rejected";
pub const REJECTED_NOTICE_FALLBACK: &str = "This listing was not approved by our moderators.";

/// Hint that is shown on the detail page of a listing
/// that is not (yet) publicly visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub title: &'static str,
    pub message: String,
}

pub fn status_notice(listing: &EnrichedListing) -> Option<StatusNotice> {
    match listing.status() {
        ReviewStatus::Approved => None,
        ReviewStatus::Pending => Some(StatusNotice {
            title: PENDING_NOTICE_TITLE,
            message: PENDING_NOTICE_MESSAGE.to_string(),
        }),
        ReviewStatus::Rejected => Some(StatusNotice {
            title: REJECTED_NOTICE_TITLE,
            message: listing
                .rejection_reason()
                .unwrap_or(REJECTED_NOTICE_FALLBACK)
                .to_string(),
        }),
    }
}

/// How the owner of a listing is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContactRole {
    Seller,
    Employer,
    Provider,
}

impl ContactRole {
    pub fn of(category: Option<&Category>) -> Self {
        match category {
            Some(c) if c.is_jobs() => Self::Employer,
            Some(c) if c.is_service_like() => Self::Provider,
            _ => Self::Seller,
        }
    }
}

/// Listings younger than `recent_within` are flagged as new.
pub fn is_recent(listing: &Listing, now: Timestamp, recent_within: Duration) -> bool {
    listing.created_at.is_some_and(|created_at| {
        let age = now.since(created_at);
        age >= Duration::ZERO && age < recent_within
    })
}
