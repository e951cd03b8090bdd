use crate::{entities::*, text};

use super::{EnrichedListing, StatusResolution};

/// A moderator's verdict on a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { reason: Option<String> },
}

impl Decision {
    /// A blank reason is treated as no reason at all.
    pub fn reject(reason: Option<&str>) -> Self {
        Self::Reject {
            reason: reason.and_then(text::non_blank),
        }
    }

    pub fn status(&self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Reject { .. } => ReviewStatus::Rejected,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Approve => None,
            Self::Reject { reason } => reason.as_deref(),
        }
    }

    /// Records the decision in the stored listing.
    pub fn apply_to(&self, listing: &mut Listing) {
        listing.status = self.status();
        listing.rejection_reason = self.reason().map(ToString::to_string);
    }
}

impl EnrichedListing {
    /// An explicit decision always overrides an automatic rejection.
    pub fn apply_decision(&mut self, decision: &Decision) {
        decision.apply_to(&mut self.listing);
        self.resolution = StatusResolution::recorded(&self.listing);
        debug_assert!(!self.resolution.auto_rejected);
    }
}

/// Applies a decision to the listing with the given id.
///
/// Unknown ids are silently ignored and the collection is
/// returned unchanged.
pub fn apply_decision(
    mut listings: Vec<EnrichedListing>,
    id: &Id,
    decision: &Decision,
) -> Vec<EnrichedListing> {
    if let Some(listing) = listings.iter_mut().find(|l| l.id() == id) {
        listing.apply_decision(decision);
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::{super::*, *};
    use mkt_entities::builders::*;
    use time::macros::date;

    fn now() -> Timestamp {
        date!(2024 - 06 - 15).into()
    }

    fn listings() -> Vec<EnrichedListing> {
        let listings = vec![
            Listing::build()
                .id("l1")
                .created_at(date!(2024 - 06 - 01))
                .finish(),
            Listing::build()
                .id("l2")
                .created_at(date!(2024 - 06 - 10))
                .finish(),
        ];
        resolve_and_enrich_all(listings, &[], &[], now(), &Default::default())
    }

    #[test]
    fn approve_auto_rejected_listing() {
        let listings = apply_decision(listings(), &"l1".into(), &Decision::Approve);
        assert_eq!(ReviewStatus::Approved, listings[0].status());
        assert!(!listings[0].auto_rejected());
        assert_eq!(None, listings[0].rejection_reason());
        // Remains approved when resolved again
        let l1 = listings[0].clone().resolve(now(), &Default::default());
        assert_eq!(ReviewStatus::Approved, l1.status());
    }

    #[test]
    fn reject_with_reason() {
        let decision = Decision::reject(Some("Misleading photos"));
        let listings = apply_decision(listings(), &"l2".into(), &decision);
        let l2 = &listings[1];
        assert_eq!(ReviewStatus::Rejected, l2.status());
        assert_eq!(Some("Misleading photos"), l2.rejection_reason());
        assert!(!l2.auto_rejected());
        assert_eq!(Some("Misleading photos"), l2.listing.rejection_reason.as_deref());
    }

    #[test]
    fn reject_auto_rejected_listing_clears_flag() {
        let before = listings();
        assert!(before[0].auto_rejected());
        let listings = apply_decision(before, &"l1".into(), &Decision::reject(None));
        assert_eq!(ReviewStatus::Rejected, listings[0].status());
        assert!(!listings[0].auto_rejected());
        assert_eq!(None, listings[0].rejection_reason());
    }

    #[test]
    fn blank_reason_is_no_reason() {
        assert_eq!(Decision::Reject { reason: None }, Decision::reject(Some("  ")));
    }

    #[test]
    fn approve_clears_previous_reason() {
        let mut listing = Listing::build()
            .status(ReviewStatus::Rejected)
            .rejection_reason("Spam")
            .finish();
        Decision::Approve.apply_to(&mut listing);
        assert_eq!(ReviewStatus::Approved, listing.status);
        assert_eq!(None, listing.rejection_reason);
    }

    #[test]
    fn ignore_unknown_id() {
        let before = listings();
        let after = apply_decision(before.clone(), &"unknown".into(), &Decision::Approve);
        assert_eq!(before, after);
    }

    #[test]
    fn leave_other_listings_untouched() {
        let before = listings();
        let after = apply_decision(before.clone(), &"l2".into(), &Decision::Approve);
        assert_eq!(before[0], after[0]);
    }
}
