use crate::entities::*;

/// The canonical reason that is attached to listings which have been
/// rejected by the [`StalenessRule`] instead of a moderator.
pub const AUTO_REJECTION_REASON: &str =
    "This listing was automatically rejected because it remained pending review for too long.";

/// Listings that remain pending for longer than `stale_after` are
/// considered rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessRule {
    pub stale_after: Duration,
}

impl StalenessRule {
    pub const DEFAULT_STALE_AFTER_DAYS: i64 = 7;

    pub const fn new(stale_after: Duration) -> Self {
        Self { stale_after }
    }

    /// A listing without a creation time never becomes stale.
    pub fn is_stale(&self, listing: &Listing, now: Timestamp) -> bool {
        if !listing.is_pending() {
            return false;
        }
        let Some(created_at) = listing.created_at else {
            return false;
        };
        now.checked_sub(self.stale_after)
            .map(|threshold| created_at < threshold)
            .unwrap_or(false)
    }
}

impl Default for StalenessRule {
    fn default() -> Self {
        Self::new(Duration::days(Self::DEFAULT_STALE_AFTER_DAYS))
    }
}

/// The status of a listing as it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResolution {
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    /// `true` if the rejection was caused by the [`StalenessRule`].
    pub auto_rejected: bool,
}

impl StatusResolution {
    /// Takes the recorded status of the listing as it is.
    pub fn recorded(listing: &Listing) -> Self {
        let status = listing.status;
        let rejection_reason = listing
            .rejection_reason
            .clone()
            .filter(|_| status == ReviewStatus::Rejected);
        Self {
            status,
            rejection_reason,
            auto_rejected: false,
        }
    }

    pub fn auto_rejected() -> Self {
        Self {
            status: ReviewStatus::Rejected,
            rejection_reason: Some(AUTO_REJECTION_REASON.to_string()),
            auto_rejected: true,
        }
    }
}

pub fn resolve_status(listing: &Listing, now: Timestamp, rule: &StalenessRule) -> StatusResolution {
    if rule.is_stale(listing, now) {
        StatusResolution::auto_rejected()
    } else {
        StatusResolution::recorded(listing)
    }
}

/// A stored listing together with its effective status.
///
/// The stored listing is never modified by the resolution. Resolving
/// again always starts from the stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedListing {
    pub listing: Listing,
    pub resolution: StatusResolution,
}

impl ResolvedListing {
    pub fn resolve(self, now: Timestamp, rule: &StalenessRule) -> Self {
        resolve(self.listing, now, rule)
    }

    pub fn status(&self) -> ReviewStatus {
        self.resolution.status
    }
}

impl From<Listing> for ResolvedListing {
    fn from(listing: Listing) -> Self {
        let resolution = StatusResolution::recorded(&listing);
        Self {
            listing,
            resolution,
        }
    }
}

pub fn resolve(listing: Listing, now: Timestamp, rule: &StalenessRule) -> ResolvedListing {
    let resolution = resolve_status(&listing, now, rule);
    ResolvedListing {
        listing,
        resolution,
    }
}
