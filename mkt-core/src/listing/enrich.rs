use crate::entities::*;

use super::{resolve, ResolvedListing, StalenessRule, StatusResolution};

/// Displayed in place of the name of a seller that could not be found.
pub const UNKNOWN_SELLER_NAME: &str = "Unknown";

/// A listing together with its effective status and the
/// related entities that have been looked up by id.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedListing {
    pub listing: Listing,
    pub resolution: StatusResolution,
    pub seller: Option<User>,
    pub category: Option<Category>,
}

impl EnrichedListing {
    pub fn id(&self) -> &Id {
        &self.listing.id
    }

    pub fn status(&self) -> ReviewStatus {
        self.resolution.status
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.resolution.rejection_reason.as_deref()
    }

    pub fn auto_rejected(&self) -> bool {
        self.resolution.auto_rejected
    }

    pub fn seller_name(&self) -> &str {
        self.seller
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(UNKNOWN_SELLER_NAME)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Recomputes the effective status from the stored listing.
    pub fn resolve(mut self, now: Timestamp, rule: &StalenessRule) -> Self {
        let ResolvedListing {
            listing,
            resolution,
        } = resolve(self.listing, now, rule);
        self.listing = listing;
        self.resolution = resolution;
        self
    }
}

/// Looks up the seller and the category of a listing.
///
/// Missing references are tolerated and result in `None`.
/// The first match wins if ids are not unique.
pub fn enrich(
    listing: impl Into<ResolvedListing>,
    users: &[User],
    categories: &[Category],
) -> EnrichedListing {
    let ResolvedListing {
        listing,
        resolution,
    } = listing.into();
    let seller = users.iter().find(|u| u.id == listing.seller_id).cloned();
    let category = categories
        .iter()
        .find(|c| c.id == listing.category_id)
        .cloned();
    EnrichedListing {
        listing,
        resolution,
        seller,
        category,
    }
}

/// Resolves the status of all listings before enriching them.
pub fn resolve_and_enrich_all(
    listings: Vec<Listing>,
    users: &[User],
    categories: &[Category],
    now: Timestamp,
    rule: &StalenessRule,
) -> Vec<EnrichedListing> {
    listings
        .into_iter()
        .map(|listing| {
            let resolved = resolve(listing, now, rule);
            if resolved.resolution.auto_rejected {
                log::debug!(
                    "Listing {} has been pending since {:?} and is considered rejected",
                    resolved.listing.id,
                    resolved.listing.created_at.map(|t| t.to_string())
                );
            }
            enrich(resolved, users, categories)
        })
        .collect()
}
