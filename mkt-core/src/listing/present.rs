use std::{convert::Infallible, str::FromStr};

use crate::{entities::*, text};

use super::EnrichedListing;

/// Selects listings by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Id),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn matches(&self, category_id: &Id) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category_id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// Exactly `"all"` disables the filter, anything else is a category id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.into()))
        }
    }
}

impl From<Option<Id>> for CategoryFilter {
    fn from(from: Option<Id>) -> Self {
        from.map(Self::Only).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: CategoryFilter,
    /// Matched case-insensitively against the title and
    /// the description. Only an empty query matches everything.
    pub query: Option<String>,
}

impl ListingFilter {
    pub fn new(category: CategoryFilter, query: Option<&str>) -> Self {
        Self {
            category,
            query: query.and_then(text::normalize_query),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.category.matches(&listing.category_id) {
            return false;
        }
        let Some(query) = self.query.as_deref().and_then(text::normalize_query) else {
            return true;
        };
        text::contains_lowercase(&listing.title, &query)
            || text::contains_lowercase(&listing.description, &query)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingOrder {
    /// Keep the input order.
    #[default]
    Unordered,
    /// Pending before approved before rejected.
    /// Listings with the same status keep their relative order.
    ByStatusPriority,
}

pub fn filter_listings<'a, 'f>(
    listings: &'a [EnrichedListing],
    filter: &'f ListingFilter,
) -> impl Iterator<Item = &'a EnrichedListing> + 'f
where
    'a: 'f,
{
    listings.iter().filter(|l| filter.matches(&l.listing))
}

/// Filters and optionally orders a collection of listings
/// without modifying it.
pub fn present<'a>(
    listings: &'a [EnrichedListing],
    filter: &ListingFilter,
    order: ListingOrder,
) -> Vec<&'a EnrichedListing> {
    let mut presented: Vec<_> = filter_listings(listings, filter).collect();
    match order {
        ListingOrder::Unordered => {}
        ListingOrder::ByStatusPriority => {
            // `sort_by_key` is stable
            presented.sort_by_key(|l| l.status().priority());
        }
    }
    presented
}
