use super::{prelude::*, resolve_and_enrich, ResolutionContext};

/// Number of listings per effective status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusStats {
    pub fn of<'a>(listings: impl IntoIterator<Item = &'a EnrichedListing>) -> Self {
        listings
            .into_iter()
            .fold(Self::default(), |mut stats, listing| {
                stats.total += 1;
                match listing.status() {
                    ReviewStatus::Pending => stats.pending += 1,
                    ReviewStatus::Approved => stats.approved += 1,
                    ReviewStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Ordered by status priority.
    pub listings: Vec<EnrichedListing>,
    pub stats: StatusStats,
}

pub fn moderation_dashboard<R>(
    repo: &R,
    session: &Session,
    ctx: &ResolutionContext,
) -> Result<Dashboard>
where
    R: ListingRepo + UserRepo + CategoryRepo,
{
    if !session.is_logged_in() {
        return Err(Error::Unauthorized);
    }
    if !session.can_moderate() {
        return Err(Error::Forbidden);
    }
    let all = resolve_and_enrich(repo, repo.all_listings()?, ctx)?;
    let stats = StatusStats::of(&all);
    let listings = present(&all, &Default::default(), ListingOrder::ByStatusPriority)
        .into_iter()
        .cloned()
        .collect();
    log::debug!("Loaded moderation dashboard: {stats:?}");
    Ok(Dashboard { listings, stats })
}
