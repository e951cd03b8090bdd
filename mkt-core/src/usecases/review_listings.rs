use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Records a moderation decision for the given listings.
///
/// Unknown ids are skipped. Returns the number of
/// listings that have been updated.
pub fn review_listings<R>(
    repo: &R,
    reviewer: &User,
    ids: &[&str],
    decision: &Decision,
) -> Result<usize>
where
    R: ListingRepo,
{
    authorize_role(reviewer, Role::Admin)?;
    log::info!(
        "Changing review status of {} listings to {}",
        ids.len(),
        decision.status()
    );
    let mut count = 0;
    for id in ids {
        let Some(mut listing) = repo.try_get_listing(id)? else {
            log::warn!("Cannot review unknown listing {id}");
            continue;
        };
        decision.apply_to(&mut listing);
        repo.update_listing(&listing)?;
        count += 1;
    }
    log::info!(
        "Changed review status of {} listings to {}",
        count,
        decision.status()
    );
    Ok(count)
}
