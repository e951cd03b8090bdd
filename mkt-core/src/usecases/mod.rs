use crate::{entities::*, listing::*, repositories::*};

mod apply_for_job;
mod browse_listings;
mod create_new_listing;
mod error;
mod load_listing;
mod moderation_dashboard;
mod rate_seller;
mod review_listings;
mod update_profile;
mod user_listings;

#[cfg(test)]
pub mod tests;

pub use self::{
    apply_for_job::*, browse_listings::*, create_new_listing::*, error::Error, load_listing::*,
    moderation_dashboard::*, rate_seller::*, review_listings::*, update_profile::*,
    user_listings::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::session::Session, db::*, entities::*, listing::*, repositories::*,
        util::validate::Validate, RepoError,
    };
}

type Result<T> = std::result::Result<T, Error>;

/// Reference time and rules for deriving the effective
/// status of listings.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext {
    pub now: Timestamp,
    pub staleness: StalenessRule,
}

impl ResolutionContext {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now,
            staleness: Default::default(),
        }
    }
}

fn resolve_and_enrich<R>(
    repo: &R,
    listings: Vec<Listing>,
    ctx: &ResolutionContext,
) -> Result<Vec<EnrichedListing>>
where
    R: UserRepo + CategoryRepo,
{
    let users = repo.all_users()?;
    let categories = repo.all_categories()?;
    Ok(resolve_and_enrich_all(
        listings,
        &users,
        &categories,
        ctx.now,
        &ctx.staleness,
    ))
}
