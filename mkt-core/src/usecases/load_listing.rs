use super::{prelude::*, resolve_and_enrich, ResolutionContext};

pub fn load_listing<R>(repo: &R, id: &str, ctx: &ResolutionContext) -> Result<EnrichedListing>
where
    R: ListingRepo + UserRepo + CategoryRepo,
{
    let listing = repo.get_listing(id)?;
    let mut enriched = resolve_and_enrich(repo, vec![listing], ctx)?;
    debug_assert_eq!(1, enriched.len());
    enriched.pop().ok_or(Error::Repo(RepoError::NotFound))
}
