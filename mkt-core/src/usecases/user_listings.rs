use super::{prelude::*, resolve_and_enrich, ResolutionContext};

/// All listings of a seller regardless of their status.
pub fn user_listings<R>(
    repo: &R,
    user: &User,
    ctx: &ResolutionContext,
) -> Result<Vec<EnrichedListing>>
where
    R: ListingRepo + UserRepo + CategoryRepo,
{
    let listings = repo.listings_of_seller(user.id.as_str())?;
    resolve_and_enrich(repo, listings, ctx)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn listings_of_seller() {
        let db = MockDb::seeded();
        let ctx = ResolutionContext::new(now());
        let ravi = db.get_user("ravi").unwrap();
        let listings = user_listings(&db, &ravi, &ctx).unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(vec!["stale-bike", "fresh-phone"], ids);
        assert!(listings[0].auto_rejected());
        assert_eq!(ReviewStatus::Pending, listings[1].status());
    }

    #[test]
    fn no_listings() {
        let db = MockDb::seeded();
        let ctx = ResolutionContext::new(now());
        let admin = db.get_user("admin").unwrap();
        assert!(user_listings(&db, &admin, &ctx).unwrap().is_empty());
    }
}
