use super::{prelude::*, resolve_and_enrich, ResolutionContext};

/// Publicly visible listings, i.e. those that are effectively approved.
pub fn browse_listings<R>(
    repo: &R,
    ctx: &ResolutionContext,
    filter: &ListingFilter,
) -> Result<Vec<EnrichedListing>>
where
    R: ListingRepo + UserRepo + CategoryRepo,
{
    let listings = repo.all_listings()?;
    let visible = resolve_and_enrich(repo, listings, ctx)?
        .into_iter()
        .filter(|l| l.status().is_visible())
        .collect::<Vec<_>>();
    let presented = present(&visible, filter, ListingOrder::Unordered)
        .into_iter()
        .cloned()
        .collect();
    Ok(presented)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn only_approved_listings_are_visible() {
        let db = MockDb::seeded();
        let ctx = ResolutionContext::new(now());
        let listings = browse_listings(&db, &ctx, &Default::default()).unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(vec!["approved-car", "approved-job"], ids);
        assert_eq!("Asha", listings[0].seller_name());
        assert_eq!(Some("Cars"), listings[0].category_name());
    }

    #[test]
    fn browse_category_with_query() {
        let db = MockDb::seeded();
        let ctx = ResolutionContext::new(now());
        let filter = ListingFilter::new(CategoryFilter::Only("cat-14".into()), Some("DEVELOPER"));
        let listings = browse_listings(&db, &ctx, &filter).unwrap();
        assert_eq!(1, listings.len());
        assert_eq!("approved-job", listings[0].id().as_str());

        let filter = ListingFilter::new(CategoryFilter::Only("cat-14".into()), Some("honda"));
        assert!(browse_listings(&db, &ctx, &filter).unwrap().is_empty());
    }
}
