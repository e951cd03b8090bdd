use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title         : String,
    pub description   : String,
    pub price         : u64,
    pub category_id   : String,
    pub image_url     : Option<String>,
    pub image_hint    : Option<String>,
    pub salary_period : Option<SalaryPeriod>,
}

/// New listings always await moderation.
pub fn create_new_listing<R>(
    repo: &R,
    seller: &User,
    new_listing: NewListing,
    now: Timestamp,
) -> Result<Listing>
where
    R: ListingRepo + CategoryRepo,
{
    let NewListing {
        title,
        description,
        price,
        category_id,
        image_url,
        image_hint,
        salary_period,
    } = new_listing;
    let mut listing = Listing {
        id: Id::new(),
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        price,
        category_id: category_id.trim().into(),
        seller_id: seller.id.clone(),
        image_url,
        image_hint,
        salary_period,
        created_at: Some(now),
        status: ReviewStatus::Pending,
        rejection_reason: None,
    };
    listing.validate()?;
    let category = match repo.get_category(listing.category_id.as_str()) {
        Ok(category) => category,
        Err(RepoError::NotFound) => return Err(Error::CategoryDoesNotExist),
        Err(err) => return Err(err.into()),
    };
    if !category.is_jobs() {
        // Salaries only apply to job offers
        listing.salary_period = None;
    }
    log::info!(
        "Creating new listing {} in category {} for seller {}",
        listing.id,
        category.name,
        seller.id
    );
    repo.create_listing(listing.clone())?;
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::util::validate::ListingInvalidation;

    fn new_listing() -> NewListing {
        NewListing {
            title: "Royal Enfield Classic 350".into(),
            description: "2021 model, 12000 km, all papers clear".into(),
            price: 150_000,
            category_id: "cat-12".into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_pending_listing() {
        let db = MockDb::seeded();
        let seller = db.get_user("asha").unwrap();
        let count = db.count_listings().unwrap();
        let listing = create_new_listing(&db, &seller, new_listing(), now()).unwrap();
        assert_eq!(ReviewStatus::Pending, listing.status);
        assert_eq!(Some(now()), listing.created_at);
        assert_eq!(seller.id, listing.seller_id);
        assert_eq!(count + 1, db.count_listings().unwrap());
        assert_eq!(listing, db.get_listing(listing.id.as_str()).unwrap());
    }

    #[test]
    fn reject_invalid_listings() {
        let db = MockDb::seeded();
        let seller = db.get_user("asha").unwrap();
        let invalid = NewListing {
            title: "Bike".into(),
            ..new_listing()
        };
        assert!(matches!(
            create_new_listing(&db, &seller, invalid, now()),
            Err(Error::Listing(ListingInvalidation::Title))
        ));
        let invalid = NewListing {
            price: 0,
            ..new_listing()
        };
        assert!(matches!(
            create_new_listing(&db, &seller, invalid, now()),
            Err(Error::Listing(ListingInvalidation::Price))
        ));
        let invalid = NewListing {
            category_id: "cat-99".into(),
            ..new_listing()
        };
        assert!(matches!(
            create_new_listing(&db, &seller, invalid, now()),
            Err(Error::CategoryDoesNotExist)
        ));
        assert_eq!(5, db.count_listings().unwrap());
    }
}
