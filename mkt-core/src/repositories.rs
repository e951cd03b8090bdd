// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

fn optional<T>(res: Result<T>) -> Result<Option<T>> {
    match res {
        Ok(t) => Ok(Some(t)),
        Err(Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

pub trait ListingRepo {
    fn get_listing(&self, id: &str) -> Result<Listing>;
    fn try_get_listing(&self, id: &str) -> Result<Option<Listing>> {
        optional(self.get_listing(id))
    }

    // In insertion order
    fn all_listings(&self) -> Result<Vec<Listing>>;
    fn listings_of_seller(&self, seller_id: &str) -> Result<Vec<Listing>> {
        Ok(self
            .all_listings()?
            .into_iter()
            .filter(|l| l.seller_id.as_str() == seller_id)
            .collect())
    }
    fn count_listings(&self) -> Result<usize>;

    fn create_listing(&self, listing: Listing) -> Result<()>;
    fn update_listing(&self, listing: &Listing) -> Result<()>;
}

pub trait UserRepo {
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        optional(self.get_user(id))
    }
    fn all_users(&self) -> Result<Vec<User>>;

    fn update_user(&self, user: &User) -> Result<()>;
}

pub trait CategoryRepo {
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, id: &str) -> Result<Category> {
        self.all_categories()?
            .into_iter()
            .find(|c| c.id.as_str() == id)
            .ok_or(Error::NotFound)
    }
}

pub trait SellerRatingRepo {
    fn create_seller_rating(&self, rating: SellerRating) -> Result<()>;
    fn load_ratings_of_seller(&self, seller_id: &str) -> Result<Vec<SellerRating>>;
}

pub trait JobApplicationRepo {
    fn create_job_application(&self, application: JobApplication) -> Result<()>;
    fn load_applications_of_listing(&self, listing_id: &str) -> Result<Vec<JobApplication>>;
}
