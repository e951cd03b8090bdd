use super::*;
use mkt_core::repositories::*;

trait Keyed {
    fn key(&self) -> &Id;
}

impl Keyed for Listing {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Keyed for SellerRating {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Keyed for JobApplication {
    fn key(&self) -> &Id {
        &self.id
    }
}

fn get<T: Clone + Keyed>(rows: &[T], id: &str) -> Result<T> {
    rows.iter()
        .find(|row| row.key().as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn insert<T: Keyed>(rows: &mut Vec<T>, row: T) -> Result<()> {
    if rows.iter().any(|r| r.key() == row.key()) {
        return Err(repo::Error::AlreadyExists);
    }
    rows.push(row);
    Ok(())
}

fn replace<T: Clone + Keyed>(rows: &mut [T], row: &T) -> Result<()> {
    let existing = rows
        .iter_mut()
        .find(|r| r.key() == row.key())
        .ok_or(repo::Error::NotFound)?;
    *existing = row.clone();
    Ok(())
}

impl ListingRepo for InMemoryDb {
    fn get_listing(&self, id: &str) -> Result<Listing> {
        get(&self.shared().listings, id)
    }

    fn all_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.shared().listings.clone())
    }

    fn listings_of_seller(&self, seller_id: &str) -> Result<Vec<Listing>> {
        Ok(self
            .shared()
            .listings
            .iter()
            .filter(|l| l.seller_id.as_str() == seller_id)
            .cloned()
            .collect())
    }

    fn count_listings(&self) -> Result<usize> {
        Ok(self.shared().listings.len())
    }

    fn create_listing(&self, listing: Listing) -> Result<()> {
        log::debug!("Storing new listing {}", listing.id);
        insert(&mut self.exclusive().listings, listing)
    }

    fn update_listing(&self, listing: &Listing) -> Result<()> {
        log::debug!("Updating listing {}", listing.id);
        replace(&mut self.exclusive().listings, listing)
    }
}

impl UserRepo for InMemoryDb {
    fn get_user(&self, id: &str) -> Result<User> {
        get(&self.shared().users, id)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.shared().users.clone())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        replace(&mut self.exclusive().users, user)
    }
}

impl CategoryRepo for InMemoryDb {
    fn all_categories(&self) -> Result<Vec<Category>> {
        Ok(self.shared().categories.clone())
    }

    fn get_category(&self, id: &str) -> Result<Category> {
        self.shared()
            .categories
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }
}

impl SellerRatingRepo for InMemoryDb {
    fn create_seller_rating(&self, rating: SellerRating) -> Result<()> {
        insert(&mut self.exclusive().seller_ratings, rating)
    }

    fn load_ratings_of_seller(&self, seller_id: &str) -> Result<Vec<SellerRating>> {
        Ok(self
            .shared()
            .seller_ratings
            .iter()
            .filter(|r| r.seller_id.as_str() == seller_id)
            .cloned()
            .collect())
    }
}

impl JobApplicationRepo for InMemoryDb {
    fn create_job_application(&self, application: JobApplication) -> Result<()> {
        insert(&mut self.exclusive().job_applications, application)
    }

    fn load_applications_of_listing(&self, listing_id: &str) -> Result<Vec<JobApplication>> {
        Ok(self
            .shared()
            .job_applications
            .iter()
            .filter(|a| a.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }
}
