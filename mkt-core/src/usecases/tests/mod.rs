use super::super::{entities::*, repositories::*, RepoError};

use mkt_entities::builders::*;
use std::{cell::RefCell, result};
use time::macros::date;

type RepoResult<T> = result::Result<T, RepoError>;

/// The reference time of all tests.
pub fn now() -> Timestamp {
    date!(2024 - 06 - 15).into()
}

trait Key {
    fn key(&self) -> &str;
}

impl Key for Listing {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for SellerRating {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for JobApplication {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub listings: RefCell<Vec<Listing>>,
    pub users: RefCell<Vec<User>>,
    pub categories: Vec<Category>,
    pub seller_ratings: RefCell<Vec<SellerRating>>,
    pub job_applications: RefCell<Vec<JobApplication>>,
}

impl MockDb {
    /// Two sellers, one admin and listings in every state.
    pub fn seeded() -> Self {
        let users = vec![
            User::build()
                .id("asha")
                .name("Asha")
                .email("asha@example.com")
                .rating(4.0, 3)
                .finish(),
            User::build()
                .id("ravi")
                .name("Ravi")
                .email("ravi@example.com")
                .finish(),
            User::build()
                .id("admin")
                .name("Admin")
                .email("admin@example.com")
                .role(Role::Admin)
                .finish(),
        ];
        let categories = vec![
            Category::new("cat-10", "Cars"),
            Category::new("cat-11", "Mobiles"),
            Category::new("cat-12", "Bikes"),
            Category::new("cat-14", Category::NAME_JOBS),
            Category::new("cat-2", "Furniture"),
        ];
        let listings = vec![
            Listing::build()
                .id("approved-car")
                .title("Honda City 2018")
                .description("Well maintained sedan, single owner")
                .price(650_000)
                .category("cat-10")
                .seller("asha")
                .status(ReviewStatus::Approved)
                .created_at(date!(2024 - 05 - 20))
                .finish(),
            Listing::build()
                .id("stale-bike")
                .title("Hero Splendor")
                .description("Runs fine, needs new tyres")
                .price(25_000)
                .category("cat-12")
                .seller("ravi")
                .status(ReviewStatus::Pending)
                .created_at(date!(2024 - 06 - 01))
                .finish(),
            Listing::build()
                .id("approved-job")
                .title("Rust Developer")
                .description("Senior developer for our backend team")
                .price(1_800_000)
                .category("cat-14")
                .seller("asha")
                .status(ReviewStatus::Approved)
                .created_at(date!(2024 - 06 - 12))
                .finish(),
            Listing::build()
                .id("rejected-sofa")
                .title("Three seater sofa")
                .description("Slightly used, pick up only")
                .price(8_000)
                .category("cat-2")
                .seller("asha")
                .status(ReviewStatus::Rejected)
                .rejection_reason("Photos do not show the item")
                .created_at(date!(2024 - 06 - 05))
                .finish(),
            Listing::build()
                .id("fresh-phone")
                .title("iPhone 12 128GB")
                .description("Like new, with box and charger")
                .price(32_000)
                .category("cat-11")
                .seller("ravi")
                .status(ReviewStatus::Pending)
                .created_at(date!(2024 - 06 - 10))
                .finish(),
        ];
        Self {
            listings: RefCell::new(listings),
            users: RefCell::new(users),
            categories,
            ..Default::default()
        }
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let Some(pos) = objects.iter().position(|x| x.key() == e.key()) else {
        return Err(RepoError::NotFound);
    };
    objects[pos] = e.clone();
    Ok(())
}

impl ListingRepo for MockDb {
    fn get_listing(&self, id: &str) -> RepoResult<Listing> {
        get(&self.listings.borrow(), id)
    }
    fn all_listings(&self) -> RepoResult<Vec<Listing>> {
        Ok(self.listings.borrow().clone())
    }
    fn count_listings(&self) -> RepoResult<usize> {
        Ok(self.listings.borrow().len())
    }
    fn create_listing(&self, listing: Listing) -> RepoResult<()> {
        create(&mut self.listings.borrow_mut(), listing)
    }
    fn update_listing(&self, listing: &Listing) -> RepoResult<()> {
        update(&mut self.listings.borrow_mut(), listing)
    }
}

impl UserRepo for MockDb {
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
}

impl CategoryRepo for MockDb {
    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

impl SellerRatingRepo for MockDb {
    fn create_seller_rating(&self, rating: SellerRating) -> RepoResult<()> {
        create(&mut self.seller_ratings.borrow_mut(), rating)
    }
    fn load_ratings_of_seller(&self, seller_id: &str) -> RepoResult<Vec<SellerRating>> {
        Ok(self
            .seller_ratings
            .borrow()
            .iter()
            .filter(|r| r.seller_id.as_str() == seller_id)
            .cloned()
            .collect())
    }
}

impl JobApplicationRepo for MockDb {
    fn create_job_application(&self, application: JobApplication) -> RepoResult<()> {
        create(&mut self.job_applications.borrow_mut(), application)
    }
    fn load_applications_of_listing(&self, listing_id: &str) -> RepoResult<Vec<JobApplication>> {
        Ok(self
            .job_applications
            .borrow()
            .iter()
            .filter(|a| a.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }
}
