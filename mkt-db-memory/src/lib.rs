//! Volatile storage of the marketplace.
//!
//! All data is kept in memory and lost when the process exits.

use mkt_core::{entities::*, repositories as repo};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

mod repo_impl;

type Result<T> = std::result::Result<T, repo::Error>;

#[derive(Debug, Default)]
struct Tables {
    listings: Vec<Listing>,
    users: Vec<User>,
    categories: Vec<Category>,
    seller_ratings: Vec<SellerRating>,
    job_applications: Vec<JobApplication>,
}

/// Cheaply cloneable handle that shares the underlying tables.
///
/// Multiple readers can access the tables concurrently while
/// writers get exclusive access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDb {
    tables: Arc<RwLock<Tables>>,
}

/// Initial content of the storage.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub listings: Vec<Listing>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records with duplicate ids are skipped with a warning,
    /// the first occurrence wins.
    pub fn import(snapshot: Snapshot) -> Self {
        let Snapshot {
            categories,
            users,
            listings,
        } = snapshot;
        let mut tables = Tables::default();
        for category in categories {
            if tables.categories.iter().any(|c| c.id == category.id) {
                log::warn!("Skipping category with duplicate id {}", category.id);
                continue;
            }
            tables.categories.push(category);
        }
        for user in users {
            if tables.users.iter().any(|u| u.id == user.id) {
                log::warn!("Skipping user with duplicate id {}", user.id);
                continue;
            }
            tables.users.push(user);
        }
        for listing in listings {
            if tables.listings.iter().any(|l| l.id == listing.id) {
                log::warn!("Skipping listing with duplicate id {}", listing.id);
                continue;
            }
            tables.listings.push(listing);
        }
        log::info!(
            "Imported {} categories, {} users and {} listings",
            tables.categories.len(),
            tables.users.len(),
            tables.listings.len()
        );
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    fn shared(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    fn exclusive(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}
