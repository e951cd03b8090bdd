//! # mkt-core
//!
//! Business rules of the classifieds marketplace.
//!
//! Listings are read from repositories, their effective moderation
//! status is resolved against a reference time and they are enriched
//! with seller and category before they are presented.

pub mod authorization;
pub mod db;
pub mod listing;
pub mod rating;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use mkt_entities::{
        application::*, category::*, email::*, id::*, listing::*, rating::*, review::*, time::*,
        user::*,
    };
}

pub use self::repositories::Error as RepoError;
