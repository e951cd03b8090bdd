#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # mkt-entities
//!
//! Reusable, agnostic domain entities for the classifieds marketplace.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod application;
pub mod category;
pub mod email;
pub mod id;
pub mod listing;
pub mod rating;
pub mod review;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
