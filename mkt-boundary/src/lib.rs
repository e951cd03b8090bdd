//! Serializable data structures of the marketplace.
//!
//! Field names are camel-cased to stay compatible with
//! existing JSON data sets.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// A complete snapshot of the marketplace data.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    Year,
    Month,
    Hour,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id               : String,
    pub title            : String,
    pub description      : String,
    pub price            : u64,
    pub category_id      : String,
    pub seller_id        : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint       : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_period    : Option<SalaryPeriod>,
    /// Either RFC 3339 or a plain `YYYY-MM-DD` date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at       : Option<String>,
    pub status           : ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rejected    : Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id             : String,
    pub name           : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url     : Option<String>,
    #[serde(default)]
    pub average_rating : f64,
    #[serde(default)]
    pub reviews        : u32,
    pub email          : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role           : Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile         : Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob            : Option<String>,
}

/// A listing as it is displayed, with its effective status
/// and the related seller and category.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct StatusStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Dashboard {
    pub stats: StatusStats,
    pub listings: Vec<EnrichedListing>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub enum Resume {
    /// File name of the attached document
    Attachment(String),
    Link(String),
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id           : String,
    pub listing_id   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id : Option<String>,
    pub created_at   : String,
    pub name         : String,
    pub email        : String,
    pub mobile       : String,
    pub resume       : Resume,
}
