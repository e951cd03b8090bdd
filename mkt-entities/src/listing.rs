use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, review::*, time::*};

/// A classified ad as it is stored.
///
/// The `status` is the moderation state that has been recorded
/// explicitly. The status that is effectively displayed may differ,
/// e.g. if a listing stayed pending for too long.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id               : Id,
    pub title            : String,
    pub description      : String,
    pub price            : u64,
    pub category_id      : Id,
    pub seller_id        : Id,
    pub image_url        : Option<String>,
    pub image_hint       : Option<String>,
    pub salary_period    : Option<SalaryPeriod>,
    pub created_at       : Option<Timestamp>,
    pub status           : ReviewStatus,
    /// Only meaningful if `status` is [`ReviewStatus::Rejected`].
    pub rejection_reason : Option<String>,
}

impl Listing {
    pub fn is_pending(&self) -> bool {
        self.status == ReviewStatus::Pending
    }
}

/// Time unit of a salary in a job listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SalaryPeriod {
    Year,
    Month,
    Hour,
}
