use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Moderation state of a listing.
///
/// Every listing starts as [`ReviewStatus::Pending`] and is either
/// approved or rejected afterwards.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

pub type ReviewStatusParseError = strum::ParseError;

impl ReviewStatus {
    /// Position in the moderation queue, lower values first.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Approved)
    }
}
