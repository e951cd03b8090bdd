use crate::{id::*, time::*};

/// Number of stars given to a seller.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Average number of stars, `0.0` if not rated at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

/// Accumulates ratings on top of an already known average.
#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: f64,
    cnt: u32,
}

impl AvgRatingValueBuilder {
    /// Continue from an existing aggregate of `count` ratings.
    pub fn resume(avg: AvgRatingValue, count: u32) -> Self {
        Self {
            acc: f64::from(avg) * f64::from(count),
            cnt: count,
        }
    }

    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += f64::from(val);
        self.cnt += 1;
    }

    pub fn count(&self) -> u32 {
        self.cnt
    }

    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            AvgRatingValue::from(self.acc / f64::from(self.cnt)).clamp()
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerRating {
    pub id         : Id,
    pub seller_id  : Id,
    pub rater_id   : Option<Id>,
    pub created_at : Timestamp,
    pub value      : RatingValue,
    pub comment    : Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_value_bounds() {
        assert!(!RatingValue::from(0u8).is_valid());
        assert!(RatingValue::from(1u8).is_valid());
        assert!(RatingValue::from(5u8).is_valid());
        assert!(!RatingValue::from(6u8).is_valid());
        assert_eq!(RatingValue::max(), RatingValue::from(9u8).clamp());
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(AvgRatingValue::from(0.0), AvgRatingValueBuilder::default().build());
    }

    #[test]
    fn resume_existing_average() {
        let mut builder = AvgRatingValueBuilder::resume(4.0.into(), 3);
        builder += RatingValue::new(2u8);
        assert_eq!(4, builder.count());
        assert_eq!(AvgRatingValue::from(3.5), builder.build());
    }
}
