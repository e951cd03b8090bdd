use mkt_entities::{rating::*, user::*};

pub trait Rated {
    /// The aggregated rating after adding new ratings
    /// to the already known aggregate.
    fn avg_rating_with(&self, _: &[SellerRating]) -> (AvgRatingValue, u32);
}

impl Rated for User {
    fn avg_rating_with(&self, ratings: &[SellerRating]) -> (AvgRatingValue, u32) {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.seller_id == self.id).count()
        );
        let builder = ratings.iter().fold(
            AvgRatingValueBuilder::resume(self.average_rating, self.reviews),
            |mut acc, r| {
                acc.add(r.value);
                acc
            },
        );
        let count = builder.count();
        (builder.build(), count)
    }
}
