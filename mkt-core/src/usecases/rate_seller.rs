use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone)]
pub struct NewSellerRating {
    pub seller_id: String,
    pub value: RatingValue,
    pub comment: Option<String>,
}

/// Stores the rating and returns the seller with the
/// updated aggregate rating.
pub fn rate_seller<D: Db>(
    db: &D,
    rater: Option<&User>,
    rate: NewSellerRating,
    now: Timestamp,
) -> Result<User> {
    let NewSellerRating {
        seller_id,
        value,
        comment,
    } = rate;
    let mut seller = db
        .try_get_user(&seller_id)?
        .ok_or(Error::UserDoesNotExist)?;
    let rating = SellerRating {
        id: Id::new(),
        seller_id: seller.id.clone(),
        rater_id: rater.map(|u| u.id.clone()),
        created_at: now,
        value,
        comment: comment.as_deref().and_then(crate::text::non_blank),
    };
    rating.validate()?;
    let (average_rating, reviews) = seller.avg_rating_with(std::slice::from_ref(&rating));
    log::info!(
        "Rating seller {} with {} stars",
        seller.id,
        u8::from(rating.value)
    );
    db.create_seller_rating(rating)?;
    seller.average_rating = average_rating;
    seller.reviews = reviews;
    db.update_user(&seller)?;
    Ok(seller)
}
