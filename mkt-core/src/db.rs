use crate::repositories::*;

/// All repositories that are needed by the use cases.
pub trait Db:
    ListingRepo + UserRepo + CategoryRepo + SellerRatingRepo + JobApplicationRepo
{
}

impl<T> Db for T where
    T: ListingRepo + UserRepo + CategoryRepo + SellerRatingRepo + JobApplicationRepo
{
}
