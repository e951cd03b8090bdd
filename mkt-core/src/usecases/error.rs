use crate::{
    repositories,
    util::validate::{
        ApplicationInvalidation, ListingInvalidation, ProfileInvalidation, RatingInvalidation,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without login")]
    Unauthorized,
    #[error("The category does not exist")]
    CategoryDoesNotExist,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The listing is not a job offer")]
    NotAJobListing,
    #[error("Invalid email address")]
    EmailAddress,
    #[error(transparent)]
    Listing(#[from] ListingInvalidation),
    #[error(transparent)]
    Rating(#[from] RatingInvalidation),
    #[error(transparent)]
    Application(#[from] ApplicationInvalidation),
    #[error(transparent)]
    Profile(#[from] ProfileInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<mkt_entities::email::EmailAddressParseError> for Error {
    fn from(_: mkt_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<crate::authorization::user::Error> for Error {
    fn from(_: crate::authorization::user::Error) -> Self {
        Self::Forbidden
    }
}
