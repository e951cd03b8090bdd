use mkt_entities::{application::*, listing::*, rating::*, user::*};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MAX_RATING_COMMENT_LEN: usize = 500;

fn char_count(s: &str) -> usize {
    s.trim().chars().count()
}

/// Only absolute web links are accepted.
pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s.trim())
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

pub fn is_accepted_file_name(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .filter(|(stem, _)| !stem.is_empty())
        .map(|(_, ext)| {
            Resume::ACCEPTED_FILE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingInvalidation {
    #[error("The title must have at least 5 characters")]
    Title,
    #[error("The description must have at least 20 characters")]
    Description,
    #[error("The price must be greater than zero")]
    Price,
    #[error("Missing category")]
    Category,
}

impl Validate for Listing {
    type Error = ListingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if char_count(&self.title) < MIN_TITLE_LEN {
            return Err(Self::Error::Title);
        }
        if char_count(&self.description) < MIN_DESCRIPTION_LEN {
            return Err(Self::Error::Description);
        }
        if self.price == 0 {
            return Err(Self::Error::Price);
        }
        if self.category_id.as_str().trim().is_empty() {
            return Err(Self::Error::Category);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingInvalidation {
    #[error("Rating value out of range")]
    Value,
    #[error("The comment must not exceed 500 characters")]
    Comment,
}

impl Validate for SellerRating {
    type Error = RatingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.value.is_valid() {
            return Err(Self::Error::Value);
        }
        if self
            .comment
            .as_deref()
            .is_some_and(|c| c.chars().count() > MAX_RATING_COMMENT_LEN)
        {
            return Err(Self::Error::Comment);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Invalid email")]
    Email,
    #[error("Missing mobile number")]
    Mobile,
    #[error("Unsupported resume file type")]
    ResumeFile,
    #[error("Invalid resume link")]
    ResumeLink,
}

impl Validate for Resume {
    type Error = ApplicationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        match self {
            Self::Attachment { file_name } => {
                if !is_accepted_file_name(file_name) {
                    return Err(Self::Error::ResumeFile);
                }
            }
            Self::Link(link) => {
                if !is_valid_url(link) {
                    return Err(Self::Error::ResumeLink);
                }
            }
        }
        Ok(())
    }
}

impl Validate for JobApplication {
    type Error = ApplicationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(self.email.as_str()) {
            return Err(Self::Error::Email);
        }
        if self.mobile.trim().is_empty() {
            return Err(Self::Error::Mobile);
        }
        self.resume.validate()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileInvalidation {
    #[error("The name must not be empty")]
    Name,
}

impl Validate for User {
    type Error = ProfileInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkt_entities::{builders::*, email::EmailAddress, time::Timestamp};

    fn valid_listing() -> Listing {
        Listing::build()
            .title("Honda City")
            .description("Well maintained, single owner, 40000 km")
            .price(450_000)
            .category("cat-10")
            .finish()
    }

    #[test]
    fn listing_validation() {
        assert!(valid_listing().validate().is_ok());

        let mut listing = valid_listing();
        listing.title = " Car ".into();
        assert_eq!(Err(ListingInvalidation::Title), listing.validate());

        let mut listing = valid_listing();
        listing.description = "Too short".into();
        assert_eq!(Err(ListingInvalidation::Description), listing.validate());

        let mut listing = valid_listing();
        listing.price = 0;
        assert_eq!(Err(ListingInvalidation::Price), listing.validate());

        let mut listing = valid_listing();
        listing.category_id = "".into();
        assert_eq!(Err(ListingInvalidation::Category), listing.validate());
    }

    #[test]
    fn rating_validation() {
        let mut rating = SellerRating {
            id: "r".into(),
            seller_id: "s".into(),
            rater_id: None,
            created_at: Timestamp::now(),
            value: RatingValue::from(5u8),
            comment: Some("Great seller".into()),
        };
        assert!(rating.validate().is_ok());
        rating.value = RatingValue::from(0u8);
        assert_eq!(Err(RatingInvalidation::Value), rating.validate());
        rating.value = RatingValue::from(3u8);
        rating.comment = Some("x".repeat(MAX_RATING_COMMENT_LEN + 1));
        assert_eq!(Err(RatingInvalidation::Comment), rating.validate());
    }

    #[test]
    fn resume_file_names() {
        assert!(is_accepted_file_name("cv.pdf"));
        assert!(is_accepted_file_name("My CV.DOCX"));
        assert!(is_accepted_file_name("resume.doc"));
        assert!(!is_accepted_file_name("resume.png"));
        assert!(!is_accepted_file_name("pdf"));
        assert!(!is_accepted_file_name(".pdf"));
    }

    #[test]
    fn resume_links() {
        assert!(is_valid_url("https://example.com/cv"));
        assert!(is_valid_url(" http://example.com "));
        assert!(!is_valid_url("example.com/cv"));
        assert!(!is_valid_url("mailto:me@example.com"));
    }

    #[test]
    fn application_validation() {
        let mut application = JobApplication {
            id: "a".into(),
            listing_id: "l".into(),
            applicant_id: None,
            created_at: Timestamp::now(),
            name: "Priya".into(),
            email: EmailAddress::new_unchecked("priya@example.com".into()),
            mobile: "+91 98765 43210".into(),
            resume: Resume::Link("https://example.com/cv".into()),
        };
        assert!(application.validate().is_ok());
        application.email = EmailAddress::new_unchecked("priya".into());
        assert_eq!(Err(ApplicationInvalidation::Email), application.validate());
        application.email = EmailAddress::new_unchecked("priya@example.com".into());
        application.resume = Resume::Attachment {
            file_name: "cv.exe".into(),
        };
        assert_eq!(
            Err(ApplicationInvalidation::ResumeFile),
            application.validate()
        );
    }

    #[test]
    fn profile_validation() {
        assert!(User::build().name("Priya").finish().validate().is_ok());
        assert_eq!(
            Err(ProfileInvalidation::Name),
            User::build().name("  ").finish().validate()
        );
    }
}
