use super::*;
use mkt_entities as e;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

#[derive(Debug, Error)]
#[error("Invalid date or time: {0}")]
pub struct TimestampParseError(String);

/// Accepts RFC 3339 date times as well as plain dates
/// that are interpreted as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<e::time::Timestamp, TimestampParseError> {
    let s = s.trim();
    if let Ok(date_time) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(date_time.into());
    }
    parse_date(s).map(Into::into)
}

/// Only accepts `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, TimestampParseError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| TimestampParseError(s.to_string()))
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<Category> for e::category::Category {
    fn from(from: Category) -> Self {
        let Category { id, name } = from;
        Self::new(id, name)
    }
}

impl From<e::review::ReviewStatus> for ReviewStatus {
    fn from(from: e::review::ReviewStatus) -> Self {
        use e::review::ReviewStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<ReviewStatus> for e::review::ReviewStatus {
    fn from(from: ReviewStatus) -> Self {
        use ReviewStatus as B;
        match from {
            B::Pending => Self::Pending,
            B::Approved => Self::Approved,
            B::Rejected => Self::Rejected,
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        match from {
            e::user::Role::User => Self::User,
            e::user::Role::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::listing::SalaryPeriod> for SalaryPeriod {
    fn from(from: e::listing::SalaryPeriod) -> Self {
        match from {
            e::listing::SalaryPeriod::Year => Self::Year,
            e::listing::SalaryPeriod::Month => Self::Month,
            e::listing::SalaryPeriod::Hour => Self::Hour,
        }
    }
}

impl From<SalaryPeriod> for e::listing::SalaryPeriod {
    fn from(from: SalaryPeriod) -> Self {
        match from {
            SalaryPeriod::Year => Self::Year,
            SalaryPeriod::Month => Self::Month,
            SalaryPeriod::Hour => Self::Hour,
        }
    }
}

impl From<e::listing::Listing> for Listing {
    fn from(from: e::listing::Listing) -> Self {
        let e::listing::Listing {
            id,
            title,
            description,
            price,
            category_id,
            seller_id,
            image_url,
            image_hint,
            salary_period,
            created_at,
            status,
            rejection_reason,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            price,
            category_id: category_id.into(),
            seller_id: seller_id.into(),
            image_url,
            image_hint,
            salary_period: salary_period.map(Into::into),
            created_at: created_at.map(|t| t.to_string()),
            status: status.into(),
            rejection_reason,
            auto_rejected: None,
        }
    }
}

/// Malformed creation times are dropped, i.e. the
/// listing is treated as if it had none.
impl From<Listing> for e::listing::Listing {
    fn from(from: Listing) -> Self {
        let Listing {
            id,
            title,
            description,
            price,
            category_id,
            seller_id,
            image_url,
            image_hint,
            salary_period,
            created_at,
            status,
            rejection_reason,
            auto_rejected: _,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            price,
            category_id: category_id.into(),
            seller_id: seller_id.into(),
            image_url,
            image_hint,
            salary_period: salary_period.map(Into::into),
            created_at: created_at
                .as_deref()
                .and_then(|s| parse_timestamp(s).ok()),
            status: status.into(),
            rejection_reason,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            avatar_url,
            average_rating,
            reviews,
            role,
            mobile,
            dob,
        } = from;
        Self {
            id: id.into(),
            name,
            avatar_url,
            average_rating: average_rating.into(),
            reviews,
            email: email.into_string(),
            role: Some(role.into()),
            mobile,
            dob: dob.map(format_date),
        }
    }
}

/// Users without a role are regular users.
impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            avatar_url,
            average_rating,
            reviews,
            email,
            role,
            mobile,
            dob,
        } = from;
        Self {
            id: id.into(),
            name,
            email: e::email::EmailAddress::new_unchecked(email),
            avatar_url,
            average_rating: e::rating::AvgRatingValue::from(average_rating).clamp(),
            reviews,
            role: role.map(Into::into).unwrap_or_default(),
            mobile,
            dob: dob.as_deref().and_then(|s| parse_date(s).ok()),
        }
    }
}

impl From<e::application::Resume> for Resume {
    fn from(from: e::application::Resume) -> Self {
        match from {
            e::application::Resume::Attachment { file_name } => Self::Attachment(file_name),
            e::application::Resume::Link(link) => Self::Link(link),
        }
    }
}

impl From<Resume> for e::application::Resume {
    fn from(from: Resume) -> Self {
        match from {
            Resume::Attachment(file_name) => Self::Attachment { file_name },
            Resume::Link(link) => Self::Link(link),
        }
    }
}

impl From<e::application::JobApplication> for JobApplication {
    fn from(from: e::application::JobApplication) -> Self {
        let e::application::JobApplication {
            id,
            listing_id,
            applicant_id,
            created_at,
            name,
            email,
            mobile,
            resume,
        } = from;
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            applicant_id: applicant_id.map(Into::into),
            created_at: created_at.to_string(),
            name,
            email: email.into_string(),
            mobile,
            resume: resume.into(),
        }
    }
}
