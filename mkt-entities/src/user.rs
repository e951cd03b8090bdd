use strum::{AsRefStr, Display, EnumString};

use crate::{email::EmailAddress, id::Id, rating::AvgRatingValue, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id             : Id,
    pub name           : String,
    pub email          : EmailAddress,
    pub avatar_url     : Option<String>,
    pub average_rating : AvgRatingValue,
    pub reviews        : u32,
    pub role           : Role,
    pub mobile         : Option<String>,
    pub dob            : Option<Date>,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    User,
    Admin,
}

pub type RoleParseError = strum::ParseError;
