use crate::{email::EmailAddress, id::Id, time::Timestamp};

/// Where the employer can find the applicant's resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resume {
    /// Name of an attached document, the content itself is not kept.
    Attachment { file_name: String },
    Link(String),
}

impl Resume {
    pub const ACCEPTED_FILE_EXTENSIONS: [&'static str; 3] = ["pdf", "doc", "docx"];
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub id           : Id,
    pub listing_id   : Id,
    pub applicant_id : Option<Id>,
    pub created_at   : Timestamp,
    pub name         : String,
    pub email        : EmailAddress,
    pub mobile       : String,
    pub resume       : Resume,
}
