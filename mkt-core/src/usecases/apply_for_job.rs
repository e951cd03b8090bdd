use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub listing_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub resume: Resume,
}

pub fn apply_for_job<D: Db>(
    db: &D,
    applicant: Option<&User>,
    application: NewJobApplication,
    now: Timestamp,
) -> Result<JobApplication> {
    let NewJobApplication {
        listing_id,
        name,
        email,
        mobile,
        resume,
    } = application;
    let listing = db.get_listing(&listing_id)?;
    let is_job = db
        .get_category(listing.category_id.as_str())
        .map(|c| c.is_jobs())
        .or_else(|err| match err {
            RepoError::NotFound => Ok(false),
            err => Err(err),
        })?;
    if !is_job {
        return Err(Error::NotAJobListing);
    }
    let email = email.trim();
    if !crate::util::validate::is_valid_email(email) {
        return Err(Error::EmailAddress);
    }
    let application = JobApplication {
        id: Id::new(),
        listing_id: listing.id,
        applicant_id: applicant.map(|u| u.id.clone()),
        created_at: now,
        name: name.trim().to_string(),
        email: email.parse::<EmailAddress>()?,
        mobile: mobile.trim().to_string(),
        resume,
    };
    application.validate()?;
    log::info!(
        "New application for job listing {}",
        application.listing_id
    );
    db.create_job_application(application.clone())?;
    Ok(application)
}
