use super::prelude::*;

/// Editable parts of a user profile.
///
/// The email address cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub mobile: Option<String>,
    pub dob: Option<Date>,
}

pub fn update_profile<R>(repo: &R, session: &mut Session, update: ProfileUpdate) -> Result<User>
where
    R: UserRepo,
{
    let user_id = session
        .user()
        .map(|u| u.id.clone())
        .ok_or(Error::Unauthorized)?;
    let mut user = repo
        .try_get_user(user_id.as_str())?
        .ok_or(Error::UserDoesNotExist)?;
    let ProfileUpdate { name, mobile, dob } = update;
    user.name = name.trim().to_string();
    user.mobile = mobile.as_deref().and_then(crate::text::non_blank);
    user.dob = dob;
    user.validate()?;
    log::info!("Updating profile of user {}", user.id);
    repo.update_user(&user)?;
    session.replace_user(user.clone());
    Ok(user)
}
