use mkt_entities::user::User;

use super::user::can_moderate;

/// The user on whose behalf use cases are executed.
///
/// A session is passed explicitly into every use case that
/// depends on the current user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    pub const fn logged_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Anonymous sessions can never moderate.
    pub fn can_moderate(&self) -> bool {
        self.user().is_some_and(can_moderate)
    }

    /// Replaces the user after the profile has been modified.
    pub fn replace_user(&mut self, user: User) -> Option<User> {
        self.user.replace(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkt_entities::{builders::*, user::Role};

    #[test]
    fn anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_logged_in());
        assert!(!session.can_moderate());
    }

    #[test]
    fn admin_session() {
        let admin = User::build().id("u1").role(Role::Admin).finish();
        let mut session = Session::logged_in(admin);
        assert!(session.can_moderate());
        let user = User::build().id("u1").role(Role::User).finish();
        assert!(session.replace_user(user).is_some());
        assert!(!session.can_moderate());
        assert!(session.is_logged_in());
    }
}
