use shared::models::{AuthenticatedUser, Role};
use yewdux::Store;

/// Client-side view of the session. `user` is populated by the current-user
/// fetch; the session cookie itself stays invisible to the app.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<AuthenticatedUser>,
}

impl AppState {
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Role::Administrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn is_admin_requires_the_administrator_role() {
        let mut state = AppState::default();
        assert!(!state.is_admin());

        state.user = Some(AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "staff".into(),
            role: Role::Staff,
        });
        assert!(!state.is_admin());

        state.user = Some(AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "admin".into(),
            role: Role::Administrator,
        });
        assert!(state.is_admin());
    }
}
