use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Coarse permission tier attached to a user account.
///
/// The closed set is deliberate: route gating compares roles by strict
/// equality, with no hierarchy and no wildcard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Staff,
}

impl Role {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Staff => "staff",
        }
    }

    /// Whether this role satisfies a route's declared requirement.
    ///
    /// `None` means the route accepts any authenticated user. With a
    /// requirement present the check is strict equality.
    #[must_use]
    pub fn satisfies(self, required: Option<Role>) -> bool {
        required.is_none_or(|role| role == self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "administrator" => Ok(Self::Administrator),
            "staff" => Ok(Self::Staff),
            _ => Err("unknown role"),
        }
    }
}

/// The signed-in user as reported by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct AuthenticatedUser {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's login name.
    pub username: String,

    /// The user's permission tier.
    pub role: Role,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LoginRequest {
    /// The user's login name.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: AuthenticatedUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("administrator", Role::Administrator),
            ("staff", Role::Staff),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(text.parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), text);
        }
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn satisfies_is_strict_equality() {
        assert!(Role::Staff.satisfies(None));
        assert!(Role::Administrator.satisfies(None));
        assert!(Role::Administrator.satisfies(Some(Role::Administrator)));
        assert!(Role::Staff.satisfies(Some(Role::Staff)));

        // No hierarchy: administrator does not imply staff or vice versa.
        assert!(!Role::Administrator.satisfies(Some(Role::Staff)));
        assert!(!Role::Staff.satisfies(Some(Role::Administrator)));
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::Administrator).unwrap();
        assert_eq!(json, "\"administrator\"");
    }

    #[test]
    fn authenticated_user_roundtrip() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            role: Role::Administrator,
        };
        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: AuthenticatedUser = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
    }
}
