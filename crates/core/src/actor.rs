//! Caller identity and role context.
//!
//! Every ledger and workflow operation takes an explicit [`Actor`] instead
//! of relying on ambient session state. Authentication itself happens
//! outside the core; enforcement of "who may do what" happens here.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Role of the calling user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can submit, edit, and delete their own expense claims.
    Employee,
    /// Can additionally approve/reject claims and act on any record.
    Admin,
}

impl Role {
    /// Parse a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "employee" => Some(Self::Employee),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity and role of the caller performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The calling user's ID.
    pub user_id: UserId,
    /// The calling user's role.
    pub role: Role,
}

impl Actor {
    /// Creates an actor with the employee role.
    #[must_use]
    pub const fn employee(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Employee,
        }
    }

    /// Creates an actor with the admin role.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Admin,
        }
    }

    /// Returns true if the actor holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("manager"), None);
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Employee.as_str(), "employee");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_actor_is_admin() {
        let id = UserId::new();
        assert!(Actor::admin(id).is_admin());
        assert!(!Actor::employee(id).is_admin());
    }
}
