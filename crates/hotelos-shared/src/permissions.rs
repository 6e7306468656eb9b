//! User roles and the per-feature permission set evaluated by the access
//! gate before any protected view or action.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// Per-feature visibility flags attached to a user profile.
///
/// `can_view_shared_data` predates the per-view flags and still gates the
/// groups/RM screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub can_manage_settings: bool,
    pub can_view_shared_data: bool,
    pub can_view_agenda: bool,
    pub can_view_messaging: bool,
    pub can_view_fnb: bool,
    pub can_view_housekeeping: bool,
    pub can_view_maintenance: bool,
    #[serde(rename = "canViewCRM")]
    pub can_view_crm: bool,
    pub can_view_reception: bool,
    pub can_view_spa: bool,
}

impl UserPermissions {
    /// Full access.
    pub fn all() -> Self {
        Self {
            can_manage_settings: true,
            can_view_shared_data: true,
            can_view_agenda: true,
            can_view_messaging: true,
            can_view_fnb: true,
            can_view_housekeeping: true,
            can_view_maintenance: true,
            can_view_crm: true,
            can_view_reception: true,
            can_view_spa: true,
        }
    }

    /// No access beyond the always-available screens.
    pub fn none() -> Self {
        Self {
            can_manage_settings: false,
            can_view_shared_data: false,
            can_view_agenda: false,
            can_view_messaging: false,
            can_view_fnb: false,
            can_view_housekeeping: false,
            can_view_maintenance: false,
            can_view_crm: false,
            can_view_reception: false,
            can_view_spa: false,
        }
    }

    /// Default permission set granted to a newly created profile of `role`.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin | Role::Manager => Self::all(),
            Role::Staff => Self {
                can_view_agenda: true,
                can_view_messaging: true,
                can_view_reception: true,
                ..Self::none()
            },
        }
    }
}

/// An authenticated user as seen by the client: identity, role, and the
/// permission set the access gate evaluates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub permissions: UserPermissions,
    /// Unix millis at account creation.
    pub created_at: i64,
}

impl UserProfile {
    pub fn is_manager_or_admin(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_presets() {
        assert!(UserPermissions::for_role(Role::Admin).can_manage_settings);
        let staff = UserPermissions::for_role(Role::Staff);
        assert!(staff.can_view_reception);
        assert!(!staff.can_view_crm);
        assert!(!staff.can_manage_settings);
    }

    #[test]
    fn test_wire_names() {
        let perms = serde_json::to_value(UserPermissions::all()).unwrap();
        assert_eq!(perms["canViewCRM"], true);
        assert_eq!(perms["canManageSettings"], true);
    }
}
