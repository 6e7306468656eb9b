//! The access gate: permission evaluation for protected views and actions.
//!
//! Every protected command calls [`check`] before doing anything; denial is
//! not an exception but a boolean-plus-reason result surfaced to the user as
//! a blocking message.  The gate is a pure lookup, never panics, and unknown
//! capability names resolve to denied.

use thiserror::Error;

use hotelos_shared::permissions::UserProfile;

/// A named feature area or role-gated screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Agenda,
    Messaging,
    Fnb,
    Housekeeping,
    Maintenance,
    Crm,
    Reception,
    Spa,
    SharedData,
    SettingsManagement,
    /// Admin/manager only.
    Statistics,
    /// Admin/manager only.
    ClientDatabase,
}

impl Capability {
    /// Parse an external capability name.  Unknown names yield `None`, which
    /// the gate treats as denied.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "agenda" => Some(Self::Agenda),
            "messaging" => Some(Self::Messaging),
            "fnb" => Some(Self::Fnb),
            "housekeeping" => Some(Self::Housekeeping),
            "maintenance" => Some(Self::Maintenance),
            "crm" => Some(Self::Crm),
            "reception" => Some(Self::Reception),
            "spa" => Some(Self::Spa),
            "shared-data" => Some(Self::SharedData),
            "settings-management" => Some(Self::SettingsManagement),
            "statistics" => Some(Self::Statistics),
            "client-database" => Some(Self::ClientDatabase),
            _ => None,
        }
    }

    /// The user-facing denial reason for this capability.
    fn denial_reason(self) -> &'static str {
        match self {
            Self::Agenda => "Accès Agenda restreint.",
            Self::Messaging => "Accès Messagerie restreint.",
            Self::Fnb => "Accès F&B restreint.",
            Self::Housekeeping => "Accès Ménage restreint.",
            Self::Maintenance => "Accès Maintenance restreint.",
            Self::Crm => "Accès restreint au CRM.",
            Self::Reception => "Accès Réception restreint.",
            Self::Spa => "Accès Spa restreint.",
            Self::SharedData => "Accès restreint.",
            Self::SettingsManagement => "Accès restreint aux Administrateurs.",
            Self::Statistics | Self::ClientDatabase => {
                "Accès restreint aux Managers et Administrateurs."
            }
        }
    }
}

/// A denied access check, carrying the specific user-facing reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct AccessDenied {
    pub reason: String,
}

/// Whether `profile` holds `capability`.  Pure lookup, no side effects.
pub fn can(profile: &UserProfile, capability: Capability) -> bool {
    let p = &profile.permissions;
    match capability {
        Capability::Agenda => p.can_view_agenda,
        Capability::Messaging => p.can_view_messaging,
        Capability::Fnb => p.can_view_fnb,
        Capability::Housekeeping => p.can_view_housekeeping,
        Capability::Maintenance => p.can_view_maintenance,
        Capability::Crm => p.can_view_crm,
        Capability::Reception => p.can_view_reception,
        Capability::Spa => p.can_view_spa,
        Capability::SharedData => p.can_view_shared_data,
        Capability::SettingsManagement => p.can_manage_settings,
        Capability::Statistics | Capability::ClientDatabase => profile.is_manager_or_admin(),
    }
}

/// Gate an action: `Ok(())` to proceed, or the denial to surface.
pub fn check(profile: &UserProfile, capability: Capability) -> Result<(), AccessDenied> {
    if can(profile, capability) {
        Ok(())
    } else {
        Err(AccessDenied {
            reason: capability.denial_reason().to_string(),
        })
    }
}

/// Gate by external capability name; unknown names are denied.
pub fn check_name(profile: &UserProfile, name: &str) -> Result<(), AccessDenied> {
    match Capability::from_name(name) {
        Some(capability) => check(profile, capability),
        None => Err(AccessDenied {
            reason: format!("Accès restreint (fonction inconnue : {name})."),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelos_shared::permissions::{Role, UserPermissions};
    use hotelos_shared::types::UserId;

    fn profile(role: Role, permissions: UserPermissions) -> UserProfile {
        UserProfile {
            uid: UserId::from("U"),
            email: "u@hotel.example".to_string(),
            display_name: "U".to_string(),
            role,
            permissions,
            created_at: 0,
        }
    }

    #[test]
    fn test_maintenance_denial_has_specific_reason() {
        let staff = profile(Role::Staff, UserPermissions::for_role(Role::Staff));
        let denied = check(&staff, Capability::Maintenance).unwrap_err();
        assert_eq!(denied.reason, "Accès Maintenance restreint.");

        let admin = profile(Role::Admin, UserPermissions::all());
        assert!(check(&admin, Capability::Maintenance).is_ok());
    }

    #[test]
    fn test_role_gated_screens() {
        let manager = profile(Role::Manager, UserPermissions::for_role(Role::Manager));
        assert!(can(&manager, Capability::Statistics));

        // Even a staff profile with every flag set stays out of the
        // role-gated screens.
        let staff_all = profile(Role::Staff, UserPermissions::all());
        assert!(!can(&staff_all, Capability::ClientDatabase));
    }

    #[test]
    fn test_unknown_capability_name_is_denied() {
        let admin = profile(Role::Admin, UserPermissions::all());
        let denied = check_name(&admin, "telepathy").unwrap_err();
        assert!(denied.reason.contains("telepathy"));
        assert!(check_name(&admin, "spa").is_ok());
    }
}
