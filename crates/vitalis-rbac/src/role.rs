//! Role definitions.
//!
//! The permission set behind each role kind is computed once, at first
//! use, from the registry constants. The admin set is the union of the
//! user set and the admin-only permissions, so Admin ⊇ User holds by
//! construction rather than by runtime check.

use crate::permission::{Permission, registry};
use std::collections::HashSet;
use std::sync::LazyLock;
use vitalis_core::RoleKind;

static USER_PERMISSIONS: LazyLock<HashSet<Permission>> = LazyLock::new(|| {
    HashSet::from([
        // Own profile
        registry::USER_READ_OWN_PROFILE,
        registry::USER_UPDATE_OWN_PROFILE,
        // Own uploads
        registry::USER_UPLOAD_BIOMARKER,
        registry::USER_READ_OWN_UPLOADS,
        registry::USER_DELETE_OWN_UPLOADS,
        // Own data
        registry::USER_READ_OWN_DATA,
        registry::USER_EXPORT_OWN_DATA,
        // Own results
        registry::USER_READ_OWN_RESULTS,
        registry::USER_ANALYZE_OWN_DATA,
        registry::USER_EXPORT_OWN_RESULTS,
    ])
});

static ADMIN_ONLY_PERMISSIONS: [Permission; 9] = [
    // User management
    registry::ADMIN_MANAGE_USERS,
    registry::ADMIN_VIEW_ALL_USERS,
    registry::ADMIN_DELETE_USERS,
    // Upload management
    registry::ADMIN_VIEW_ALL_UPLOADS,
    registry::ADMIN_DELETE_ANY_UPLOAD,
    // Data management
    registry::ADMIN_VIEW_ALL_DATA,
    registry::ADMIN_VIEW_ALL_RESULTS,
    // System management
    registry::ADMIN_MANAGE_SYSTEM,
    registry::ADMIN_ACCESS_PANEL,
];

static ADMIN_PERMISSIONS: LazyLock<HashSet<Permission>> = LazyLock::new(|| {
    let mut set = USER_PERMISSIONS.clone();
    set.extend(ADMIN_ONLY_PERMISSIONS);
    set
});

/// A named, fixed set of permissions.
#[derive(Debug, Clone, Copy)]
pub struct Role {
    kind: RoleKind,
    permissions: &'static HashSet<Permission>,
}

impl Role {
    /// Whether this role grants the permission.
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn permissions(&self) -> &'static HashSet<Permission> {
        self.permissions
    }
}

/// Maps a role kind to its role definition.
///
/// The table is total over [`RoleKind`]; registering a new role means
/// adding a variant and a match arm, checked at compile time.
pub struct RoleFactory;

impl RoleFactory {
    pub fn role_for(kind: RoleKind) -> Role {
        match kind {
            RoleKind::User => Role {
                kind,
                permissions: &USER_PERMISSIONS,
            },
            RoleKind::Admin => Role {
                kind,
                permissions: &ADMIN_PERMISSIONS,
            },
        }
    }
}
