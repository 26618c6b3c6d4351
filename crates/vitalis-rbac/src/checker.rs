//! Authorization queries for one principal.

use crate::error::RbacError;
use crate::permission::{Action, Permission, Resource};
use crate::role::{Role, RoleFactory};
use vitalis_core::{Principal, RoleKind};

/// Stateless evaluator binding a principal's role to the role table.
///
/// Holds nothing but the principal and its resolved role; constructed per
/// authorization decision and dropped.
pub struct PermissionChecker<'a> {
    principal: &'a Principal,
    role: Role,
}

impl<'a> PermissionChecker<'a> {
    pub fn new(principal: &'a Principal) -> Self {
        Self {
            principal,
            role: RoleFactory::role_for(principal.role),
        }
    }

    /// Whether the principal's role grants the permission.
    pub fn has(&self, permission: Permission) -> bool {
        self.role.has(permission)
    }

    /// Whether the role grants the action on the resource kind.
    pub fn has_action_on(&self, action: Action, resource: Resource) -> bool {
        self.has(Permission::new(action, resource))
    }

    /// Require the permission, or fail with an authorization error.
    pub fn require(&self, permission: Permission) -> Result<(), RbacError> {
        if self.has(permission) {
            Ok(())
        } else {
            Err(RbacError::PermissionDenied { permission })
        }
    }

    pub fn is_admin(&self) -> bool {
        self.principal.role == RoleKind::Admin
    }

    /// The sole ownership rule: admins may access any resource instance,
    /// everyone else only their own.
    pub fn can_access(&self, owner_id: i64, _resource: Resource) -> bool {
        if self.is_admin() {
            return true;
        }
        self.principal.id == owner_id
    }

    /// Require ownership (or admin), or fail with an authorization error.
    pub fn require_ownership(&self, owner_id: i64, resource: Resource) -> Result<(), RbacError> {
        if self.can_access(owner_id, resource) {
            Ok(())
        } else {
            Err(RbacError::OwnershipDenied { resource })
        }
    }
}
