//! Authorization error types.

use crate::permission::{Permission, Resource};
use thiserror::Error;

/// A principal was authenticated but may not act.
///
/// Deliberately disjoint from authentication failures: callers map this
/// to a 403-class rejection, never a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RbacError {
    /// The principal's role does not grant the permission.
    #[error("permission denied: {permission}")]
    PermissionDenied { permission: Permission },

    /// The principal does not own the resource instance.
    #[error("not permitted to access this {}", resource.as_str())]
    OwnershipDenied { resource: Resource },
}
