//! # vitalis-rbac
//!
//! Role-based access control for the Vitalis service.
//!
//! The vocabulary is closed: every grantable capability is an
//! `(Action, Resource)` pair from the [`registry`], roles are fixed sets
//! of those pairs computed once at first use, and the
//! [`PermissionChecker`] answers authorization queries for one principal.
//!
//! Authorization failures ([`RbacError`]) are distinct from
//! authentication failures: the principal is known, it just may not act.

pub mod checker;
pub mod error;
pub mod permission;
pub mod role;

pub use checker::PermissionChecker;
pub use error::RbacError;
pub use permission::{Action, Permission, Resource, registry};
pub use role::{Role, RoleFactory};
