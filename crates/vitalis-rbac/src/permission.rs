//! The permission vocabulary: actions, resources, and their pairing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every verb the system recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,

    Upload,
    Download,
    Analyze,
    Export,

    // Admin actions
    ManageUsers,
    ViewAll,
    ManageSystem,
}

/// Every noun the system recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    User,
    BiomarkerUpload,
    BiomarkerData,
    AnalysisResult,
    System,
    AdminPanel,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Upload => "upload",
            Action::Download => "download",
            Action::Analyze => "analyze",
            Action::Export => "export",
            Action::ManageUsers => "manage_users",
            Action::ViewAll => "view_all",
            Action::ManageSystem => "manage_system",
        }
    }
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::BiomarkerUpload => "biomarker_upload",
            Resource::BiomarkerData => "biomarker_data",
            Resource::AnalysisResult => "analysis_result",
            Resource::System => "system",
            Resource::AdminPanel => "admin_panel",
        }
    }
}

/// One grantable capability: an action on a resource kind.
///
/// Immutable, hashable, equal iff both components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub action: Action,
    pub resource: Resource,
}

impl Permission {
    pub const fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action.as_str(), self.resource.as_str())
    }
}

/// The closed table of named permissions.
///
/// Role sets are built from these constants by union; nothing else in the
/// codebase constructs ad-hoc permissions.
pub mod registry {
    use super::{Action, Permission, Resource};

    // Own profile
    pub const USER_READ_OWN_PROFILE: Permission = Permission::new(Action::Read, Resource::User);
    pub const USER_UPDATE_OWN_PROFILE: Permission = Permission::new(Action::Update, Resource::User);

    // Own uploads
    pub const USER_UPLOAD_BIOMARKER: Permission =
        Permission::new(Action::Upload, Resource::BiomarkerUpload);
    pub const USER_READ_OWN_UPLOADS: Permission =
        Permission::new(Action::Read, Resource::BiomarkerUpload);
    pub const USER_DELETE_OWN_UPLOADS: Permission =
        Permission::new(Action::Delete, Resource::BiomarkerUpload);

    // Own data
    pub const USER_READ_OWN_DATA: Permission =
        Permission::new(Action::Read, Resource::BiomarkerData);
    pub const USER_EXPORT_OWN_DATA: Permission =
        Permission::new(Action::Export, Resource::BiomarkerData);

    // Own results
    pub const USER_READ_OWN_RESULTS: Permission =
        Permission::new(Action::Read, Resource::AnalysisResult);
    pub const USER_ANALYZE_OWN_DATA: Permission =
        Permission::new(Action::Analyze, Resource::AnalysisResult);
    pub const USER_EXPORT_OWN_RESULTS: Permission =
        Permission::new(Action::Export, Resource::AnalysisResult);

    // User management
    pub const ADMIN_MANAGE_USERS: Permission =
        Permission::new(Action::ManageUsers, Resource::User);
    pub const ADMIN_VIEW_ALL_USERS: Permission = Permission::new(Action::ViewAll, Resource::User);
    pub const ADMIN_DELETE_USERS: Permission = Permission::new(Action::Delete, Resource::User);

    // Upload management
    pub const ADMIN_VIEW_ALL_UPLOADS: Permission =
        Permission::new(Action::ViewAll, Resource::BiomarkerUpload);
    pub const ADMIN_DELETE_ANY_UPLOAD: Permission =
        Permission::new(Action::Delete, Resource::BiomarkerUpload);

    // Data management
    pub const ADMIN_VIEW_ALL_DATA: Permission =
        Permission::new(Action::ViewAll, Resource::BiomarkerData);
    pub const ADMIN_VIEW_ALL_RESULTS: Permission =
        Permission::new(Action::ViewAll, Resource::AnalysisResult);

    // System management
    pub const ADMIN_MANAGE_SYSTEM: Permission =
        Permission::new(Action::ManageSystem, Resource::System);
    pub const ADMIN_ACCESS_PANEL: Permission = Permission::new(Action::Read, Resource::AdminPanel);
}
