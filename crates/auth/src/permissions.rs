use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use ovenstock_core::{InventoryError, InventoryResult};

use crate::role::Role;

/// Capability token gating a single menu action.
///
/// `Edit` is granted to Admin but currently drives no menu action; it stays
/// in the set because the granted permission list is user-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    View,
    Edit,
    Add,
    Update,
    Search,
    CheckExpiry,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::View => "view",
            Capability::Edit => "edit",
            Capability::Add => "add",
            Capability::Update => "update",
            Capability::Search => "search",
            Capability::CheckExpiry => "check_expiry",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed capability set a session holds for its lifetime.
pub type PermissionSet = BTreeSet<Capability>;

/// Resolve the fixed permission set for a role.
pub fn permissions_for(role: Role) -> PermissionSet {
    use Capability::*;
    match role {
        Role::Admin => BTreeSet::from([View, Edit, Add, Update, Search, CheckExpiry]),
        Role::Staff => BTreeSet::from([View, Update, Search]),
    }
}

/// Check a capability against a session's permission set.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Denial must surface to the user as a visible refusal, never a silent skip.
pub fn authorize(permissions: &PermissionSet, capability: Capability) -> InventoryResult<()> {
    if permissions.contains(&capability) {
        Ok(())
    } else {
        Err(InventoryError::PermissionDenied(
            capability.as_str().to_string(),
        ))
    }
}
