//! Role-based access control for the inventory menu.
//!
//! Two fixed roles, six capability tokens, and a pure membership check.
//! Permission sets are resolved once at session start and never change
//! mid-session.

pub mod permissions;
pub mod role;

pub use permissions::{Capability, PermissionSet, authorize, permissions_for};
pub use role::Role;
