use serde::{Deserialize, Serialize};

/// Session role.
///
/// Roles come in as free-form text at session start; [`Role::parse`] is the
/// single place that text is interpreted, so no call site compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Normalize free-form role input. Any spelling of "admin" (case
    /// aside) is Admin; everything else falls back to Staff.
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Staff
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
