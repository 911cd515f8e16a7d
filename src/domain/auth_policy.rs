//! Control plane authentication policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::IdentityError;

/// Mesh-wide authentication policy for control plane traffic.
///
/// Decoded once from its canonical string form (`NONE` / `MUTUAL_TLS`,
/// case-sensitive) when configuration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthPolicy {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "MUTUAL_TLS")]
    MutualTls,
}

impl AuthPolicy {
    /// Canonical string form of the policy
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuthPolicy::None => "NONE",
            AuthPolicy::MutualTls => "MUTUAL_TLS",
        }
    }

    pub const fn is_mutual_tls(&self) -> bool {
        matches!(self, AuthPolicy::MutualTls)
    }
}

impl fmt::Display for AuthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthPolicy {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(AuthPolicy::None),
            "MUTUAL_TLS" => Ok(AuthPolicy::MutualTls),
            other => Err(IdentityError::config(format!(
                "Unknown authentication policy '{}' (expected NONE or MUTUAL_TLS)",
                other
            ))),
        }
    }
}
