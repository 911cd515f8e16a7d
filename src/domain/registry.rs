//! Service registry kinds.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Service discovery backend the control plane is running against.
///
/// The kind only selects default trust domains. Unrecognized registries are
/// kept as [`RegistryKind::Other`] and resolve to empty defaults rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegistryKind {
    #[default]
    Kubernetes,
    Consul,
    Mock,
    Other(String),
}

impl RegistryKind {
    pub fn as_str(&self) -> &str {
        match self {
            RegistryKind::Kubernetes => "Kubernetes",
            RegistryKind::Consul => "Consul",
            RegistryKind::Mock => "Mock",
            RegistryKind::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "kubernetes" => RegistryKind::Kubernetes,
            "consul" => RegistryKind::Consul,
            "mock" => RegistryKind::Mock,
            _ => RegistryKind::Other(s.trim().to_string()),
        };
        Ok(kind)
    }
}

impl From<String> for RegistryKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<RegistryKind> for String {
    fn from(kind: RegistryKind) -> Self {
        kind.as_str().to_string()
    }
}
