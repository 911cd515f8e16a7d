//! Environment inputs to trust domain resolution.

use serde::{Deserialize, Serialize};

/// Namespace the process runs in, provided by the Kubernetes downward API.
pub const POD_NAMESPACE_ENV: &str = "POD_NAMESPACE";

/// Canonical service account domain override, consulted by the resolver only
/// when no explicit domain was configured.
pub const CANONICAL_DOMAIN_ENV: &str = "MESHID_SA_DOMAIN_CANONICAL";

/// Namespace assumed when `POD_NAMESPACE` is unset or empty.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Snapshot of the environment values that feed trust domain resolution.
///
/// Captured once at startup so resolution stays a pure function of its
/// inputs and tests never have to mutate process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityEnv {
    pub pod_namespace: Option<String>,
    pub canonical_domain: Option<String>,
}

impl IdentityEnv {
    /// Read the identity inputs from process environment variables.
    pub fn from_env() -> Self {
        Self {
            pod_namespace: non_empty_var(POD_NAMESPACE_ENV),
            canonical_domain: non_empty_var(CANONICAL_DOMAIN_ENV),
        }
    }

    pub fn with_pod_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.pod_namespace = Some(namespace.into()).filter(|ns| !ns.is_empty());
        self
    }

    pub fn with_canonical_domain(mut self, domain: impl Into<String>) -> Self {
        self.canonical_domain = Some(domain.into()).filter(|d| !d.is_empty());
        self
    }

    /// Pod namespace, or `"default"` when none was provided
    pub fn namespace(&self) -> &str {
        self.pod_namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Canonical identity override, or `""` when none was provided
    pub fn canonical_domain(&self) -> &str {
        self.canonical_domain.as_deref().unwrap_or("")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
