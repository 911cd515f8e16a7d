//! Control plane SAN determination.
//!
//! The control plane's own proxy must present, and its peers must require,
//! the SPIFFE identity of the control plane service account. Which trust
//! domain that identity lives in follows the same precedence as workload
//! resolution, specialized to the control plane:
//!
//! | auth policy | registry   | explicit domain | identity domain | SAN identity    |
//! |-------------|------------|-----------------|-----------------|-----------------|
//! | NONE        | any        | any             | any             | none            |
//! | MUTUAL_TLS  | Kubernetes | ""              | ""              | `cluster.local` |
//! | MUTUAL_TLS  | Kubernetes | `my.domain`     | ""              | `my.domain`     |
//! | MUTUAL_TLS  | any        | any             | `secured`       | `secured`       |
//! | MUTUAL_TLS  | Consul     | ""              | ""              | none            |
//! | MUTUAL_TLS  | Mock/other | ""              | ""              | none            |
//!
//! An explicit domain equal to the registry's own default service suffix
//! (e.g. `.svc.cluster.local`) is a DNS suffix, not an identity, and is
//! treated as if no explicit domain had been given.

use serde::{Deserialize, Serialize};

use super::spiffe::format_uri;
use crate::domain::trust_domain::{CONSUL_SERVICE_SUFFIX, KUBERNETES_SERVICE_SUFFIX};
use crate::domain::{resolve, AuthPolicy, Domain, IdentityEnv, RegistryKind};

/// Service account the control plane runs as.
pub const CONTROL_PLANE_SERVICE_ACCOUNT: &str = "istio-pilot-service-account";

/// Subject alternative names accepted for mutual TLS peers.
///
/// Order is preserved for output but carries no meaning; consumers check
/// membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanList(Vec<String>);

impl SanList {
    pub fn new(sans: Vec<String>) -> Self {
        Self(sans)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `san` is one of the accepted names
    pub fn contains(&self, san: &str) -> bool {
        self.0.iter().any(|candidate| candidate == san)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Identity the control plane advertises and validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPlaneIdentity {
    /// SANs to require from the control plane's peers; empty without mutual TLS
    pub sans: SanList,
    /// SPIFFE trust domain used for the SAN; empty when none was produced
    pub identity: String,
    /// Resolved service suffix, returned even when no SAN is produced
    pub domain: String,
}

/// Determine the control plane's SANs and default domain.
///
/// `namespace` is the namespace the control plane service account lives in.
///
/// An explicit domain that is only a registry service suffix does not name a
/// trust domain and is ignored for the SAN. For Kubernetes this covers
/// `svc.cluster.local`, `.svc.cluster.local` and any
/// `<namespace>.svc.cluster.local`, whichever namespace it names.
pub fn determine_san(
    explicit_domain: &str,
    identity_domain: &str,
    registry: &RegistryKind,
    auth_policy: AuthPolicy,
    namespace: &str,
    env: &IdentityEnv,
) -> ControlPlaneIdentity {
    let domain = default_domain(explicit_domain, registry, env);

    if !auth_policy.is_mutual_tls() {
        tracing::debug!(%registry, %domain, "Control plane auth policy is NONE, no SAN required");
        return ControlPlaneIdentity { domain, ..Default::default() };
    }

    let explicit = if is_registry_default_suffix(explicit_domain, registry) {
        ""
    } else {
        explicit_domain
    };
    let fallback = Domain::registry_default(registry, env);
    let identity = resolve(&Domain::new(explicit, identity_domain), &fallback, true, env).identity;

    if identity.is_empty() {
        tracing::warn!(
            %registry,
            %domain,
            "Mutual TLS requested but no identity domain could be resolved; control plane SAN is empty"
        );
        return ControlPlaneIdentity { domain, ..Default::default() };
    }

    let san = format_uri(&identity, namespace, CONTROL_PLANE_SERVICE_ACCOUNT);
    tracing::debug!(%registry, %domain, %san, "Control plane SAN determined");

    ControlPlaneIdentity { sans: SanList::new(vec![san]), identity, domain }
}

/// Default service suffix for the control plane: the explicit domain when
/// set, otherwise the registry default.
pub fn default_domain(explicit_domain: &str, registry: &RegistryKind, env: &IdentityEnv) -> String {
    if explicit_domain.is_empty() {
        Domain::registry_default(registry, env).suffix
    } else {
        explicit_domain.to_string()
    }
}

fn is_registry_default_suffix(explicit_domain: &str, registry: &RegistryKind) -> bool {
    match registry {
        RegistryKind::Kubernetes => {
            explicit_domain.trim_start_matches('.') == KUBERNETES_SERVICE_SUFFIX
                || explicit_domain.ends_with(&format!(".{}", KUBERNETES_SERVICE_SUFFIX))
        }
        RegistryKind::Consul => explicit_domain == CONSUL_SERVICE_SUFFIX,
        RegistryKind::Mock | RegistryKind::Other(_) => false,
    }
}
