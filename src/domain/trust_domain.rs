//! # Trust Domains
//!
//! A [`Domain`] pairs the DNS suffix services are addressed under with the
//! identity domain embedded in SPIFFE URIs. The two are independent: a
//! Kubernetes deployment addresses services under
//! `<namespace>.svc.cluster.local` while its workloads are identified as
//! `spiffe://cluster.local/...`.
//!
//! Resolution is field by field, first non-empty value wins:
//!
//! ```text
//! identity: explicit.identity → explicit.suffix → canonical override → fallback.identity
//! suffix:   explicit.suffix   → fallback.suffix
//! ```
//!
//! The identity chain only runs when mutual TLS is enabled. Otherwise the
//! identity is always empty, so no caller can mistake an unauthenticated
//! deployment for one with a trust domain.

use serde::{Deserialize, Serialize};

use super::env::IdentityEnv;
use super::registry::RegistryKind;

/// Kubernetes cluster-local service suffix, without the namespace label.
pub const KUBERNETES_SERVICE_SUFFIX: &str = "svc.cluster.local";

/// Kubernetes default SPIFFE trust domain.
pub const KUBERNETES_IDENTITY_DOMAIN: &str = "cluster.local";

/// Consul service suffix. Consul has no default identity domain.
pub const CONSUL_SERVICE_SUFFIX: &str = "service.consul";

/// Resolved trust domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    /// DNS-like trust domain suffix, e.g. `default.svc.cluster.local`
    pub suffix: String,
    /// SPIFFE trust domain; empty when mutual TLS identity is not established
    pub identity: String,
}

impl Domain {
    pub fn new(suffix: impl Into<String>, identity: impl Into<String>) -> Self {
        Self { suffix: suffix.into(), identity: identity.into() }
    }

    /// Default trust domain for a registry kind.
    ///
    /// Registries without known defaults get an empty domain; this is not an
    /// error.
    pub fn registry_default(registry: &RegistryKind, env: &IdentityEnv) -> Self {
        match registry {
            RegistryKind::Kubernetes => Self::new(
                format!("{}.{}", env.namespace(), KUBERNETES_SERVICE_SUFFIX),
                KUBERNETES_IDENTITY_DOMAIN,
            ),
            RegistryKind::Consul => Self::new(CONSUL_SERVICE_SUFFIX, ""),
            RegistryKind::Mock | RegistryKind::Other(_) => Self::default(),
        }
    }

    /// Whether a SPIFFE identity domain has been established
    pub fn has_identity(&self) -> bool {
        !self.identity.is_empty()
    }
}

/// Merge an explicitly configured domain with registry defaults.
pub fn resolve(explicit: &Domain, fallback: &Domain, mutual_tls: bool, env: &IdentityEnv) -> Domain {
    let identity = if mutual_tls {
        [
            explicit.identity.as_str(),
            explicit.suffix.as_str(),
            env.canonical_domain(),
            fallback.identity.as_str(),
        ]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or("")
    } else {
        ""
    };

    Domain::new(or_default(&explicit.suffix, &fallback.suffix), identity)
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
