//! Resolved identity state.
//!
//! One [`IdentityState`] is constructed at bootstrap and shared through an
//! `Arc` with every component that generates identities. The stored
//! [`Domain`] is replaced as a whole, so readers always see either the old or
//! the new value, never a mix of fields.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{resolve, Domain, IdentityEnv};

#[derive(Debug, Default)]
pub struct IdentityState {
    env: IdentityEnv,
    current: RwLock<Arc<Domain>>,
}

impl IdentityState {
    /// Create an unset state; until [`set_domain`](Self::set_domain) runs the
    /// domain is empty and identity generation is a no-op.
    pub fn new(env: IdentityEnv) -> Self {
        Self { env, current: RwLock::new(Arc::new(Domain::default())) }
    }

    /// Create a state whose identity domain is fixed to `identity`.
    pub fn with_identity_domain(identity: impl Into<String>) -> Self {
        Self {
            env: IdentityEnv::default(),
            current: RwLock::new(Arc::new(Domain::new("", identity))),
        }
    }

    /// Resolve `domain` against `fallback`, store the result, and return it.
    ///
    /// Calling this again replaces the stored domain. Ordinary operation sets
    /// it once during bootstrap.
    pub fn set_domain(&self, domain: &Domain, fallback: &Domain, mutual_tls: bool) -> Domain {
        let resolved = resolve(domain, fallback, mutual_tls, &self.env);

        // The guarded value is always a complete Arc, so a poisoned lock
        // still holds a consistent domain.
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(resolved.clone());
        drop(current);

        tracing::info!(
            suffix = %resolved.suffix,
            identity = %resolved.identity,
            mutual_tls,
            "Trust domain resolved"
        );

        resolved
    }

    /// Snapshot of the current domain.
    pub fn domain(&self) -> Arc<Domain> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Current SPIFFE identity domain, empty when mutual TLS is off.
    pub fn identity(&self) -> String {
        self.domain().identity.clone()
    }

    pub fn env(&self) -> &IdentityEnv {
        &self.env
    }
}
