//! # meshid
//!
//! Trust domain resolution and SPIFFE identity generation for a service mesh
//! control plane and its proxies.
//!
//! ## Architecture
//!
//! ```text
//! IdentityConfig ──► resolve ──► IdentityState ──► generate_uri (per workload)
//!        │
//!        └──────────► determine_san ──► ControlPlaneIdentity (once, at startup)
//! ```
//!
//! ## Core Components
//!
//! - **Domain Defaults**: per-registry default trust domains ([`Domain::registry_default`])
//! - **Trust Domain Resolver**: precedence rules merging explicit config,
//!   environment overrides and defaults ([`domain::resolve`])
//! - **Identity State**: the resolved domain, shared by injection ([`IdentityState`])
//! - **SPIFFE URI Generator**: `spiffe://<domain>/ns/<ns>/sa/<sa>` ([`identity::generate_uri`])
//! - **Control Plane SAN Determiner**: SANs the control plane requires ([`identity::determine_san`])
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meshid::{IdentityBootstrap, IdentityConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = IdentityConfig::from_env()?;
//!     meshid::observability::init_logging(&config.logging)?;
//!
//!     let bootstrap = IdentityBootstrap::new(config);
//!     let uri = meshid::identity::generate_uri(bootstrap.state(), "default", "bookinfo")?;
//!     println!("{uri}");
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod errors;
pub mod identity;
pub mod observability;

pub use config::{IdentityConfig, LoggingConfig};
pub use domain::{AuthPolicy, Domain, IdentityEnv, RegistryKind};
pub use errors::{IdentityError, Result};
pub use identity::{ControlPlaneIdentity, IdentityState, SanList, SpiffeUri};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Identity resolved once at control plane startup.
///
/// Holds the shared [`IdentityState`] that workload-facing components clone
/// and the control plane's own SAN determination.
#[derive(Debug)]
pub struct IdentityBootstrap {
    config: IdentityConfig,
    state: Arc<IdentityState>,
    workload_domain: Domain,
    control_plane: ControlPlaneIdentity,
}

impl IdentityBootstrap {
    /// Resolve identities from an already validated configuration
    pub fn new(config: IdentityConfig) -> Self {
        let state = Arc::new(IdentityState::new(config.env.clone()));

        let explicit = Domain::new(config.domain.clone(), config.identity_domain.clone());
        let fallback = Domain::registry_default(&config.registry, &config.env);
        let mutual_tls = config.control_plane_auth_policy.is_mutual_tls();
        let workload_domain = state.set_domain(&explicit, &fallback, mutual_tls);

        let control_plane = identity::determine_san(
            &config.domain,
            &config.identity_domain,
            &config.registry,
            config.control_plane_auth_policy,
            config.env.namespace(),
            &config.env,
        );

        observability::log_identity_info(&config, &workload_domain, &control_plane);

        Self { config, state, workload_domain, control_plane }
    }

    /// Load and validate configuration from the environment, then resolve
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(IdentityConfig::from_env()?))
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Shared identity state for components that generate workload identities
    pub fn state(&self) -> &Arc<IdentityState> {
        &self.state
    }

    /// Domain resolved for workloads at bootstrap
    pub fn workload_domain(&self) -> &Domain {
        &self.workload_domain
    }

    pub fn control_plane(&self) -> &ControlPlaneIdentity {
        &self.control_plane
    }
}
