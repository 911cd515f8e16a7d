//! # Structured Logging
//!
//! Subscriber setup and startup logging using the tracing ecosystem. The
//! filter comes from `RUST_LOG` when set, otherwise from the configured log
//! level.

use tracing_subscriber::EnvFilter;

use crate::config::{IdentityConfig, LoggingConfig};
use crate::domain::Domain;
use crate::errors::{IdentityError, Result};
use crate::identity::ControlPlaneIdentity;

/// Install the global tracing subscriber.
///
/// A subscriber that is already installed (e.g. by an embedding control
/// plane or a test harness) is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            IdentityError::config(format!("Invalid log level '{}': {}", config.log_level, e))
        })?,
    };

    let installed = if config.json_logging {
        tracing::subscriber::set_global_default(
            tracing_subscriber::fmt().json().with_env_filter(filter).finish(),
        )
        .is_ok()
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::fmt().with_env_filter(filter).finish(),
        )
        .is_ok()
    };

    if !installed {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }

    Ok(())
}

/// Log the resolved identity configuration at startup
pub fn log_identity_info(
    config: &IdentityConfig,
    workload_domain: &Domain,
    control_plane: &ControlPlaneIdentity,
) {
    tracing::info!(
        registry = %config.registry,
        control_plane_auth_policy = %config.control_plane_auth_policy,
        pod_namespace = %config.env.namespace(),
        domain_suffix = %workload_domain.suffix,
        identity_domain = %workload_domain.identity,
        control_plane_domain = %control_plane.domain,
        control_plane_sans = ?control_plane.sans.as_slice(),
        "Mesh identity configuration"
    );

    if config.control_plane_auth_policy.is_mutual_tls() && !workload_domain.has_identity() {
        tracing::warn!(
            registry = %config.registry,
            "Mutual TLS is enabled but no identity domain was resolved; workload SPIFFE URIs will be empty"
        );
    }
}
