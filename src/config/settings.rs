//! # Configuration Settings
//!
//! Defines the configuration structure for identity resolution. Registry kind
//! and auth policy are decoded into enums here so nothing downstream compares
//! strings.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{
    env_flag, env_or_default, AUTH_POLICY_ENV, DOMAIN_ENV, IDENTITY_DOMAIN_ENV, JSON_LOGGING_ENV,
    LOG_LEVEL_ENV, REGISTRY_ENV,
};
use crate::domain::{AuthPolicy, IdentityEnv, RegistryKind};
use crate::errors::{IdentityError, Result};

/// DNS-style domain, optionally with a leading dot (`.svc.cluster.local`).
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.?[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .expect("BUG: DOMAIN_REGEX pattern is invalid - validated by tests")
});

/// Kubernetes namespace name (RFC 1123 label).
static NAMESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$")
        .expect("BUG: NAMESPACE_REGEX pattern is invalid - validated by tests")
});

/// Identity resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct IdentityConfig {
    /// Explicit service domain; empty means use the registry default
    #[validate(custom(function = "validate_domain"))]
    pub domain: String,

    /// Explicit SPIFFE identity domain; takes precedence over `domain`
    #[validate(custom(function = "validate_domain"))]
    pub identity_domain: String,

    /// Service registry the control plane discovers services from
    pub registry: RegistryKind,

    /// Mesh authentication policy; `MUTUAL_TLS` also gates workload identities
    pub control_plane_auth_policy: AuthPolicy,

    /// Environment inputs captured at load time
    pub env: IdentityEnv,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl IdentityConfig {
    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let control_plane_auth_policy = match std::env::var(AUTH_POLICY_ENV) {
            Ok(value) => value.trim().parse::<AuthPolicy>()?,
            Err(_) => AuthPolicy::default(),
        };

        let registry = std::env::var(REGISTRY_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(RegistryKind::from)
            .unwrap_or_default();

        let config = Self {
            domain: env_or_default(DOMAIN_ENV, ""),
            identity_domain: env_or_default(IDENTITY_DOMAIN_ENV, ""),
            registry,
            control_plane_auth_policy,
            env: IdentityEnv::from_env(),
            logging: LoggingConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(IdentityError::from)?;

        self.validate_custom()?;

        Ok(())
    }

    /// Checks on the captured environment, which the derive cannot reach
    fn validate_custom(&self) -> Result<()> {
        if let Some(namespace) = &self.env.pod_namespace {
            if namespace.len() > 63 || !NAMESPACE_REGEX.is_match(namespace) {
                return Err(IdentityError::config(format!(
                    "Pod namespace '{}' is not a valid Kubernetes namespace name",
                    namespace
                )));
            }
        }

        if let Some(canonical) = &self.env.canonical_domain {
            validate_domain(canonical).map_err(|_| {
                IdentityError::config(format!(
                    "Canonical identity domain '{}' is not a valid domain",
                    canonical
                ))
            })?;
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), json_logging: false }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: env_or_default(LOG_LEVEL_ENV, "info"),
            json_logging: env_flag(JSON_LOGGING_ENV, false),
        }
    }
}

/// Empty domains are allowed and mean "use the default".
fn validate_domain(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    if value.len() > 253 || !DOMAIN_REGEX.is_match(value) {
        let mut error = ValidationError::new("domain");
        error.message = Some(
            format!("'{}' is not a valid domain (no scheme, path or port allowed)", value).into(),
        );
        return Err(error);
    }

    Ok(())
}
