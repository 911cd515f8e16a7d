//! # Configuration Management
//!
//! Environment-driven configuration for identity resolution.
//!
//! | Variable                           | Default      |
//! |------------------------------------|--------------|
//! | `MESHID_DOMAIN`                    | `""`         |
//! | `MESHID_IDENTITY_DOMAIN`           | `""`         |
//! | `MESHID_REGISTRY`                  | `Kubernetes` |
//! | `MESHID_CONTROL_PLANE_AUTH_POLICY` | `NONE`       |
//! | `MESHID_LOG_LEVEL`                 | `info`       |
//! | `MESHID_JSON_LOGGING`              | `false`      |
//! | `POD_NAMESPACE`                    | `default`    |
//! | `MESHID_SA_DOMAIN_CANONICAL`       | unset        |

pub mod settings;

pub use settings::{IdentityConfig, LoggingConfig};

pub const DOMAIN_ENV: &str = "MESHID_DOMAIN";
pub const IDENTITY_DOMAIN_ENV: &str = "MESHID_IDENTITY_DOMAIN";
pub const REGISTRY_ENV: &str = "MESHID_REGISTRY";
pub const AUTH_POLICY_ENV: &str = "MESHID_CONTROL_PLANE_AUTH_POLICY";
pub const LOG_LEVEL_ENV: &str = "MESHID_LOG_LEVEL";
pub const JSON_LOGGING_ENV: &str = "MESHID_JSON_LOGGING";

/// Read a trimmed string variable, falling back to `default` when unset.
pub(crate) fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).map(|value| value.trim().to_string()).unwrap_or_else(|_| default.to_string())
}

/// Read a boolean flag (`1`, `true`, `yes`, `on` are truthy).
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
