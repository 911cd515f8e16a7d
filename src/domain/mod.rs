//! Domain layer
//!
//! Pure value types and resolution rules for mesh trust domains. Nothing in
//! this module reads process state: the environment is captured once into an
//! [`IdentityEnv`] snapshot and passed in by value.
//!
//! ## Module Organization
//!
//! - `registry`: service registry kinds that decide default trust domains
//! - `auth_policy`: control plane authentication policy
//! - `env`: snapshot of the environment inputs used during resolution
//! - `trust_domain`: the [`Domain`] value, its defaults table, and the resolver

pub mod auth_policy;
pub mod env;
pub mod registry;
pub mod trust_domain;

pub use auth_policy::AuthPolicy;
pub use env::IdentityEnv;
pub use registry::RegistryKind;
pub use trust_domain::{resolve, Domain};
