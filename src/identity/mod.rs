//! # Workload and Control Plane Identity
//!
//! Everything that turns a resolved [`Domain`](crate::domain::Domain) into
//! SPIFFE identities:
//!
//! - `state`: the resolved domain shared by every component after bootstrap
//! - `spiffe`: SPIFFE URI generation and parsing for namespace/service account pairs
//! - `control_plane`: the SAN list the control plane's own proxy presents and requires

pub mod control_plane;
pub mod spiffe;
pub mod state;

pub use control_plane::{
    default_domain, determine_san, ControlPlaneIdentity, SanList, CONTROL_PLANE_SERVICE_ACCOUNT,
};
pub use spiffe::{generate_uri, must_generate_uri, SpiffeUri, SCHEME};
pub use state::IdentityState;
