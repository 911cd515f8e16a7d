//! SPIFFE URI generation.
//!
//! Workload identities take the form
//!
//! ```text
//! spiffe://{identity_domain}/ns/{namespace}/sa/{service_account}
//! ```
//!
//! Two entry points exist on purpose. [`generate_uri`] is total and returns
//! an error for unscoped principals. [`must_generate_uri`] is for startup code
//! that has already validated its inputs and treats a failure as a bug.

use std::fmt;

use url::Url;

use super::state::IdentityState;
use crate::errors::{IdentityError, Result};

/// URI scheme of SPIFFE identities
pub const SCHEME: &str = "spiffe";

/// Generate the SPIFFE URI for `service_account` in `namespace`.
///
/// Returns an empty string, not an error, when no identity domain is set:
/// with mutual TLS off there is no identity to generate.
///
/// # Errors
///
/// Returns [`IdentityError::InvalidArgument`] if an identity domain is set
/// and either `namespace` or `service_account` is empty.
pub fn generate_uri(state: &IdentityState, namespace: &str, service_account: &str) -> Result<String> {
    let domain = state.domain();
    if domain.identity.is_empty() {
        return Ok(String::new());
    }

    let missing: Vec<&str> = [("namespace", namespace), ("service_account", service_account)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

    if !missing.is_empty() {
        return Err(IdentityError::invalid_argument(
            missing.join(","),
            format!(
                "namespace or service account can't be empty ns={:?} serviceAccount={:?}",
                namespace, service_account
            ),
        ));
    }

    Ok(format_uri(&domain.identity, namespace, service_account))
}

/// Like [`generate_uri`], but panics on invalid input.
///
/// # Panics
///
/// Panics when an identity domain is set and `namespace` or
/// `service_account` is empty. Callers use this only after validating both.
pub fn must_generate_uri(state: &IdentityState, namespace: &str, service_account: &str) -> String {
    match generate_uri(state, namespace, service_account) {
        Ok(uri) => uri,
        Err(err) => panic!("configuration assumption violated: {}", err),
    }
}

pub(crate) fn format_uri(identity: &str, namespace: &str, service_account: &str) -> String {
    format!("{}://{}/ns/{}/sa/{}", SCHEME, identity, namespace, service_account)
}

/// Components of a parsed workload SPIFFE URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpiffeUri {
    pub trust_domain: String,
    pub namespace: String,
    pub service_account: String,
}

impl SpiffeUri {
    /// Parse a `spiffe://{domain}/ns/{namespace}/sa/{service_account}` URI.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri)
            .map_err(|e| IdentityError::invalid_argument("uri", format!("not a valid URI: {}", e)))?;

        if url.scheme() != SCHEME {
            return Err(IdentityError::invalid_argument(
                "uri",
                format!("expected scheme '{}', got '{}'", SCHEME, url.scheme()),
            ));
        }

        if !url.username().is_empty()
            || url.password().is_some()
            || url.port().is_some()
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(IdentityError::invalid_argument(
                "uri",
                "SPIFFE URI must not carry userinfo, port, query or fragment",
            ));
        }

        let trust_domain = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| IdentityError::invalid_argument("uri", "missing trust domain"))?
            .to_string();

        let segments: Vec<&str> = url.path().trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["ns", namespace, "sa", service_account]
                if !namespace.is_empty() && !service_account.is_empty() =>
            {
                Ok(Self {
                    trust_domain,
                    namespace: namespace.to_string(),
                    service_account: service_account.to_string(),
                })
            }
            _ => Err(IdentityError::invalid_argument(
                "uri",
                format!("expected path /ns/{{namespace}}/sa/{{service_account}}, got '{}'", url.path()),
            )),
        }
    }
}

impl fmt::Display for SpiffeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_uri(&self.trust_domain, &self.namespace, &self.service_account))
    }
}
