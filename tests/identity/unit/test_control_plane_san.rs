use meshid::identity::{default_domain, determine_san};
use meshid::{AuthPolicy, ControlPlaneIdentity, IdentityEnv, RegistryKind};

use super::super::support::control_plane_san;

fn determine(
    domain: &str,
    identity_domain: &str,
    registry: RegistryKind,
    policy: AuthPolicy,
) -> ControlPlaneIdentity {
    let env = IdentityEnv::default().with_pod_namespace("default");
    determine_san(domain, identity_domain, &registry, policy, "anything", &env)
}

#[test]
fn no_control_plane_san_if_authentication_none() {
    for registry in [RegistryKind::Kubernetes, RegistryKind::Consul, RegistryKind::Mock] {
        for (domain, identity_domain) in [("", ""), ("my.domain", ""), ("", "secured")] {
            let result = determine(domain, identity_domain, registry.clone(), AuthPolicy::None);
            assert!(result.sans.is_empty(), "{registry} {domain:?} {identity_domain:?}");
        }
    }
}

#[test]
fn control_plane_san_mutual_tls_domain_empty_kubernetes() {
    let result = determine("", "", RegistryKind::Kubernetes, AuthPolicy::MutualTls);
    assert_eq!(result.identity, "cluster.local");
    assert_eq!(result.sans.as_slice(), [control_plane_san("cluster.local", "anything")]);
}

#[test]
fn control_plane_san_mutual_tls_domain_not_empty_kubernetes() {
    let result = determine("my.domain", "", RegistryKind::Kubernetes, AuthPolicy::MutualTls);
    assert_eq!(result.identity, "my.domain");
    assert_eq!(result.sans.as_slice(), [control_plane_san("my.domain", "anything")]);
}

#[test]
fn control_plane_san_mutual_tls_domain_empty_consul() {
    let result = determine("", "", RegistryKind::Consul, AuthPolicy::MutualTls);
    assert_eq!(result.identity, "");
    assert!(result.sans.is_empty());
}

#[test]
fn control_plane_san_mutual_tls_identity_domain() {
    let result = determine("", "secured", RegistryKind::Kubernetes, AuthPolicy::MutualTls);
    assert_eq!(result.sans.as_slice(), [control_plane_san("secured", "anything")]);
}

#[test]
fn control_plane_san_mutual_tls_identity_domain_and_domain() {
    let result = determine("my.domain", "secured", RegistryKind::Kubernetes, AuthPolicy::MutualTls);
    assert_eq!(result.identity, "secured");
    assert_eq!(result.sans.as_slice(), [control_plane_san("secured", "anything")]);
}

#[test]
fn control_plane_san_mutual_tls_standard_domain_kubernetes() {
    let result = determine(".svc.cluster.local", "", RegistryKind::Kubernetes, AuthPolicy::MutualTls);
    assert_eq!(result.sans.as_slice(), [control_plane_san("cluster.local", "anything")]);
}

#[test]
fn control_plane_san_mutual_tls_standard_domain_consul() {
    let result = determine("service.consul", "", RegistryKind::Consul, AuthPolicy::MutualTls);
    assert!(result.sans.is_empty());
}

#[test]
fn control_plane_san_mutual_tls_mock() {
    let result = determine("", "", RegistryKind::Mock, AuthPolicy::MutualTls);
    assert!(result.sans.is_empty());

    let result = determine("my.domain", "", RegistryKind::Mock, AuthPolicy::MutualTls);
    assert_eq!(result.sans.as_slice(), [control_plane_san("my.domain", "anything")]);
}

#[test]
fn control_plane_default_domain_kubernetes() {
    let result = determine("", "", RegistryKind::Kubernetes, AuthPolicy::None);
    assert_eq!(result.domain, "default.svc.cluster.local");
}

#[test]
fn control_plane_default_domain_consul() {
    let result = determine("", "", RegistryKind::Consul, AuthPolicy::MutualTls);
    assert_eq!(result.domain, "service.consul");
}

#[test]
fn control_plane_default_domain_others() {
    let result = determine("", "", RegistryKind::Mock, AuthPolicy::None);
    assert_eq!(result.domain, "");

    let result = determine("", "", RegistryKind::Other("Eureka".to_string()), AuthPolicy::MutualTls);
    assert_eq!(result.domain, "");
    assert!(result.sans.is_empty());
}

#[test]
fn control_plane_explicit_domain() {
    let result = determine("my.domain", "", RegistryKind::Mock, AuthPolicy::None);
    assert_eq!(result.domain, "my.domain");
}

#[test]
fn default_domain_matches_determine_san() {
    let env = IdentityEnv::default().with_pod_namespace("mesh-system");
    for registry in [RegistryKind::Kubernetes, RegistryKind::Consul, RegistryKind::Mock] {
        for domain in ["", "my.domain"] {
            let standalone = default_domain(domain, &registry, &env);
            let combined = determine_san(domain, "", &registry, AuthPolicy::MutualTls, "ns", &env).domain;
            assert_eq!(standalone, combined);
        }
    }
    assert_eq!(default_domain("", &RegistryKind::Kubernetes, &env), "mesh-system.svc.cluster.local");
}

#[test]
fn control_plane_san_uses_canonical_override() {
    let env = IdentityEnv::default().with_canonical_domain("corp.example");
    let result = determine_san("", "", &RegistryKind::Consul, AuthPolicy::MutualTls, "anything", &env);
    assert_eq!(result.sans.as_slice(), [control_plane_san("corp.example", "anything")]);
}
