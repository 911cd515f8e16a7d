use meshid::identity::generate_uri;
use meshid::SpiffeUri;
use proptest::prelude::*;

use super::super::support::state_with_identity;

proptest! {
    #[test]
    fn generated_uri_parses_back(
        domain in "[a-z0-9]([a-z0-9-]{0,8}[a-z0-9])?(\\.[a-z0-9]([a-z0-9-]{0,8}[a-z0-9])?){0,3}",
        namespace in "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?",
        service_account in "[a-z0-9]([a-z0-9.-]{0,20}[a-z0-9])?",
    ) {
        let state = state_with_identity(&domain);
        let uri = generate_uri(&state, &namespace, &service_account).unwrap();

        let parsed = SpiffeUri::parse(&uri).unwrap();
        prop_assert_eq!(&parsed.trust_domain, &domain);
        prop_assert_eq!(&parsed.namespace, &namespace);
        prop_assert_eq!(&parsed.service_account, &service_account);
        prop_assert_eq!(parsed.to_string(), uri);
    }

    #[test]
    fn empty_components_always_fail_with_identity(
        domain in "[a-z]{1,10}\\.local",
        value in "[a-z0-9-]{1,20}",
    ) {
        let state = state_with_identity(&domain);
        prop_assert!(generate_uri(&state, "", &value).is_err());
        prop_assert!(generate_uri(&state, &value, "").is_err());
    }
}
