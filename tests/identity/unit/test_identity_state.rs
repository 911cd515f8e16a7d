use std::sync::Arc;
use std::thread;

use meshid::identity::generate_uri;
use meshid::{Domain, IdentityEnv, IdentityState};

use super::super::support::kubernetes_default;

#[test]
fn set_domain_returns_stored_value() {
    let state = IdentityState::new(IdentityEnv::default());
    let resolved = state.set_domain(&Domain::default(), &kubernetes_default(), true);
    assert_eq!(*state.domain(), resolved);
    assert_eq!(resolved.identity, "cluster.local");
}

#[test]
fn state_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IdentityState>();
    assert_send_sync::<Arc<IdentityState>>();
}

#[test]
fn concurrent_readers_after_bootstrap() {
    let state = Arc::new(IdentityState::new(IdentityEnv::default()));
    state.set_domain(&Domain::default(), &kubernetes_default(), true);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                let namespace = format!("ns-{}", i);
                (0..500)
                    .map(|_| generate_uri(&state, &namespace, "sa").unwrap())
                    .all(|uri| uri == format!("spiffe://cluster.local/ns/{}/sa/sa", namespace))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn readers_never_observe_a_torn_domain() {
    let first = Domain::new("first.suffix", "first.identity");
    let second = Domain::new("second.suffix", "second.identity");

    let state = Arc::new(IdentityState::new(IdentityEnv::default()));
    state.set_domain(&first, &Domain::default(), true);

    let writer = {
        let state = Arc::clone(&state);
        let (first, second) = (first.clone(), second.clone());
        thread::spawn(move || {
            for i in 0..1_000 {
                let next = if i % 2 == 0 { &second } else { &first };
                state.set_domain(next, &Domain::default(), true);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let state = Arc::clone(&state);
            let (first, second) = (first.clone(), second.clone());
            thread::spawn(move || {
                (0..2_000).all(|_| {
                    let snapshot = state.domain();
                    *snapshot == first || *snapshot == second
                })
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        assert!(reader.join().unwrap());
    }
}
