use crate::error::FingerprintError;
use crate::fingerprint::{Fingerprint, PREFIX};
use crate::tests::{fixture_pods, shuffle, Pcg32, FIXTURE_SIGNATURE};

// Heap's algorithm; emits every permutation of `items`.
fn permutations<T: Clone>(items: &mut [T], k: usize, out: &mut Vec<Vec<T>>) {
    if k <= 1 {
        out.push(items.to_vec());
        return;
    }
    for i in 0..k {
        permutations(items, k - 1, out);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
}

#[test]
fn test_signature_format() {
    let mut fp = Fingerprint::new(2);
    fp.add("foo", "bar");
    fp.add("baz", "quux");
    let sig = fp.sign();

    assert!(sig.starts_with(PREFIX));
    let digest = &sig[PREFIX.len()..];
    assert_eq!(digest.len(), 16);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_known_signatures() {
    let mut fp = Fingerprint::new(1);
    fp.add("foo", "bar");
    assert_eq!(fp.sign(), "pfp0v00193b6e1f8801e547f");

    let mut fp = Fingerprint::new(5);
    for pod in fixture_pods() {
        fp.add(&pod.namespace, &pod.name);
    }
    assert_eq!(fp.sign(), FIXTURE_SIGNATURE);
}

#[test]
fn test_empty_set_signature() {
    let fp = Fingerprint::new(0);
    assert_eq!(fp.sign(), "pfp0v0010000000000000000");
}

#[test]
fn test_empty_fields_are_hashed_as_is() {
    let mut fp = Fingerprint::new(1);
    fp.add("", "");
    // The canonical form of an all-empty pod is the bare separator.
    assert_eq!(fp.sign(), "pfp0v001e89cd67289eddaea");
}

#[test]
fn test_order_independence_exhaustive() {
    let mut pods = fixture_pods();
    let mut orders = Vec::new();
    let len = pods.len();
    permutations(&mut pods, len, &mut orders);
    assert_eq!(orders.len(), 120);

    for order in orders {
        let mut fp = Fingerprint::new(order.len());
        for pod in &order {
            fp.add(&pod.namespace, &pod.name);
        }
        assert_eq!(fp.sign(), FIXTURE_SIGNATURE);
    }
}

#[test]
fn test_order_independence_shuffled() {
    let mut rng = Pcg32::new(42);
    for _ in 0..50 {
        let mut pods = fixture_pods();
        shuffle(&mut pods, &mut rng);

        let mut fp = Fingerprint::new(pods.len());
        for pod in &pods {
            fp.add(&pod.namespace, &pod.name);
        }
        assert_eq!(fp.sign(), FIXTURE_SIGNATURE);
    }
}

#[test]
fn test_hint_does_not_affect_digest() {
    for hint in [0, 1, 5, 1024] {
        let mut fp = Fingerprint::new(hint);
        for pod in fixture_pods() {
            fp.add(&pod.namespace, &pod.name);
        }
        assert_eq!(fp.sign(), FIXTURE_SIGNATURE);
    }
}

#[test]
fn test_sign_is_idempotent() {
    let mut fp = Fingerprint::new(0);
    fp.add("ns1", "n1");
    let first = fp.sign();
    assert_eq!(fp.sign(), first);
    assert_eq!(fp.sign(), first);
}

#[test]
fn test_duplicate_add_changes_digest() {
    let mut fp = Fingerprint::new(6);
    for pod in fixture_pods() {
        fp.add(&pod.namespace, &pod.name);
    }
    fp.add("ns1", "n1");
    // One extra fold of ns1/n1 moves the digest off the 5-pod fixture.
    assert_eq!(fp.sign(), "pfp0v001eb2951bc65de77d6");
}

#[test]
fn test_check_match() {
    let mut fp = Fingerprint::new(5);
    for pod in fixture_pods() {
        fp.add(&pod.namespace, &pod.name);
    }
    assert!(fp.check(FIXTURE_SIGNATURE).is_ok());
    assert!(fp.check(&fp.sign()).is_ok());
}

#[test]
fn test_check_mismatch_carries_both_signatures() {
    let mut fp = Fingerprint::new(1);
    fp.add("ns1", "n1");
    let computed = fp.sign();

    let err = fp.check("pfp0v001ffffffffffffffff").unwrap_err();
    let FingerprintError::SignatureMismatch { expected, computed: got } = err;
    assert_eq!(expected, "pfp0v001ffffffffffffffff");
    assert_eq!(got, computed);
}
