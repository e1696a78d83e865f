use proptest::prelude::*;
use regex::Regex;

use hash_gen::common::{HashGenError, Secret};
use hash_gen::core::hasher::{self, MAX_COST, MIN_COST};

const BCRYPT_PATTERN: &str = r"^\$2[aby]?\$\d{2}\$[./A-Za-z0-9]{53}$";

#[test]
fn end_to_end_scenario() {
    let secret = Secret::new("CorrectHorse!9".to_string());
    let hash = hasher::hash_secret(&secret, 12).unwrap();

    let pattern = Regex::new(r"^\$2[aby]?\$12\$[./A-Za-z0-9]{53}$").unwrap();
    assert!(pattern.is_match(&hash), "unexpected encoding: {hash}");

    assert!(bcrypt::verify("CorrectHorse!9", &hash).unwrap());
    assert!(!bcrypt::verify("correcthorse!9", &hash).unwrap());
}

#[test]
fn same_secret_hashes_differently() {
    let secret = Secret::new("hunter2".to_string());
    let first = hasher::hash_secret(&secret, MIN_COST).unwrap();
    let second = hasher::hash_secret(&secret, MIN_COST).unwrap();
    assert_ne!(first, second, "salts must differ between runs");
}

#[test]
fn altered_secret_does_not_verify() {
    let hash = hasher::hash_secret(&Secret::new("hunter2".to_string()), MIN_COST).unwrap();
    assert!(bcrypt::verify("hunter2", &hash).unwrap());
    assert!(!bcrypt::verify("hunter3", &hash).unwrap());
}

#[test]
fn empty_line_is_a_valid_secret() {
    let hash = hasher::hash_secret(&Secret::new(String::new()), MIN_COST).unwrap();
    let pattern = Regex::new(BCRYPT_PATTERN).unwrap();
    assert!(pattern.is_match(&hash));
    assert!(bcrypt::verify("", &hash).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn in_range_costs_produce_standard_encoding(cost in MIN_COST..=8u32) {
        // capped at 8: the work factor doubles per step, and the property
        // holds identically across the range
        let secret = Secret::new("hunter2".to_string());
        let hash = hasher::hash_secret(&secret, cost).unwrap();

        let pattern = Regex::new(BCRYPT_PATTERN).unwrap();
        prop_assert!(pattern.is_match(&hash));
        prop_assert!(bcrypt::verify("hunter2", &hash).unwrap());
    }

    #[test]
    fn out_of_range_costs_are_rejected(
        cost in prop_oneof![0u32..MIN_COST, (MAX_COST + 1)..=u32::MAX]
    ) {
        let err = hasher::hash_secret(&Secret::new("hunter2".to_string()), cost).unwrap_err();
        prop_assert!(matches!(err, HashGenError::InvalidCost(c) if c == cost));
    }

    #[test]
    fn arbitrary_printable_secrets_round_trip(password in "[ -~]{0,24}") {
        let hash = hasher::hash_secret(&Secret::new(password.clone()), MIN_COST).unwrap();
        prop_assert!(bcrypt::verify(&password, &hash).unwrap());
    }
}
