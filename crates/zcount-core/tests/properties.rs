//! Property-based tests for the scanner and the classification policy.
//!
//! These pin down the arithmetic laws the unit tests only spot-check: the
//! scan cap is never overrun, an unlimited scan is exact, and the
//! classification boundary and threshold clamp hold for arbitrary values.

use proptest::prelude::*;
use std::io::Cursor;
use zcount_core::{count_zero_bytes, Tally, Thresholds};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_unlimited_scan_matches_naive_count(
        data in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let expected = data.iter().filter(|&&b| b == 0).count() as u64;
        prop_assert_eq!(count_zero_bytes(Cursor::new(data), 0), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_capped_scan_never_overruns(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        limit in 1u64..64,
    ) {
        let true_count = data.iter().filter(|&&b| b == 0).count() as u64;
        let counted = count_zero_bytes(Cursor::new(data), limit);
        prop_assert!(counted <= limit);
        prop_assert_eq!(counted, true_count.min(limit));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_surplus_zeros_stop_exactly_at_limit(limit in 1u64..2048) {
        let data = vec![0u8; (limit + 5) as usize];
        prop_assert_eq!(count_zero_bytes(Cursor::new(data), limit), limit);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_classification_boundary(lower in 1u64..u64::MAX) {
        let t = Thresholds::new(0, lower);
        prop_assert!(t.classify(lower).suspicious);
        prop_assert!(!t.classify(lower - 1).suspicious);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_clamp_reduces_to_cap(upper in 1u64..1000, excess in 1u64..1000) {
        let t = Thresholds::new(upper, upper + excess);
        prop_assert_eq!(t.effective_lower(), upper);
        // With the scan capped at `upper`, classification reduces to
        // "the count reached the cap".
        prop_assert!(t.classify(upper).suspicious);
        prop_assert!(!t.classify(upper - 1).suspicious);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_tally_counts_suspicious_verdicts(
        counts in prop::collection::vec(0u64..10, 0..32),
        lower in 1u64..10,
    ) {
        let t = Thresholds::new(0, lower);
        let mut tally = Tally::new();
        for &zeros in &counts {
            tally.record(&t.classify(zeros));
        }
        let expected = counts.iter().filter(|&&z| z >= lower).count() as i32;
        prop_assert_eq!(tally.exit_status(), expected);
    }
}
