// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for display/base unit conversion
//!
//! These tests use proptest to check the conversion laws across exponents
//! and amounts far beyond what a float could represent exactly.

use cosmos_multisend::{
    canonicalize, from_base, to_base, to_base_lenient, BaseAmount, Exponent, Recipient,
    Recipients,
};
use proptest::prelude::*;

// Helper to generate exponents seen in practice plus the extremes
fn arb_exponent() -> impl Strategy<Value = Exponent> {
    prop_oneof![
        Just(Exponent::new(0)),
        Just(Exponent::MICRO),
        Just(Exponent::new(8)),
        Just(Exponent::ATTO),
        (0u8..=36).prop_map(Exponent::new),
    ]
}

// Helper to generate integer digit strings up to 40 digits
fn arb_digits() -> impl Strategy<Value = String> {
    "[0-9]{1,40}"
}

proptest! {
    /// Property: from_base then to_base is the identity on base amounts
    #[test]
    fn prop_base_round_trip(digits in arb_digits(), exponent in arb_exponent()) {
        let amount: BaseAmount = digits.parse().unwrap();
        let display = from_base(&amount, exponent);
        prop_assert_eq!(to_base(&display, exponent).unwrap(), amount);
    }

    /// Property: a display amount with at most `exponent` fractional digits
    /// round-trips to its canonical form
    #[test]
    fn prop_display_round_trip(
        int_part in "[0-9]{1,20}",
        frac_digits in "[0-9]{0,36}",
        places in 0u8..=36,
    ) {
        let exponent = Exponent::new(places);
        let frac_part = &frac_digits[..frac_digits.len().min(usize::from(places))];
        let display = if frac_part.is_empty() {
            int_part.clone()
        } else {
            format!("{int_part}.{frac_part}")
        };
        let base = to_base(&display, exponent).unwrap();
        prop_assert_eq!(from_base(&base, exponent), canonicalize(&display).unwrap());
    }

    /// Property: excess precision truncates toward zero, never rounds up
    #[test]
    fn prop_truncates_toward_zero(
        int_part in "[0-9]{1,12}",
        frac_part in "[0-9]{7,20}",
    ) {
        let display = format!("{int_part}.{frac_part}");
        let kept = format!("{int_part}.{}", &frac_part[..6]);
        prop_assert_eq!(
            to_base(&display, Exponent::MICRO).unwrap(),
            to_base(&kept, Exponent::MICRO).unwrap()
        );
    }

    /// Property: negative amounts are always rejected
    #[test]
    fn prop_negative_rejected(
        int_part in "[1-9][0-9]{0,10}",
        exponent in arb_exponent(),
    ) {
        let negative = format!("-{int_part}");
        prop_assert!(to_base(&negative, exponent).is_err());
    }

    /// Property: the recipient total equals the sum of each converted amount
    #[test]
    fn prop_total_is_exact_sum(amounts in prop::collection::vec("[0-9]{1,8}\\.[0-9]{1,6}", 1..20)) {
        let entries: Vec<Recipient> = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| Recipient::new(format!("addr{i}"), amount.clone()))
            .collect();
        let recipients = Recipients::from_entries(entries);

        let expected: BaseAmount = amounts
            .iter()
            .map(|a| to_base_lenient(a, Exponent::MICRO))
            .sum();
        prop_assert_eq!(recipients.total(Exponent::MICRO), expected);
    }
}

#[test]
fn test_tenth_at_eighteen_decimals() {
    assert_eq!(
        to_base("0.1", Exponent::ATTO).unwrap().to_string(),
        "100000000000000000"
    );
}

#[test]
fn test_sum_of_tenths_is_exact() {
    // 0.1 + 0.2 in binary floating point is 0.30000000000000004
    let recipients = Recipients::from_entries(vec![
        Recipient::new("a", "0.1"),
        Recipient::new("b", "0.2"),
    ]);
    assert_eq!(recipients.total_display(Exponent::ATTO), "0.3");
}
