// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between display amounts and base-unit integers
//!
//! All arithmetic goes through [`BigDecimal`] and [`BigInt`]; binary floating
//! point is never involved, so `"0.1"` at exponent 18 is exactly
//! `100000000000000000` and amounts far beyond `u128` survive untouched.
//!
//! Display input accepts plain decimal notation only: an optional sign,
//! digits, and at most one decimal point (`"12"`, `"0.5"`, `".5"`, `"5."`).
//! Exponent notation and thousands separators are rejected.

use std::str::FromStr;

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;

use crate::errors::AmountError;
use crate::types::tokens::{BaseAmount, Exponent};

/// Convert a display amount to base units: `display × 10^exponent`
///
/// Digits beyond the asset's precision are truncated toward zero.
///
/// # Errors
///
/// - [`AmountError::Empty`] for empty or whitespace-only input
/// - [`AmountError::InvalidDecimal`] for anything that is not a plain decimal
/// - [`AmountError::Negative`] for amounts below zero
///
/// # Examples
///
/// ```
/// use cosmos_multisend::{to_base, Exponent};
///
/// assert_eq!(to_base("1.5", Exponent::MICRO).unwrap().to_string(), "1500000");
/// assert_eq!(to_base("0.1", Exponent::ATTO).unwrap().to_string(), "100000000000000000");
/// assert_eq!(to_base("1.2345678", Exponent::MICRO).unwrap().to_string(), "1234567");
/// ```
pub fn to_base(display: &str, exponent: Exponent) -> Result<BaseAmount, AmountError> {
    let value = parse_display(display)?;
    if value.sign() == Sign::Minus {
        return Err(AmountError::negative(display.trim()));
    }

    let (digits, scale) = value.as_bigint_and_exponent();
    let shift = i64::from(exponent.as_u8()) - scale;
    let magnitude =
        u32::try_from(shift.unsigned_abs()).map_err(|_| AmountError::invalid_decimal(display))?;

    let base = if shift >= 0 {
        digits * ten_pow(magnitude)
    } else {
        // Non-negative, so integer division truncates toward zero
        digits / ten_pow(magnitude)
    };

    Ok(BaseAmount::from_non_negative(base))
}

/// Like [`to_base`], but empty or invalid input counts as zero
///
/// Used for running totals while the user is still typing. Batch building
/// always uses the strict [`to_base`].
pub fn to_base_lenient(display: &str, exponent: Exponent) -> BaseAmount {
    to_base(display, exponent).unwrap_or_else(|_| BaseAmount::zero())
}

/// Convert a base-unit amount to its canonical display form: `base / 10^exponent`
///
/// The result has no leading zeros in the integer part, no trailing zeros in
/// the fraction, and no decimal point when the fraction is empty.
///
/// # Examples
///
/// ```
/// use cosmos_multisend::{from_base, BaseAmount, Exponent};
///
/// let amount = BaseAmount::from(1_500_000u64);
/// assert_eq!(from_base(&amount, Exponent::MICRO), "1.5");
/// assert_eq!(from_base(&BaseAmount::from(1u64), Exponent::MICRO), "0.000001");
/// assert_eq!(from_base(&amount, Exponent::new(0)), "1500000");
/// ```
pub fn from_base(amount: &BaseAmount, exponent: Exponent) -> String {
    format_scaled(&amount.as_bigint().to_string(), usize::from(exponent.as_u8()))
}

/// Canonical decimal form of a display amount
///
/// `"007.50"` becomes `"7.5"`, `".5"` becomes `"0.5"`. This is the form the
/// round trip `from_base(to_base(x, e), e)` returns whenever `x` has at most
/// `e` fractional digits.
pub fn canonicalize(display: &str) -> Result<String, AmountError> {
    let value = parse_display(display)?;
    if value.sign() == Sign::Minus {
        return Err(AmountError::negative(display.trim()));
    }

    let (digits, scale) = value.as_bigint_and_exponent();
    let digits = digits.to_string();
    if scale <= 0 {
        let zeros = usize::try_from(scale.unsigned_abs())
            .map_err(|_| AmountError::invalid_decimal(display))?;
        return Ok(format_scaled(&format!("{digits}{}", "0".repeat(zeros)), 0));
    }
    let scale = usize::try_from(scale).map_err(|_| AmountError::invalid_decimal(display))?;
    Ok(format_scaled(&digits, scale))
}

/// Parse plain decimal text into a [`BigDecimal`]
fn parse_display(display: &str) -> Result<BigDecimal, AmountError> {
    let trimmed = display.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let well_formed = !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(AmountError::invalid_decimal(display));
    }

    let sign = if trimmed.starts_with('-') { "-" } else { "" };
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    BigDecimal::from_str(&normalized).map_err(|_| AmountError::invalid_decimal(display))
}

/// 10^exponent as an arbitrary-precision integer
fn ten_pow(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Place a decimal point `scale` digits from the right of a non-negative
/// digit string and strip redundant zeros
fn format_scaled(digits: &str, scale: usize) -> String {
    let digits = digits.trim_start_matches('0');
    if scale == 0 {
        return if digits.is_empty() {
            "0".to_string()
        } else {
            digits.to_string()
        };
    }

    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits.to_string()
    };
    let (whole, fractional) = padded.split_at(padded.len() - scale);
    let fractional = fractional.trim_end_matches('0');

    if fractional.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fractional}")
    }
}
