// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from converting between display and base-unit amounts.

/// Errors that can occur while parsing or converting an amount.
///
/// # Examples
///
/// ```rust
/// use cosmos_multisend::{to_base, AmountError, Exponent};
///
/// match to_base("-1.5", Exponent::new(6)) {
///     Err(AmountError::Negative { value }) => assert_eq!(value, "-1.5"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The amount text was empty (or only whitespace).
    #[error("Amount is empty")]
    Empty,

    /// The amount text is not a decimal number.
    #[error("Invalid decimal amount: {value:?}")]
    InvalidDecimal {
        /// The text that failed to parse
        value: String,
    },

    /// The amount is below zero.
    #[error("Amount must not be negative: {value}")]
    Negative {
        /// The rejected amount text
        value: String,
    },

    /// A base-unit amount was not a non-negative integer.
    #[error("Invalid base-unit amount: {value:?}")]
    InvalidBaseAmount {
        /// The text that failed to parse
        value: String,
    },
}

impl AmountError {
    /// Create an `InvalidDecimal` error for the given text.
    pub fn invalid_decimal(value: impl Into<String>) -> Self {
        Self::InvalidDecimal {
            value: value.into(),
        }
    }

    /// Create a `Negative` error for the given text.
    pub fn negative(value: impl Into<String>) -> Self {
        Self::Negative {
            value: value.into(),
        }
    }

    /// Create an `InvalidBaseAmount` error for the given text.
    pub fn invalid_base_amount(value: impl Into<String>) -> Self {
        Self::InvalidBaseAmount {
            value: value.into(),
        }
    }
}
