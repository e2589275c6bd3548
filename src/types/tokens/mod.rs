// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token amounts
//!
//! # Type Relationships
//!
//! ```text
//! display text ("1.5")
//!     |
//!     | to_base(Exponent)
//!     ↓
//! BaseAmount (arbitrary-precision integer, "1500000")
//!     |
//!     | from_base(Exponent)
//!     ↓
//! display text ("1.5")
//! ```

mod amount;
mod exponent;

pub use amount::BaseAmount;
pub use exponent::Exponent;
