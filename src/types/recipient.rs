// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Recipient entries and the caller-owned recipient list

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::types::tokens::{BaseAmount, Exponent};
use crate::units::{from_base, to_base_lenient};

/// One transfer target as entered by the user
///
/// Neither field is validated here: the address format belongs to the chain
/// and the amount may be half-typed. Validation happens when a batch is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Bech32 address on the active chain
    pub address: String,
    /// Amount in display units, as typed
    pub amount: String,
}

impl Recipient {
    /// Create a recipient
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// Ordered, never-empty list of recipients
///
/// Starts with a single blank entry and refuses to drop its last one.
///
/// # Examples
///
/// ```
/// use cosmos_multisend::{Exponent, Recipients};
///
/// let mut recipients = Recipients::new();
/// recipients.set_address(0, "cosmos1alice").unwrap();
/// recipients.set_amount(0, "1.5").unwrap();
///
/// let second = recipients.push_blank();
/// recipients.set_address(second, "cosmos1bob").unwrap();
/// recipients.set_amount(second, "0.25").unwrap();
///
/// assert_eq!(recipients.total_display(Exponent::MICRO), "1.75");
/// assert!(recipients.remove(1).is_ok());
/// assert!(recipients.remove(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Recipients(Vec<Recipient>);

impl Recipients {
    /// Create a list holding one blank recipient
    pub fn new() -> Self {
        Self(vec![Recipient::default()])
    }

    /// Build from existing entries; an empty input yields one blank entry
    pub fn from_entries(entries: Vec<Recipient>) -> Self {
        if entries.is_empty() {
            Self::new()
        } else {
            Self(entries)
        }
    }

    /// Append a blank recipient and return its index
    pub fn push_blank(&mut self) -> usize {
        self.push(Recipient::default())
    }

    /// Append a recipient and return its index
    pub fn push(&mut self, recipient: Recipient) -> usize {
        self.0.push(recipient);
        self.0.len() - 1
    }

    /// Remove the recipient at `index`
    ///
    /// Fails with [`ValidationError::LastRecipient`] when it is the only one.
    pub fn remove(&mut self, index: usize) -> Result<Recipient, ValidationError> {
        self.check_index(index)?;
        if self.0.len() == 1 {
            return Err(ValidationError::LastRecipient);
        }
        Ok(self.0.remove(index))
    }

    /// Replace the address of the recipient at `index`
    pub fn set_address(
        &mut self,
        index: usize,
        address: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        self.0[index].address = address.into();
        Ok(())
    }

    /// Replace the amount of the recipient at `index`
    pub fn set_amount(
        &mut self,
        index: usize,
        amount: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        self.0[index].amount = amount.into();
        Ok(())
    }

    /// Recipient at `index`
    pub fn get(&self, index: usize) -> Option<&Recipient> {
        self.0.get(index)
    }

    /// Number of recipients (always at least one)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in order
    pub fn iter(&self) -> impl Iterator<Item = &Recipient> {
        self.0.iter()
    }

    /// Borrow the entries as a slice, e.g. for batch building
    pub fn as_slice(&self) -> &[Recipient] {
        &self.0
    }

    /// Sum of all amounts in base units
    ///
    /// Unparseable entries count as zero and digits beyond the exponent are
    /// truncated, so this is exactly what a batch would transfer once every
    /// entry is valid.
    pub fn total(&self, exponent: Exponent) -> BaseAmount {
        self.0
            .iter()
            .map(|r| to_base_lenient(&r.amount, exponent))
            .sum()
    }

    /// [`total`](Self::total) rendered in display units
    pub fn total_display(&self, exponent: Exponent) -> String {
        from_base(&self.total(exponent), exponent)
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.0.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(())
    }
}

impl Default for Recipients {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for Recipients {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Recipient>::deserialize(deserializer).map(Self::from_entries)
    }
}
