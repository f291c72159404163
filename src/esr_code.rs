use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::check_digit::verify;
use crate::fields::{AccountNumber, Amount, ReferenceNumber};
use crate::parser::PRIMARY_DELIMITER;

const INVALID_MARKER: &str = " ⚠︎";

/// A parsed ESR code line.
///
/// Check digits are not verified at parse time. A structurally well formed code with a wrong
/// check digit is still an [EsrCode]; [EsrCode::is_amount_valid] and
/// [EsrCode::is_reference_valid] recompute the checksums on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct EsrCode {
    pub(crate) normalized: String,
    pub(crate) amount_check_digit: Option<u8>,
    pub(crate) amount: Option<Amount>,
    pub(crate) reference_number: ReferenceNumber,
    pub(crate) reference_check_digit: u8,
    pub(crate) account_number: AccountNumber,
    pub(crate) transmitted: bool,
}

impl EsrCode {
    /// The code line with all whitespace removed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn amount_check_digit(&self) -> Option<u8> {
        self.amount_check_digit
    }

    pub fn amount(&self) -> Option<&Amount> {
        self.amount.as_ref()
    }

    pub fn reference_number(&self) -> &ReferenceNumber {
        &self.reference_number
    }

    pub fn reference_check_digit(&self) -> u8 {
        self.reference_check_digit
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// Whether the code was handed off to a paired device.
    pub fn is_transmitted(&self) -> bool {
        self.transmitted
    }

    pub fn mark_transmitted(&mut self) {
        self.transmitted = true;
    }

    /// Checks everything before the amount check digit, type code included.
    pub fn is_amount_valid(&self) -> bool {
        let (Some(position), Some(check_digit)) = (
            self.normalized.find(PRIMARY_DELIMITER),
            self.amount_check_digit,
        ) else {
            return false;
        };
        match position
            .checked_sub(1)
            .and_then(|end| self.normalized.get(..end))
        {
            Some(payload) => verify(payload, check_digit),
            None => false,
        }
    }

    pub fn is_reference_valid(&self) -> bool {
        self.reference_number
            .is_check_digit_valid(self.reference_check_digit)
    }

    pub fn is_account_valid(&self) -> bool {
        self.account_number.is_check_digit_valid()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Flat projection handed to the transport collaborator.
    pub fn to_field_map(&self) -> FieldMap {
        FieldMap {
            reference_number: self.reference_number.render(),
            amount: self.amount.map(|amount| amount.render()),
            account_number: self.account_number.render(),
            amount_correct: self.is_amount_valid(),
            reference_number_correct: self.is_reference_valid(),
        }
    }
}

impl fmt::Display for EsrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference number: {}", self.reference_number)?;
        if !self.is_reference_valid() {
            f.write_str(INVALID_MARKER)?;
        }
        write!(f, "\nAccount number: {}", self.account_number)?;
        if !self.is_account_valid() {
            f.write_str(INVALID_MARKER)?;
        }
        if let Some(amount) = &self.amount {
            write!(f, "\nAmount: CHF {amount}")?;
            if !self.is_amount_valid() {
                f.write_str(INVALID_MARKER)?;
            }
        }
        Ok(())
    }
}

/// Field values of an [EsrCode] in their rendered form, keyed by stable identifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMap {
    pub reference_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub account_number: String,
    pub amount_correct: bool,
    pub reference_number_correct: bool,
}

impl FieldMap {
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_json_map())
    }

    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "referenceNumber".to_string(),
            Value::String(self.reference_number.clone()),
        );
        if let Some(amount) = &self.amount {
            map.insert("amount".to_string(), Value::String(amount.clone()));
        }
        map.insert(
            "accountNumber".to_string(),
            Value::String(self.account_number.clone()),
        );
        map.insert("amountCorrect".to_string(), Value::Bool(self.amount_correct));
        map.insert(
            "referenceNumberCorrect".to_string(),
            Value::Bool(self.reference_number_correct),
        );
        map
    }
}
