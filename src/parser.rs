use crate::candidate_filter::DEFAULT_TYPE_CODES;
use crate::error::ParseError;
use crate::esr_code::EsrCode;
use crate::fields::{AccountNumber, Amount, ReferenceNumber};

/// Separates the amount section from the reference number. Also terminates a full code line.
pub const PRIMARY_DELIMITER: char = '>';
/// Ends a variable length reference number.
pub const SECONDARY_DELIMITER: char = '+';

const TYPE_CODE_LENGTH: usize = 2;
const DEFAULT_REFERENCE_LENGTH: usize = 27;
const ACCOUNT_NUMBER_LENGTH: usize = 9;
const ACCOUNT_SECTION_TRAILER: usize = 1;

/// Remove all whitespace. OCR routinely inserts spurious spaces into code lines.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether the line starts with one of the known CHF slip type codes.
pub fn is_valid_type_code(line: &str) -> bool {
    line.trim_start()
        .get(..TYPE_CODE_LENGTH)
        .is_some_and(|prefix| DEFAULT_TYPE_CODES.contains(&prefix))
}

/// Decompose an ESR code line into its fields.
///
/// A code line reads `TTAAAAAAAAAAC>RRRRRRRRRRRRRRRRRRRRRRRRRRC+ PPPPPPPPP>`: a type code, the
/// optional amount in Rappen and its check digit, the reference number ending in its check
/// digit, and the participant number. Check digits are not verified here.
pub fn parse(raw: &str) -> Result<EsrCode, ParseError> {
    let normalized = normalize(raw);

    let delimiter = normalized
        .find(PRIMARY_DELIMITER)
        .ok_or(ParseError::DelimiterNotFound)?;

    let amount_check_digit = normalized[..delimiter]
        .chars()
        .next_back()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8);

    let amount = if delimiter > TYPE_CODE_LENGTH + 1 {
        Some(parse_amount(&normalized, delimiter)?)
    } else {
        None
    };

    let reference_start = delimiter + PRIMARY_DELIMITER.len_utf8();
    let reference_length = normalized[reference_start..]
        .find(SECONDARY_DELIMITER)
        .unwrap_or(DEFAULT_REFERENCE_LENGTH);
    let reference_end = reference_start + reference_length;
    if reference_end > normalized.len() {
        return Err(ParseError::ReferenceSectionTooShort {
            start: reference_start,
            length: reference_length,
            available: normalized.len() - reference_start,
        });
    }
    let reference_number = normalized
        .get(reference_start..reference_end)
        .map(ReferenceNumber::new)
        .ok_or(ParseError::InvalidReferenceCheckDigit)?;
    let reference_check_digit = reference_number
        .check_digit()
        .ok_or(ParseError::InvalidReferenceCheckDigit)?;

    let account_number = parse_account_number(&normalized)?;

    Ok(EsrCode {
        normalized,
        amount_check_digit,
        amount,
        reference_number,
        reference_check_digit,
        account_number,
        transmitted: false,
    })
}

/// The amount sits between the type code and the amount check digit.
fn parse_amount(normalized: &str, delimiter: usize) -> Result<Amount, ParseError> {
    let digits = normalized
        .get(TYPE_CODE_LENGTH..delimiter - 1)
        .ok_or(ParseError::InvalidAmount)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidAmount);
    }
    digits
        .parse::<u128>()
        .map(Amount::from_minor_units)
        .map_err(|_| ParseError::InvalidAmount)
}

/// The participant number is the 10th-from-last through the 2nd-from-last character. The final
/// character is the line terminator and never part of the number, even when OCR dropped the
/// real terminator.
fn parse_account_number(normalized: &str) -> Result<AccountNumber, ParseError> {
    let end = normalized
        .len()
        .checked_sub(ACCOUNT_SECTION_TRAILER)
        .ok_or(ParseError::AccountSectionTooShort)?;
    end.checked_sub(ACCOUNT_NUMBER_LENGTH)
        .and_then(|start| normalized.get(start..end))
        .map(AccountNumber::new)
        .ok_or(ParseError::AccountSectionTooShort)
}
