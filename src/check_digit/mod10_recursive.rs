use crate::check_digit::{split_check_digit, Validator};
use crate::error::ChecksumError;

/// Modulo 10, recursive. The check digit scheme of Swiss inpayment slips (ESR/BVR).
pub struct Mod10Recursive;

const CARRY_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Compute the check digit over `digits`, read left to right.
///
/// Every character must be an ASCII digit, otherwise [ChecksumError::NotADigit] is returned
/// with the offending character and its position. The empty input has check digit 0.
pub fn compute_check_digit(digits: &str) -> Result<u8, ChecksumError> {
    let mut carry = 0u8;
    for (position, c) in digits.chars().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or(ChecksumError::NotADigit { position, found: c })?;
        carry = CARRY_TABLE[((carry as u32 + digit) % 10) as usize];
    }
    Ok((10 - carry) % 10)
}

/// Whether `check_digit` matches the check digit of `payload`. Malformed payloads are invalid.
pub fn verify(payload: &str, check_digit: u8) -> bool {
    compute_check_digit(payload).is_ok_and(|expected| expected == check_digit)
}

impl Validator for Mod10Recursive {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match split_check_digit(candidate) {
            Some((payload, check_digit)) => verify(payload, check_digit),
            None => false,
        }
    }
}
