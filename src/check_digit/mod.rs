mod mod10_recursive;

pub use crate::check_digit::mod10_recursive::{compute_check_digit, verify, Mod10Recursive};

/// A check digit validator over a candidate whose last character is the check digit.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Split a candidate into its payload and trailing check digit.
fn split_check_digit(candidate: &str) -> Option<(&str, u8)> {
    let last = candidate.chars().next_back()?;
    let digit = last.to_digit(10)?;
    Some((&candidate[..candidate.len() - last.len_utf8()], digit as u8))
}
