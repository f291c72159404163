use std::fmt;

use crate::check_digit::{Mod10Recursive, Validator};

/// ESR participant number, the creditor account an inpayment is credited to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumber {
    number: String,
}

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// The last digit of a participant number checks the digits before it.
    pub fn is_check_digit_valid(&self) -> bool {
        Mod10Recursive.is_valid_match(&self.number)
    }

    /// `XX-center-Y`, with the leading zeros of the center removed: `010001628` is `01-162-8`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.number.chars().collect();
        if chars.len() < 3 {
            return f.write_str(&self.number);
        }
        let prefix: String = chars[..2].iter().collect();
        let center: String = chars[2..chars.len() - 1].iter().collect();
        let suffix = chars[chars.len() - 1];
        write!(f, "{prefix}-{}-{suffix}", center.trim_start_matches('0'))
    }
}

#[cfg(test)]
mod test {
    use super::AccountNumber;

    #[test]
    fn render_strips_center_zeros_only() {
        let test_cases = vec![
            ("010001628", "01-162-8"),
            ("010001456", "01-145-6"),
            ("300123450", "30-12345-0"),
            // ten characters, the center is seven long
            ("0100001620", "01-162-0"),
            ("0000000000", "00--0"),
            ("01x", "01--x"),
            ("01", "01"),
        ];
        for (number, expected) in test_cases {
            assert_eq!(AccountNumber::new(number).render(), expected);
        }
    }

    #[test]
    fn participant_check_digit() {
        assert!(AccountNumber::new("010001628").is_check_digit_valid());
        assert!(!AccountNumber::new("010001627").is_check_digit_valid());
        assert!(!AccountNumber::new("+01000162").is_check_digit_valid());
    }
}
