use std::fmt;

use crate::check_digit::verify;

const GROUP_SIZE: usize = 5;

/// The reference number of an ESR code. The last digit is the reference's own check digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceNumber {
    digits: String,
}

impl ReferenceNumber {
    pub fn new(digits: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Everything but the trailing check digit.
    pub fn payload(&self) -> &str {
        match self.digits.char_indices().next_back() {
            Some((last, _)) => &self.digits[..last],
            None => "",
        }
    }

    pub fn check_digit(&self) -> Option<u8> {
        self.digits
            .chars()
            .next_back()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    /// Whether `check_digit` is the check digit of the payload.
    pub fn is_check_digit_valid(&self, check_digit: u8) -> bool {
        verify(self.payload(), check_digit)
    }

    /// Blocks of five digits counted from the end, e.g. `12 00000 00000 23447 89432 16899`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.digits.chars().count();
        for (i, c) in self.digits.chars().enumerate() {
            if i > 0 && (len - i) % GROUP_SIZE == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ReferenceNumber;

    #[test]
    fn render_groups_from_the_end() {
        let test_cases = vec![
            (
                "120000000000234478943216899",
                "12 00000 00000 23447 89432 16899",
            ),
            (
                "210000000003139471430009017",
                "21 00000 00003 13947 14300 09017",
            ),
            ("1234567890", "12345 67890"),
            ("123456", "1 23456"),
            ("12345", "12345"),
            ("12", "12"),
            ("", ""),
        ];
        for (digits, expected) in test_cases {
            assert_eq!(ReferenceNumber::new(digits).render(), expected);
        }
    }

    #[test]
    fn split_check_digit() {
        let reference = ReferenceNumber::new("120000000000234478943216899");
        assert_eq!(reference.len(), 27);
        assert_eq!(reference.payload(), "12000000000023447894321689");
        assert_eq!(reference.check_digit(), Some(9));
        assert!(reference.is_check_digit_valid(9));
        assert!(!reference.is_check_digit_valid(8));

        let empty = ReferenceNumber::new("");
        assert!(empty.is_empty());
        assert_eq!(empty.payload(), "");
        assert_eq!(empty.check_digit(), None);
    }
}
