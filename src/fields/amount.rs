use std::fmt;

const MINOR_UNITS_PER_FRANC: u128 = 100;

/// A pre-printed slip amount, kept in minor currency units (Rappen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    minor_units: u128,
}

impl Amount {
    pub fn from_minor_units(minor_units: u128) -> Self {
        Self { minor_units }
    }

    pub fn minor_units(&self) -> u128 {
        self.minor_units
    }

    /// The amount in major currency units.
    pub fn value(&self) -> f64 {
        self.minor_units as f64 / MINOR_UNITS_PER_FRANC as f64
    }

    /// Two fraction digits, e.g. `3949.75`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.minor_units / MINOR_UNITS_PER_FRANC,
            self.minor_units % MINOR_UNITS_PER_FRANC
        )
    }
}

#[cfg(test)]
mod test {
    use super::Amount;

    #[test]
    fn render_two_fraction_digits() {
        let test_cases = vec![
            (394975, "3949.75"),
            (100, "1.00"),
            (5, "0.05"),
            (0, "0.00"),
            (1234567890, "12345678.90"),
        ];
        for (minor_units, expected) in test_cases {
            assert_eq!(Amount::from_minor_units(minor_units).render(), expected);
        }
    }

    #[test]
    fn value_in_major_units() {
        assert_eq!(Amount::from_minor_units(394975).value(), 3949.75);
        assert_eq!(Amount::from_minor_units(5).value(), 0.05);
    }
}
