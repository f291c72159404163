use ahash::AHashSet;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::parser::{normalize, PRIMARY_DELIMITER};

/// Slip type codes for CHF inpayment slips (ESR Handbuch PostFinance).
pub const DEFAULT_TYPE_CODES: [&str; 5] = ["01", "03", "04", "11", "14"];

pub const DEFAULT_MIN_LENGTH: usize = 32;
pub const DEFAULT_MAX_LENGTH: usize = 53;

lazy_static! {
    static ref DEFAULT_FILTER: CompiledCandidateFilter = CompiledCandidateFilter::default();
}

/// Which lines of OCR output are worth a parse attempt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CandidateFilterConfig {
    /// Inclusive bounds on the whitespace-free line length.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_type_codes")]
    pub type_codes: Vec<String>,
    #[serde(default = "default_require_type_code")]
    pub require_type_code: bool,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_type_codes() -> Vec<String> {
    DEFAULT_TYPE_CODES.iter().map(|code| code.to_string()).collect()
}

fn default_require_type_code() -> bool {
    true
}

impl Default for CandidateFilterConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            type_codes: default_type_codes(),
            require_type_code: true,
        }
    }
}

impl CandidateFilterConfig {
    pub fn length_bounds(&self, min_length: usize, max_length: usize) -> Self {
        self.mutate_clone(|x| {
            x.min_length = min_length;
            x.max_length = max_length;
        })
    }

    pub fn type_codes(&self, type_codes: Vec<String>) -> Self {
        self.mutate_clone(|x| x.type_codes = type_codes)
    }

    pub fn require_type_code(&self, require_type_code: bool) -> Self {
        self.mutate_clone(|x| x.require_type_code = require_type_code)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::InvalidLengthBounds {
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }
        if let Some(code) = self
            .type_codes
            .iter()
            .find(|code| code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ConfigError::InvalidTypeCode(code.clone()));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<CompiledCandidateFilter, ConfigError> {
        self.validate()?;
        Ok(CompiledCandidateFilter {
            min_length: self.min_length,
            max_length: self.max_length,
            type_codes: self.type_codes.iter().cloned().collect(),
            require_type_code: self.require_type_code,
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[derive(Debug, Clone)]
pub struct CompiledCandidateFilter {
    min_length: usize,
    max_length: usize,
    type_codes: AHashSet<String>,
    require_type_code: bool,
}

impl Default for CompiledCandidateFilter {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            type_codes: default_type_codes().into_iter().collect(),
            require_type_code: true,
        }
    }
}

impl CompiledCandidateFilter {
    pub fn is_valid_type_code(&self, line: &str) -> bool {
        line.trim_start()
            .get(..2)
            .is_some_and(|prefix| self.type_codes.contains(prefix))
    }

    pub fn is_candidate(&self, line: &str) -> bool {
        if !line.contains(PRIMARY_DELIMITER) {
            return false;
        }
        let length = normalize(line).chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }
        !self.require_type_code || self.is_valid_type_code(line)
    }

    /// All candidate lines of `text`, top to bottom.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.lines().filter(move |line| self.is_candidate(line))
    }

    /// The code line is printed at the bottom of a slip, so the last candidate wins.
    pub fn select_candidate<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.lines().filter(|line| self.is_candidate(line)).last()
    }
}

/// [CompiledCandidateFilter::select_candidate] with the default configuration.
pub fn select_candidate(text: &str) -> Option<&str> {
    DEFAULT_FILTER.select_candidate(text)
}

#[cfg(test)]
mod test {
    use super::*;

    const OCR_TEXT: &str = "Einzahlung fur / Versement pour\n\
        Muster AG 8000 Zurich\n\
        Konto / Compte 01-162-8\n\
        042>210000000003139471430009017+ 010001456>\n\
        0100003949753>120000000000234478943216899+ 010001628>\n\
        >>";

    #[test]
    fn select_last_candidate() {
        assert_eq!(
            select_candidate(OCR_TEXT),
            Some("0100003949753>120000000000234478943216899+ 010001628>")
        );
        let filter = CompiledCandidateFilter::default();
        assert_eq!(filter.candidates(OCR_TEXT).count(), 2);
    }

    #[test]
    fn no_candidate() {
        assert_eq!(select_candidate(""), None);
        assert_eq!(select_candidate("Konto / Compte 01-162-8"), None);
        // right length but no delimiter
        assert_eq!(
            select_candidate("010000394975312000000000023447894321689901000162"),
            None
        );
        // unknown type code
        assert_eq!(
            select_candidate("2100003949753>120000000000234478943216899+ 010001628>"),
            None
        );
    }

    #[test]
    fn length_bounds_ignore_whitespace() {
        let filter = CompiledCandidateFilter::default();
        // 32 characters without spaces
        let line = "01>12345678901234567890+ 1234567>";
        assert_eq!(normalize(line).len(), 32);
        assert!(filter.is_candidate(line));
        assert!(!filter.is_candidate("01>1234567890123456789+123456>"));
        let too_long = format!("01>{}", "1".repeat(51));
        assert!(!filter.is_candidate(&too_long));
        let longest = format!("01>{}", "1".repeat(50));
        assert!(filter.is_candidate(&longest));
    }

    #[test]
    fn custom_config() {
        let filter = CandidateFilterConfig::default()
            .length_bounds(36, 53)
            .type_codes(vec!["21".to_string()])
            .build()
            .unwrap();
        assert!(filter.is_candidate("2100003949753>120000000000234478943216899+ 010001628>"));
        assert!(!filter.is_candidate("0100003949753>120000000000234478943216899+ 010001628>"));
        assert!(!filter.is_candidate("21>12345678901234567890+ 12345678>"));

        let permissive = CandidateFilterConfig::default()
            .require_type_code(false)
            .build()
            .unwrap();
        assert!(permissive.is_candidate("2100003949753>120000000000234478943216899+ 010001628>"));
    }

    #[test]
    fn invalid_config() {
        assert_eq!(
            CandidateFilterConfig::default().length_bounds(54, 53).validate(),
            Err(ConfigError::InvalidLengthBounds {
                min_length: 54,
                max_length: 53
            })
        );
        assert_eq!(
            CandidateFilterConfig::default()
                .type_codes(vec!["1".to_string()])
                .build()
                .unwrap_err(),
            ConfigError::InvalidTypeCode("1".to_string())
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: CandidateFilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CandidateFilterConfig::default());

        let config: CandidateFilterConfig =
            serde_json::from_str(r#"{"min_length": 36, "type_codes": ["01"]}"#).unwrap();
        assert_eq!(config.min_length, 36);
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.type_codes, vec!["01".to_string()]);
        assert!(config.require_type_code);

        let serialized = serde_json::to_string(&config).unwrap();
        let round_trip: CandidateFilterConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(round_trip, config);
    }
}
