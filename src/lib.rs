// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod candidate_filter;
mod check_digit;
mod error;
mod esr_code;
mod fields;
mod observability;
mod parser;
mod scans;
mod session;

// This is the public API of the ESR core library
pub use candidate_filter::{
    select_candidate, CandidateFilterConfig, CompiledCandidateFilter, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH, DEFAULT_TYPE_CODES,
};
pub use check_digit::{compute_check_digit, verify, Mod10Recursive, Validator};
pub use error::{ChecksumError, ConfigError, ParseError, ScanError, TransmitError};
pub use esr_code::{EsrCode, FieldMap};
pub use fields::{AccountNumber, Amount, ReferenceNumber};
pub use observability::labels::Labels;
pub use parser::{is_valid_type_code, normalize, parse, PRIMARY_DELIMITER, SECONDARY_DELIMITER};
pub use scans::ScanHistory;
pub use session::{ScanSession, ScanSessionConfig, Transmitter};
