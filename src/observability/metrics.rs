use metrics::{counter, Counter};

use crate::error::ParseError;
use crate::observability::labels::Labels;

const REASON: &str = "reason";
const FIELD: &str = "field";

/// Counters describing how recognition attempts turn out.
pub struct ScanMetrics {
    /// Candidate lines found in OCR text, summed over scans.
    pub candidates: Counter,
    pub no_candidate: Counter,
    pub parse_success: Counter,
    pub amount_check_digit_invalid: Counter,
    pub reference_check_digit_invalid: Counter,
    pub transmit_success: Counter,
    pub transmit_failure: Counter,

    labels: Labels,
}

impl ScanMetrics {
    pub fn new(labels: &Labels) -> Self {
        ScanMetrics {
            candidates: counter!("esr.candidates", labels.clone()),
            no_candidate: counter!("esr.scan.no_candidate", labels.clone()),
            parse_success: counter!("esr.parse.success", labels.clone()),
            amount_check_digit_invalid: counter!(
                "esr.check_digit.invalid",
                labels.clone_with_labels(&[(FIELD, "amount")])
            ),
            reference_check_digit_invalid: counter!(
                "esr.check_digit.invalid",
                labels.clone_with_labels(&[(FIELD, "reference")])
            ),
            transmit_success: counter!("esr.transmit.success", labels.clone()),
            transmit_failure: counter!("esr.transmit.failure", labels.clone()),
            labels: labels.clone(),
        }
    }

    pub fn record_parse_failure(&self, error: &ParseError) {
        counter!(
            "esr.parse.failure",
            self.labels.clone_with_labels(&[(REASON, error.kind())])
        )
        .increment(1);
    }
}
