use serde::{Deserialize, Serialize};

use crate::candidate_filter::{CandidateFilterConfig, CompiledCandidateFilter};
use crate::error::{ConfigError, ScanError, TransmitError};
use crate::esr_code::{EsrCode, FieldMap};
use crate::observability::labels::Labels;
use crate::observability::metrics::ScanMetrics;
use crate::parser::parse;
use crate::scans::ScanHistory;

/// Hands recognized codes to a paired device. Owns the whole send lifecycle.
pub trait Transmitter {
    fn send(&self, fields: &FieldMap) -> Result<(), TransmitError>;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScanSessionConfig {
    #[serde(default)]
    pub filter: CandidateFilterConfig,
    #[serde(default)]
    pub labels: Labels,
}

/// Recognition context of one scanning device: candidate filter, history and paired peer.
pub struct ScanSession<T> {
    filter: CompiledCandidateFilter,
    history: ScanHistory,
    transmitter: Option<T>,
    metrics: ScanMetrics,
}

impl<T: Transmitter> ScanSession<T> {
    pub fn new(filter: CompiledCandidateFilter) -> Self {
        Self::with_labels(filter, &Labels::default())
    }

    pub fn with_labels(filter: CompiledCandidateFilter, labels: &Labels) -> Self {
        Self {
            filter,
            history: ScanHistory::new(),
            transmitter: None,
            metrics: ScanMetrics::new(labels),
        }
    }

    pub fn from_config(config: &ScanSessionConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_labels(config.filter.build()?, &config.labels))
    }

    pub fn pair(&mut self, transmitter: T) {
        self.transmitter = Some(transmitter);
    }

    pub fn unpair(&mut self) -> Option<T> {
        self.transmitter.take()
    }

    pub fn is_paired(&self) -> bool {
        self.transmitter.is_some()
    }

    pub fn history(&self) -> &ScanHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ScanHistory {
        &mut self.history
    }

    /// Recognize the ESR code in a block of OCR text.
    ///
    /// The bottom-most candidate line is parsed and added to the history. When a device is
    /// paired the code is sent right away; a failed send leaves the code untransmitted but
    /// does not fail the scan.
    pub fn process_text(&mut self, text: &str) -> Result<&EsrCode, ScanError> {
        let candidates: Vec<&str> = self.filter.candidates(text).collect();
        self.metrics.candidates.increment(candidates.len() as u64);

        let Some(line) = candidates.last() else {
            self.metrics.no_candidate.increment(1);
            return Err(ScanError::NoCandidate);
        };

        let mut code = match parse(line) {
            Ok(code) => code,
            Err(err) => {
                self.metrics.record_parse_failure(&err);
                return Err(err.into());
            }
        };
        self.metrics.parse_success.increment(1);
        if !code.is_amount_valid() {
            self.metrics.amount_check_digit_invalid.increment(1);
        }
        if !code.is_reference_valid() {
            self.metrics.reference_check_digit_invalid.increment(1);
        }

        if let Some(transmitter) = &self.transmitter {
            transmit(transmitter, &self.metrics, &mut code);
        }
        Ok(self.history.add(code))
    }

    /// Send every code of the history that was not transmitted yet. Returns how many went out.
    pub fn retransmit_pending(&mut self) -> usize {
        let Some(transmitter) = &self.transmitter else {
            return 0;
        };
        let mut transmitted = 0;
        for code in self.history.iter_mut().filter(|code| !code.is_transmitted()) {
            if transmit(transmitter, &self.metrics, code) {
                transmitted += 1;
            }
        }
        transmitted
    }
}

fn transmit<T: Transmitter>(transmitter: &T, metrics: &ScanMetrics, code: &mut EsrCode) -> bool {
    match transmitter.send(&code.to_field_map()) {
        Ok(()) => {
            code.mark_transmitted();
            metrics.transmit_success.increment(1);
            true
        }
        Err(_) => {
            metrics.transmit_failure.increment(1);
            false
        }
    }
}
