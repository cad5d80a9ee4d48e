use crate::determinism::clock::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring in a severity tag that marks it hard-blocking.
pub const HARD_BLOCKING_MARKER: &str = "CRITICAL";

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViolationStatus {
    FAIL,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    #[serde(rename = "CRITICAL-HARD")]
    CriticalHard,
    #[serde(rename = "CRITICAL-RETRY")]
    CriticalRetry,
    #[serde(rename = "ADVISORY")]
    Advisory,
}

impl Severity {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Severity::CriticalHard => "CRITICAL-HARD",
            Severity::CriticalRetry => "CRITICAL-RETRY",
            Severity::Advisory => "ADVISORY",
        }
    }

    // 1 = hard-blocking, 2 = retryable; keyed on the tag text.
    pub fn authority_level(&self) -> u8 {
        if self.as_tag().contains(HARD_BLOCKING_MARKER) {
            1
        } else {
            2
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// Field order is the wire key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub status: ViolationStatus,
    pub authority_level: u8,
    pub severity: Severity,
    pub violation_id: String,
    pub rule_reference: String,
    pub expected_state: String,
    pub observed_state: String,
    pub timestamp: String,
}

#[derive(Debug, Default)]
pub struct ViolationLog {
    entries: Vec<Violation>,
}

impl ViolationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        clock: &dyn Clock,
        violation_id: &str,
        severity: Severity,
        rule_reference: &str,
        expected_state: &str,
        observed_state: &str,
    ) {
        let violation = Violation {
            status: ViolationStatus::FAIL,
            authority_level: severity.authority_level(),
            severity,
            violation_id: violation_id.to_string(),
            rule_reference: rule_reference.to_string(),
            expected_state: expected_state.to_string(),
            observed_state: observed_state.to_string(),
            timestamp: clock.now_timestamp(),
        };
        tracing::debug!(
            violation_id,
            severity = %severity,
            expected = expected_state,
            "violation recorded"
        );
        self.entries.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Violation] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Violation> {
        self.entries
    }
}
