pub mod block;
pub mod checklist;
pub mod schema;
pub mod violation;

use crate::determinism::clock::Clock;
use crate::error::CoreResult;
use crate::run::report::Report;
use block::BlockExtractor;
use violation::{Severity, ViolationLog};

pub const SCHEMA_RULE: &str = "AEC.S2";
pub const MISSING: &str = "MISSING";

pub const BLOCK_CHECK_ID: &str = "VEC-001";
pub const BLOCK_SEVERITY: Severity = Severity::CriticalHard;
pub const BLOCK_EXPECTED: &str = "Markdown AD Block";

pub const HEADER_FIELD_CHECK_ID: &str = "VEC-002";
pub const HEADER_FIELD_SEVERITY: Severity = Severity::CriticalRetry;

pub fn parse_ad_block<'a>(
    extractor: &BlockExtractor,
    document: &'a str,
    log: &mut ViolationLog,
    clock: &dyn Clock,
) -> Option<&'a str> {
    let block = extractor.extract(document);
    if block.is_none() {
        log.record(
            clock,
            BLOCK_CHECK_ID,
            BLOCK_SEVERITY,
            SCHEMA_RULE,
            BLOCK_EXPECTED,
            MISSING,
        );
    }
    block
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub block_found: bool,
    pub report: Report,
}

pub fn validate_with(
    extractor: &BlockExtractor,
    document: &str,
    clock: &dyn Clock,
) -> Validation {
    let mut log = ViolationLog::new();
    let block = parse_ad_block(extractor, document, &mut log, clock);
    if let Some(block) = block {
        schema::validate_header(block, &mut log, clock);
    }
    Validation {
        block_found: block.is_some(),
        report: Report::from_log(log),
    }
}

// No filesystem access; the controller adds the audit-dir precondition.
pub fn validate_document(document: &str, clock: &dyn Clock) -> CoreResult<Report> {
    let extractor = BlockExtractor::new()?;
    Ok(validate_with(&extractor, document, clock).report)
}
