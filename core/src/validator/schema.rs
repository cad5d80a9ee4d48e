use crate::determinism::clock::Clock;
use crate::validator::violation::ViolationLog;
use crate::validator::{HEADER_FIELD_CHECK_ID, HEADER_FIELD_SEVERITY, MISSING, SCHEMA_RULE};

// Reporting order.
pub const REQUIRED_HEADER_FIELDS: [&str; 4] =
    ["GOAL", "SCOPE", "WORKING SET IMPACT", "POLICY-B IMPACT"];

pub fn missing_header_fields(ad_block: &str) -> Vec<&'static str> {
    REQUIRED_HEADER_FIELDS
        .iter()
        .copied()
        .filter(|field| !ad_block.contains(field))
        .collect()
}

pub fn validate_header(ad_block: &str, log: &mut ViolationLog, clock: &dyn Clock) {
    for field in missing_header_fields(ad_block) {
        log.record(
            clock,
            HEADER_FIELD_CHECK_ID,
            HEADER_FIELD_SEVERITY,
            SCHEMA_RULE,
            &format!("Header Field: {}", field),
            MISSING,
        );
    }
}
