use crate::error::CoreResult;
use crate::validator::violation::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub checklist_version: String,
    pub timestamp_format: String,
    pub timestamp_note: String,
    pub checks: Vec<ChecklistCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCheck {
    pub check_id: String,
    pub severity: Severity,
    pub rule_reference: String,
    pub description: String,
}

impl Checklist {
    pub fn lookup(&self, check_id: &str) -> Option<&ChecklistCheck> {
        self.checks.iter().find(|c| c.check_id == check_id)
    }
}

pub fn load_checklist() -> CoreResult<Checklist> {
    // Shipped with the binary so the check contract and its version can be surfaced.
    let json = include_str!("ad_checklist_v1.json");
    Ok(serde_json::from_str(json)?)
}
