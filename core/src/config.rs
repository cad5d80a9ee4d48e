use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_AUDIT_DIR: &str = ".ORCH_AUDITLOG/validator";
pub const DEFAULT_COMPENDIUM_PATH: &str = "Governance/GOVERNANCE_COMPENDIUM.txt";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub audit_dir: PathBuf,
    pub compendium_path: PathBuf,
    /// Reserved for multi-attempt sessions; no validation decision reads it.
    pub retry_count: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            audit_dir: PathBuf::from(DEFAULT_AUDIT_DIR),
            compendium_path: PathBuf::from(DEFAULT_COMPENDIUM_PATH),
            retry_count: 0,
        }
    }
}

impl ValidatorConfig {
    pub fn with_audit_dir(audit_dir: impl AsRef<Path>) -> Self {
        Self {
            audit_dir: audit_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}
