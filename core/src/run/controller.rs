use crate::audit::dir::ensure_audit_dir;
use crate::config::ValidatorConfig;
use crate::determinism::clock::{Clock, SystemClock};
use crate::error::CoreResult;
use crate::run::report::Report;
use crate::validator::block::BlockExtractor;
use crate::validator::checklist::load_checklist;
use crate::validator::validate_with;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunState {
    START,
    EXTRACTED,
    EXTRACTION_FAILED,
    REPORTED,
}

pub struct RunController {
    pub config: ValidatorConfig,
    pub state: RunState,
    trail: Vec<RunState>,
    checklist_version: String,
    extractor: BlockExtractor,
    clock: Box<dyn Clock>,
}

impl RunController {
    pub fn new(config: ValidatorConfig) -> CoreResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: ValidatorConfig, clock: Box<dyn Clock>) -> CoreResult<Self> {
        let checklist = load_checklist()?;
        Ok(Self {
            config,
            state: RunState::START,
            trail: vec![RunState::START],
            checklist_version: checklist.checklist_version,
            extractor: BlockExtractor::new()?,
            clock,
        })
    }

    pub fn checklist_version(&self) -> &str {
        &self.checklist_version
    }

    pub fn trail(&self) -> &[RunState] {
        &self.trail
    }

    pub fn run(&mut self, document: &str) -> CoreResult<Report> {
        ensure_audit_dir(&self.config.audit_dir)?;

        self.state = RunState::START;
        self.trail = vec![RunState::START];
        tracing::info!(
            checklist = %self.checklist_version,
            compendium = %self.config.compendium_path.display(),
            bytes = document.len(),
            "validation started"
        );

        let validation = validate_with(&self.extractor, document, self.clock.as_ref());
        if validation.block_found {
            self.transition(RunState::EXTRACTED);
        } else {
            self.transition(RunState::EXTRACTION_FAILED);
        }

        let report = validation.report;
        self.transition(RunState::REPORTED);
        if report.is_pass() {
            tracing::info!("validation passed");
        } else {
            let violations = report.violations().len();
            tracing::warn!(violations, "validation failed");
        }
        Ok(report)
    }

    fn transition(&mut self, to: RunState) {
        tracing::debug!(from = ?self.state, to = ?to, "run state changed");
        self.state = to;
        self.trail.push(to);
    }
}
