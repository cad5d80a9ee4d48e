use crate::error::CoreResult;
use crate::validator::violation::{Violation, ViolationLog};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub const EXIT_PASS: i32 = 0;
pub const EXIT_FAIL: i32 = 1;

/// Terminal outcome of one run. Fail always carries at least one violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Pass,
    Fail(Vec<Violation>),
}

impl Report {
    pub fn from_log(log: ViolationLog) -> Self {
        if log.is_empty() {
            Report::Pass
        } else {
            Report::Fail(log.into_entries())
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Report::Pass)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_pass() {
            EXIT_PASS
        } else {
            EXIT_FAIL
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Report::Pass => &[],
            Report::Fail(v) => v.as_slice(),
        }
    }

    /// 2-space indented JSON: an array of violations, or {"status": "PASS"}.
    pub fn to_pretty_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Report::Pass => {
                let mut m = serializer.serialize_map(Some(1))?;
                m.serialize_entry("status", "PASS")?;
                m.end()
            }
            Report::Fail(violations) => violations.serialize(serializer),
        }
    }
}
