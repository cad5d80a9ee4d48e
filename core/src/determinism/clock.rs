use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub trait Clock {
    fn now_timestamp(&self) -> String;
}

/// Wall clock, RFC3339 UTC with sub-second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp(&self) -> String {
        let now = OffsetDateTime::now_utc();
        match now.format(&Rfc3339) {
            Ok(ts) => ts,
            Err(e) => {
                // Rfc3339 only rejects years outside 0..=9999.
                let fallback = now.unix_timestamp_nanos().to_string();
                tracing::warn!(error = %e, %fallback, "rfc3339 format failed");
                fallback
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }
}

impl Clock for FixedClock {
    fn now_timestamp(&self) -> String {
        self.0.clone()
    }
}
