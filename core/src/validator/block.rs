use crate::error::{CoreError, CoreResult};
use regex::Regex;

pub const OPENING_MARKER: &str = "AD-HEADER";
pub const CLOSING_MARKER: &str = "AD-END";

// Lazy body: the block ends at the first AD-END that is followed by the closing fence.
const AD_BLOCK_PATTERN: &str = r"(?s)```markdown\n(AD-HEADER.*?AD-END)\n```";

#[derive(Debug, Clone)]
pub struct BlockExtractor {
    pattern: Regex,
}

impl BlockExtractor {
    pub fn new() -> CoreResult<Self> {
        let pattern = Regex::new(AD_BLOCK_PATTERN)
            .map_err(|e| CoreError::Pattern(format!("AD block pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    pub fn extract<'a>(&self, document: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(document)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}
