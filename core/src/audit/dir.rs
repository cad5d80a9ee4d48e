use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::Path;

pub fn ensure_audit_dir(path: impl AsRef<Path>) -> CoreResult<()> {
    let path = path.as_ref();
    if path.exists() && !path.is_dir() {
        return Err(CoreError::InvalidInput(format!(
            "audit dir {} exists and is not a directory",
            path.display()
        )));
    }
    fs::create_dir_all(path)?;
    tracing::debug!(audit_dir = %path.display(), "audit dir ready");
    Ok(())
}
