// runsql-core/src/infrastructure/fs.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

/// Create the destination's parent directory (with intermediates) if it does
/// not exist yet. A destination in the current directory needs nothing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), InfrastructureError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created in the same directory as the target so the final
/// rename stays on one filesystem; the target is either fully written or not
/// written at all. An existing file at the target path is replaced.
pub fn atomic_write<C: AsRef<[u8]>>(path: &Path, content: C) -> Result<(), InfrastructureError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
