use std::fs::{metadata, Metadata};
use std::path::Path;

/// Whether `path` names a regular file this process could execute.
///
/// On unix the owner execute bit must be set. Elsewhere any regular file counts.
/// A missing path is an ordinary `false`, never an error.
pub fn exists_and_executable(path: &Path) -> bool {
    match metadata(path) {
        Ok(metadata) => metadata.is_file() && is_executable(&metadata),
        Err(_) => false
    }
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    true
}
