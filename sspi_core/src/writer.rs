use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::{debug, info};

use crate::error::{ImageError, Result};
use crate::format::Section;

/// Read an input section file fully into memory.
pub fn read_section(section: Section, path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ImageError::Read {
        section,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(%section, path = %path.display(), len = bytes.len(), "read section");
    Ok(bytes)
}

/// Write `bytes` to `path` all-or-nothing.
///
/// # Write sequence
/// 1. Resolve `path` through a symlink, so the link's target is replaced.
/// 2. Create a temporary file next to the target (same filesystem), carrying
///    the target's current permissions, or `0o666` less the umask when new.
/// 3. Write all bytes and fsync.
/// 4. Rename over the target.
///
/// If any step fails the temporary is dropped (and deleted) and the target
/// keeps whatever it held before, so a partial image is never observable.
pub fn write_image(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: io::Error| ImageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());
    debug!(path = %path.display(), target = %target.display(), "resolved output");

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_builder().tempfile_in(dir).map_err(write_err)?;
    if let Some(perms) = existing {
        temp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    temp.write_all(bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(&target).map_err(|e| write_err(e.error))?;

    info!(path = %target.display(), len = bytes.len(), "wrote image");
    Ok(())
}

/// Follow `path` when it is a symlink; a dangling link resolves to where it points.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).or_else(|_| {
            let link = fs::read_link(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Ok(base.join(link))
        }),
        _ => Ok(path.to_path_buf()),
    }
}

// Requested mode goes through open(2), so the umask still applies.
#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}
