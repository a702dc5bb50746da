//! Restricted authored-module writer
//!
//! Persists authored TOML source on behalf of the admin publish flow.
//! Writes are confined to the `countries/` subdirectory of a given
//! data dir and to `.toml` files; the write itself is temp-then-rename
//! with an advisory lock so a failed publish never leaves a
//! half-written module.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use fs2::FileExt;
use tracing::info;

use crate::error::{Error, Result};

/// Directory under the data dir that authored modules live in.
pub const COUNTRY_DIR: &str = "countries";

/// Extension authored modules must carry.
pub const COUNTRY_EXT: &str = "toml";

/// Validate a client-supplied relative path and resolve it under
/// `data_dir`.
///
/// Accepted paths have exactly the shape `countries/<name>.toml` with
/// a plain filename segment: no leading slash, no traversal, no nested
/// directories.
pub fn resolve_country_file(data_dir: &Path, rel_path: &str) -> Result<PathBuf> {
    let rel = Path::new(rel_path);

    if rel.is_absolute() {
        return Err(Error::invalid_path("path must be relative"));
    }

    let components: Vec<Component<'_>> = rel.components().collect();
    let [Component::Normal(dir), Component::Normal(file)] = components[..] else {
        return Err(Error::invalid_path(format!(
            "path must be {COUNTRY_DIR}/<name>.{COUNTRY_EXT}"
        )));
    };

    if dir != COUNTRY_DIR {
        return Err(Error::invalid_path(format!(
            "writes are restricted to the {COUNTRY_DIR}/ directory"
        )));
    }

    let file = Path::new(file);
    if file.extension().and_then(|e| e.to_str()) != Some(COUNTRY_EXT) {
        return Err(Error::invalid_path(format!(
            "only .{COUNTRY_EXT} files may be written"
        )));
    }

    Ok(data_dir.join(COUNTRY_DIR).join(file))
}

/// Write content atomically under an advisory lock.
///
/// Writers of the same destination serialize on a sidecar
/// `<name>.lock` file; each then writes a process-unique temp file and
/// renames it into place, so readers never observe partial content and
/// concurrent publishes settle on last-write-wins. The sidecar is left
/// behind between writes; it holds no content.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lock_path = path.with_file_name(format!("{file_name}.lock"));
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;
    lock_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let temp_path = path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()));
    let written = write_then_rename(&temp_path, path, content);

    FileExt::unlock(&lock_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    written?;

    info!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;

    fs::rename(temp_path, path).map_err(|e| Error::io(path, e))
}
