//! Byte copy plus timestamp and permission preservation.

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;

/// Copies `src` over `dest` (overwriting), then carries over times and permissions.
/// Symlinks in `src` are followed.
pub fn copy_with_metadata(src: &Path, dest: &Path) -> Result<u64> {
    let bytes = fs::copy(src, dest)
        .with_context(|| format!("Copy failed {} -> {}", src.display(), dest.display()))?;
    let meta = fs::metadata(src).with_context(|| format!("stat {}", src.display()))?;
    preserve_metadata(dest, &meta)?;
    Ok(bytes)
}

/// Times go first: a read-only destination may refuse them afterwards.
pub fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) -> Result<()> {
    let atime = FileTime::from_last_access_time(src_meta);
    let mtime = FileTime::from_last_modification_time(src_meta);
    set_file_times(dest, atime, mtime)
        .with_context(|| format!("Failed to set times on {}", dest.display()))?;
    log::trace!("set atime/mtime on {}", dest.display());

    fs::set_permissions(dest, src_meta.permissions())
        .with_context(|| format!("Failed to set permissions on {}", dest.display()))?;
    Ok(())
}
