use crate::app::filters::{destination_name, is_hidden, is_reserved_name, keep_dir, should_copy};
use crate::app::metadata::copy_with_metadata;
use crate::app::models::{CopyRules, CopySummary};
use anyhow::{bail, Context, Result};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Deletes `dir` if it already exists and recreates it empty.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            bail!("Output path exists and is not a directory: {}", dir.display());
        }
        log::info!("Removing existing output directory: {}", dir.display());
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }

    log::info!("Creating clean code directory at: {}", dir.display());
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(())
}

pub struct Copier {
    root: PathBuf,
    rules: Arc<CopyRules>,
}

impl Copier {
    pub fn new(root: PathBuf, rules: CopyRules) -> Self {
        Self {
            root,
            rules: Arc::new(rules),
        }
    }

    /// Walks the source root and copies every selected file under `dest_root`.
    ///
    /// Rejected directories are cut in `filter_entry`, so their contents are never read.
    pub fn copy_into(&self, dest_root: &Path) -> Result<CopySummary> {
        log::info!("Scanning folder: {}", self.root.display());

        let pruned = Arc::new(AtomicUsize::new(0));
        let filter_rules = Arc::clone(&self.rules);
        let filter_pruned = Arc::clone(&pruned);

        // No ignore files and no built-in hidden filter: only the copy rules decide.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                let keep = keep_dir(&name, &filter_rules);
                if !keep {
                    log::info!("    Pruning subdirectory: {}", entry.path().display());
                    filter_pruned.fetch_add(1, Ordering::Relaxed);
                }
                keep
            })
            .build();

        let mut summary = CopySummary::default();
        for result in walker {
            let entry = result
                .with_context(|| format!("Failed walking {}", self.root.display()))?;

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                log::info!(" -> Entering directory: {}", entry.path().display());
                summary.dirs_visited += 1;
                continue;
            }

            self.process_file(&entry, dest_root, &mut summary)?;
        }

        summary.dirs_pruned = pruned.load(Ordering::Relaxed);
        Ok(summary)
    }

    fn process_file(&self, entry: &DirEntry, dest_root: &Path, summary: &mut CopySummary) -> Result<()> {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();

        if is_hidden(&name) || is_reserved_name(&name) {
            let shown = diff_paths(path, &self.root).unwrap_or_else(|| PathBuf::from(entry.file_name()));
            log::info!("    ❌ Skipping (reserved/hidden): {}", shown.display());
            summary.files_skipped += 1;
            return Ok(());
        }

        // Per-file and recoverable: the walk goes on.
        let Some(relative) = diff_paths(path, &self.root) else {
            log::warn!("    ❌ Skipping (relative path issue): {}", path.display());
            summary.files_skipped += 1;
            return Ok(());
        };

        if !should_copy(&name, &self.rules) {
            log::info!("    ❌ Skipping: {}", relative.display());
            summary.files_skipped += 1;
            return Ok(());
        }

        // Links are copied by target, but only when the target is a regular file.
        if entry.path_is_symlink() && !path.is_file() {
            log::warn!("    ❌ Skipping (link to non-file): {}", relative.display());
            summary.files_skipped += 1;
            return Ok(());
        }

        log::info!("    ✅ Should copy: {}", relative.display());
        let dest = dest_root.join(relative.with_file_name(destination_name(entry.file_name())));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        copy_with_metadata(path, &dest)?;
        summary.files_copied += 1;
        Ok(())
    }
}
