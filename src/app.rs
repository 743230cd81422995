// Declare modules
pub mod cli;
pub mod config;
pub mod copier;
pub mod filters;
pub mod metadata;
pub mod models;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::env;
use std::fs;

use self::cli::Cli;
use self::config::resolve_config;
use self::copier::{prepare_output_dir, Copier};
use self::models::output_dir_name;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify Source Root & Name
    let source_root = match &args.source {
        Some(dir) => fs::canonicalize(dir)
            .with_context(|| format!("Failed to resolve source folder {}", dir.display()))?,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    log::info!("Current working directory: {}", source_root.display());

    let project_name = source_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("Source folder has no name to build the output folder from")?;

    // 3. Resolve Rules
    let rules = resolve_config(&args, &project_name)?;

    // 4. Fresh Output Folder
    let output_parent = args.output_parent.clone().unwrap_or_else(|| source_root.clone());
    let output_dir = output_parent.join(output_dir_name(&project_name, Local::now().date_naive()));
    prepare_output_dir(&output_dir)?;

    // 5. Walk & Copy
    let summary = Copier::new(source_root, rules).copy_into(&output_dir)?;

    log::info!(
        "Copied {} files ({} skipped) from {} directories, {} pruned",
        summary.files_copied,
        summary.files_skipped,
        summary.dirs_visited,
        summary.dirs_pruned
    );
    log::info!("✅ Code-only directory created successfully.");

    Ok(())
}
