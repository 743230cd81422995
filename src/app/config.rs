use crate::app::cli::Cli;
use crate::app::models::{CopyRules, DEFAULT_EXTENSIONS, DEFAULT_FILES, DEFAULT_IGNORE_FOLDERS};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

/// Additions a preset makes on top of the built-in rules.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub extensions: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    pub ignore_folders: Option<Vec<String>>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("code_only").join("presets.toml"))
}

/// Reads presets from `path`. A missing file means no presets.
pub fn load_presets_from(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read presets at {}", path.display()))?;
    parse_presets(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content)?;
    Ok(parsed.presets)
}

/// Defaults first, then preset entries, then CLI entries; duplicates dropped keeping order.
fn merge_lists(defaults: &[&str], preset: Option<Vec<String>>, cli: &[String]) -> Vec<String> {
    let mut combined: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
    combined.extend(preset.unwrap_or_default());
    combined.extend(cli.iter().cloned());

    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn normalize_extension(ext: String) -> String {
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Combines the built-in rules with a preset and the CLI flags.
///
/// An explicitly named preset must exist; the folder-name fallback is optional.
pub fn build_rules(
    cli: &Cli,
    project_name: &str,
    presets: &HashMap<String, PresetConfig>,
) -> Result<CopyRules> {
    let preset = match cli.preset.as_deref() {
        Some(name) => match presets.get(name) {
            Some(p) => p.clone(),
            None => bail!("Preset '{}' not found in presets.toml", name),
        },
        None => presets.get(project_name).cloned().unwrap_or_default(),
    };

    let extensions = merge_lists(DEFAULT_EXTENSIONS, preset.extensions, &cli.extensions)
        .into_iter()
        .map(normalize_extension);
    let files = merge_lists(DEFAULT_FILES, preset.files, &cli.files);
    let ignore_folders = merge_lists(DEFAULT_IGNORE_FOLDERS, preset.ignore_folders, &cli.ignore_folders);

    Ok(CopyRules::new(extensions, files, ignore_folders, project_name))
}

pub fn resolve_config(cli: &Cli, project_name: &str) -> Result<CopyRules> {
    let presets = load_presets_from(&presets_path()?)?;
    build_rules(cli, project_name, &presets)
}
