use chrono::NaiveDate;
use std::collections::HashSet;

/// Extensions copied when no preset or flag adds more. Matched case-sensitively.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".cpp", ".cc", ".cxx", ".c", ".h", ".hpp", ".hh", ".hxx", ".cl", ".cu", ".rs",
];

/// Exact file names always copied, matched case-insensitively.
pub const DEFAULT_FILES: &[&str] = &["Cargo.toml", "Cargo.lock", "CMakeLists.txt"];

pub const DEFAULT_IGNORE_FOLDERS: &[&str] = &["build", "target"];

/// Marker between the project name and the date in output folder names.
pub const OUTPUT_MARKER: &str = "-codeonly-";

/// Prefix shared by every output folder of `project_name`, whatever the date.
pub fn backup_prefix(project_name: &str) -> String {
    format!("{}{}", project_name, OUTPUT_MARKER)
}

/// `{project}-codeonly-{MM-DD-YY}`
pub fn output_dir_name(project_name: &str, date: NaiveDate) -> String {
    format!("{}{}", backup_prefix(project_name), date.format("%m-%d-%y"))
}

/// The rule set for a single run. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CopyRules {
    pub extensions: HashSet<String>,
    /// Stored lowercased so lookups are case-insensitive.
    pub named_files: HashSet<String>,
    pub ignore_folders: HashSet<String>,
    pub backup_prefix: String,
}

impl CopyRules {
    pub fn new<E, F, I>(extensions: E, named_files: F, ignore_folders: I, project_name: &str) -> Self
    where
        E: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
        I: IntoIterator<Item = String>,
    {
        Self {
            extensions: extensions.into_iter().collect(),
            named_files: named_files.into_iter().map(|f| f.to_lowercase()).collect(),
            ignore_folders: ignore_folders.into_iter().collect(),
            backup_prefix: backup_prefix(project_name),
        }
    }

    /// Built-in rules with nothing added.
    pub fn defaults(project_name: &str) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self::new(
            owned(DEFAULT_EXTENSIONS),
            owned(DEFAULT_FILES),
            owned(DEFAULT_IGNORE_FOLDERS),
            project_name,
        )
    }
}

/// Counters reported once the walk finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopySummary {
    pub dirs_visited: usize,
    pub dirs_pruned: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_uses_month_day_two_digit_year() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(output_dir_name("myproj", date), "myproj-codeonly-06-01-24");
    }

    #[test]
    fn defaults_lowercase_named_files() {
        let rules = CopyRules::defaults("myproj");
        assert!(rules.named_files.contains("cargo.toml"));
        assert!(rules.named_files.contains("cmakelists.txt"));
        assert!(!rules.named_files.contains("Cargo.toml"));
        assert!(rules.extensions.contains(".rs"));
        assert_eq!(rules.backup_prefix, "myproj-codeonly-");
    }
}
