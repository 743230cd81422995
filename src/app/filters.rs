//! Pure per-name decisions made during the walk. Nothing here touches the filesystem.

use crate::app::models::CopyRules;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Device names reserved on Windows, compared against the uppercased stem.
pub const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// True if `name` is a reserved device name once surrounding whitespace,
/// trailing dots/spaces and everything from the first dot on are removed.
pub fn is_reserved_name(name: &str) -> bool {
    let cleaned = name.trim().trim_end_matches(['.', ' ']);
    let stem = cleaned.split('.').next().unwrap_or(cleaned);
    let stem = stem.to_ascii_uppercase();
    RESERVED_DEVICE_NAMES.contains(&stem.as_str())
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether a subdirectory should be descended into.
pub fn keep_dir(name: &str, rules: &CopyRules) -> bool {
    !rules.ignore_folders.contains(name)
        && !is_hidden(name)
        && !is_reserved_name(name)
        && !name.starts_with(&rules.backup_prefix)
}

/// Extension allow-set match, or case-insensitive named-file match.
pub fn should_copy(file_name: &str, rules: &CopyRules) -> bool {
    let by_extension = Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| rules.extensions.contains(&ext));

    by_extension || rules.named_files.contains(&file_name.to_lowercase())
}

/// `foo.cpp` -> `foo.txt`. Only the last extension is replaced.
pub fn destination_name(file_name: &OsStr) -> OsString {
    let stem = Path::new(file_name).file_stem().unwrap_or(file_name);
    let mut renamed = stem.to_os_string();
    renamed.push(".txt");
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> CopyRules {
        CopyRules::defaults("myproj")
    }

    #[test]
    fn reserved_names_are_case_insensitive_and_extension_stripped() {
        for name in ["CON", "con", "Nul", "com1.txt", "LPT9.rs", "aux.tar.gz", "prn. . ", "  con  "] {
            assert!(is_reserved_name(name), "{name:?} should be reserved");
        }
    }

    #[test]
    fn near_misses_are_not_reserved() {
        for name in ["console", "COM0", "COM10", "lpt", "mycon", "main.rs", "", ".con"] {
            assert!(!is_reserved_name(name), "{name:?} should not be reserved");
        }
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let rules = rules();
        assert!(should_copy("main.rs", &rules));
        assert!(should_copy("kernel.cu", &rules));
        assert!(should_copy("foo.cpp", &rules));
        assert!(!should_copy("MAIN.RS", &rules));
        assert!(!should_copy("notes.md", &rules));
        assert!(!should_copy("rs", &rules));
    }

    #[test]
    fn named_files_match_any_case() {
        let rules = rules();
        assert!(should_copy("Cargo.toml", &rules));
        assert!(should_copy("cargo.TOML", &rules));
        assert!(should_copy("CMakeLists.txt", &rules));
        assert!(!should_copy("pyproject.toml", &rules));
    }

    #[test]
    fn keep_dir_applies_every_prune_rule() {
        let rules = rules();
        assert!(keep_dir("src", &rules));
        assert!(keep_dir("Build", &rules));
        assert!(!keep_dir("build", &rules));
        assert!(!keep_dir("target", &rules));
        assert!(!keep_dir(".git", &rules));
        assert!(!keep_dir("CON", &rules));
        assert!(!keep_dir("myproj-codeonly-06-01-24", &rules));
        assert!(keep_dir("otherproj-codeonly-06-01-24", &rules));
    }

    #[test]
    fn destination_name_replaces_last_extension() {
        assert_eq!(destination_name(OsStr::new("foo.cpp")), "foo.txt");
        assert_eq!(destination_name(OsStr::new("Cargo.toml")), "Cargo.txt");
        assert_eq!(destination_name(OsStr::new("CMakeLists.txt")), "CMakeLists.txt");
        assert_eq!(destination_name(OsStr::new("archive.tar.gz")), "archive.tar.txt");
        assert_eq!(destination_name(OsStr::new("Makefile")), "Makefile.txt");
    }
}
