//! Shared utility functions for tree walking

use std::path::{Component, MAIN_SEPARATOR, Path};

/// Get the final segment of a path, as written.
///
/// A trailing `..` is kept literally; `.` and `/` have no final segment and
/// yield an empty name. The path is never resolved.
pub fn entry_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next_back() {
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}

/// Join a child name onto its parent's relative path.
/// The root's empty path contributes no prefix.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", parent, MAIN_SEPARATOR, name)
    }
}

/// Sort key for directory entries: directories first, then case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    not_dir: bool,
    lower_name: String,
}

impl SortKey {
    pub fn new(is_dir: bool, name: &str) -> Self {
        Self {
            not_dir: !is_dir,
            lower_name: name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_relative() {
        assert_eq!(join_relative("", "a"), "a");
        assert_eq!(
            join_relative("a", "b.txt"),
            format!("a{}b.txt", MAIN_SEPARATOR)
        );
        let nested = join_relative(&join_relative("a", "b"), "c");
        assert_eq!(nested.matches(MAIN_SEPARATOR).count(), 2);
        assert!(!nested.starts_with(MAIN_SEPARATOR));
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("proj/src")), "src");
        assert_eq!(entry_name(Path::new("file.txt")), "file.txt");
        assert_eq!(entry_name(Path::new("proj/.")), "proj");
        assert_eq!(entry_name(Path::new(".")), "");
        assert_eq!(entry_name(Path::new("/")), "");
        assert_eq!(entry_name(Path::new("..")), "..");
        assert_eq!(entry_name(Path::new("proj/..")), "..");
    }

    #[test]
    fn test_directories_sort_first() {
        let mut keys = vec![
            SortKey::new(false, "a.txt"),
            SortKey::new(true, "Zeta"),
            SortKey::new(true, "alpha"),
            SortKey::new(false, "B.txt"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                SortKey::new(true, "alpha"),
                SortKey::new(true, "Zeta"),
                SortKey::new(false, "a.txt"),
                SortKey::new(false, "B.txt"),
            ]
        );
    }

    #[test]
    fn test_case_only_difference_is_a_tie() {
        assert_eq!(SortKey::new(false, "README"), SortKey::new(false, "readme"));
    }
}
