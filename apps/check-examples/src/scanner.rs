//! Discovery of example manifest files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directories never descended into
const SKIP_DIRS: &[&str] = &[".git", "target", "node_modules"];

#[must_use]
pub fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml")
}

fn in_skip_dir(path: &Path) -> bool {
    path.components().any(|c| match c {
        std::path::Component::Normal(name) => SKIP_DIRS.iter().any(|s| name == *s),
        _ => false,
    })
}

/// Recursively finds all `*.yaml` / `*.yml` files under `dir`, sorted.
#[must_use]
pub fn find_example_files(dir: &Path, verbose: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .map(walkdir::DirEntry::into_path)
        .filter(|p| {
            let rel = p.strip_prefix(dir).unwrap_or(p);
            if in_skip_dir(rel) {
                if verbose && p.is_file() {
                    eprintln!("  Skipping: {}", p.display());
                }
                return false;
            }
            p.is_file() && is_yaml_file(p)
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nested_yaml_and_yml() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("acl/v1alpha1")).unwrap();
        fs::write(dir.path().join("acl/v1alpha1/role.yaml"), "").unwrap();
        fs::write(dir.path().join("subscription.yml"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let files = find_example_files(dir.path(), false);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("acl/v1alpha1/role.yaml"),
                PathBuf::from("subscription.yml"),
            ]
        );
    }

    #[test]
    fn test_skip_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/config.yaml"), "").unwrap();

        assert!(find_example_files(dir.path(), false).is_empty());
    }
}
