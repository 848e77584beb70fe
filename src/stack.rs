//! Stack discovery
//!
//! A stack is any directory below the root folder that directly contains a
//! `docker-compose.yaml`. Stacks are found fresh on every run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::COMPOSE_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    path: PathBuf,
}

impl Stack {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the directory, shown in the selection menu
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Path handed to the orchestration tool with `-f`
    pub fn compose_file(&self) -> PathBuf {
        self.path.join(COMPOSE_FILE)
    }
}

/// List the stacks under `root`, in lexical depth-first order.
///
/// An unreadable root is reported and yields no stacks.
pub fn discover(root: &Path) -> Vec<Stack> {
    match scan(root) {
        Ok(stacks) => stacks,
        Err(e) => {
            println!("{} Error listing stacks: {:#}", "⚠".yellow(), e);
            Vec::new()
        }
    }
}

fn scan(root: &Path) -> Result<Vec<Stack>> {
    fs::read_dir(root).context(format!("Failed to read stack folder {:?}", root))?;

    let mut stacks = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.path().join(COMPOSE_FILE).exists() {
            debug!("Found stack at {:?}", entry.path());
            stacks.push(Stack::new(entry.into_path()));
        }
    }

    Ok(stacks)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch_compose(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(COMPOSE_FILE), "services: {}\n").unwrap();
    }

    #[test]
    fn test_discover_returns_only_matching_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        touch_compose(&root.join("api"));
        touch_compose(&root.join("db"));
        touch_compose(&root.join("web"));
        fs::create_dir_all(root.join("notes")).unwrap();
        fs::write(root.join("notes/README.md"), "nothing here").unwrap();

        let stacks = discover(&root);

        assert_eq!(
            stacks,
            vec![
                Stack::new(root.join("api")),
                Stack::new(root.join("db")),
                Stack::new(root.join("web")),
            ]
        );
    }

    #[test]
    fn test_discover_never_returns_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        touch_compose(&root);
        touch_compose(&root.join("web"));

        let stacks = discover(&root);

        assert_eq!(stacks, vec![Stack::new(root.join("web"))]);
    }

    #[test]
    fn test_discover_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();

        let stacks = discover(&tmp.path().join("does-not-exist"));

        assert!(stacks.is_empty());
    }

    #[test]
    fn test_discover_root_that_is_a_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("stack");
        fs::write(&file, "").unwrap();

        assert!(discover(&file).is_empty());
    }

    #[test]
    fn test_discover_web_and_empty() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        touch_compose(&root.join("web"));
        fs::create_dir_all(root.join("empty")).unwrap();

        let stacks = discover(&root);

        assert_eq!(stacks.len(), 1);
        assert_eq!(stacks[0].path(), root.join("web"));
        assert_eq!(stacks[0].name(), "web");
    }

    #[test]
    fn test_discover_nested_stacks_parent_first() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        touch_compose(&root.join("group"));
        touch_compose(&root.join("group/inner"));
        touch_compose(&root.join("other/deep"));

        let names: Vec<String> = discover(&root).iter().map(Stack::name).collect();

        assert_eq!(names, vec!["group", "inner", "deep"]);
    }

    #[test]
    fn test_compose_yml_is_not_recognized() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        fs::create_dir_all(root.join("legacy")).unwrap();
        fs::write(root.join("legacy/docker-compose.yml"), "").unwrap();

        assert!(discover(&root).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_are_not_followed() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        let outside = tmp.path().join("outside");
        touch_compose(&outside);
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        assert!(discover(&root).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("stack");
        touch_compose(&root.join("locked"));
        touch_compose(&root.join("web"));

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits don't apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let stacks = discover(&root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(stacks, vec![Stack::new(root.join("web"))]);
    }

    #[test]
    fn test_compose_file_path() {
        let stack = Stack::new("stack/web");
        assert_eq!(stack.compose_file(), PathBuf::from("stack/web/docker-compose.yaml"));
    }
}
