//! # Discovery and Orchestration
//!
//! Finds the GitHub Actions files under a repository root and drives the
//! validation pass: workflow files (`*.yml`/`*.yaml` directly under
//! `.github/workflows`) against the workflow rule, action definitions
//! (`action.yml`/`action.yaml` anywhere under `.github/actions`) against
//! the action rule.
//!
//! The run halts at the first failing file — its diagnostics are printed
//! and the process exits 1. A directory that does not exist simply
//! contributes no targets; a run that finds nothing to check still passes.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;

use actcheck_core::{validate_file, FileKind, StructureError};

/// Directory scanned (non-recursively) for workflow files.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Directory scanned (recursively) for custom action definitions.
pub const ACTIONS_DIR: &str = ".github/actions";

/// Reserved filenames that mark a custom action definition.
const ACTION_FILE_NAMES: [&str; 2] = ["action.yml", "action.yaml"];

/// Arguments for the validation run.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Repository root containing `.github/workflows` and `.github/actions`.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Execute the validation pass.
///
/// Returns the process exit code: 0 when every discovered file passes (or
/// none exist), 1 at the first validation failure. A nonexistent root is
/// the one operational error and propagates as `Err` (exit 2 in `main`).
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let root = args.root.as_path();
    if !root.is_dir() {
        bail!("root directory not found: {}", root.display());
    }

    println!("🔍 Validating GitHub Actions syntax...");

    for &kind in FileKind::all() {
        let dir = under_root(root, conventional_dir(kind));
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), %kind, "directory absent; nothing to scan");
            continue;
        }
        for path in discover(kind, &dir) {
            if !check_file(&path, kind) {
                return Ok(1);
            }
        }
    }

    println!("✅ All GitHub Actions validations passed!");
    Ok(0)
}

/// Conventional location scanned for this kind of file, relative to the
/// repository root.
fn conventional_dir(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Workflow => WORKFLOWS_DIR,
        FileKind::Action => ACTIONS_DIR,
    }
}

/// Discover validation targets of `kind` under its conventional directory.
fn discover(kind: FileKind, dir: &Path) -> Vec<PathBuf> {
    match kind {
        FileKind::Workflow => workflow_files(dir),
        FileKind::Action => action_files(dir),
    }
}

/// Validate one file, print its verdict, and return whether it passed.
fn check_file(path: &Path, kind: FileKind) -> bool {
    println!("Validating {kind} structure: {}", path.display());

    match validate_file(path, kind.rule()) {
        Ok(validated) => {
            if validated.trigger_coerced {
                tracing::warn!(
                    path = %path.display(),
                    "trigger key decoded as boolean true; accepting it as \"on\""
                );
            }
            tracing::debug!(
                path = %path.display(),
                keys = ?validated.found_keys,
                "top-level keys"
            );
            println!("✅ {kind} structure is valid: {}", path.display());
            true
        }
        Err(err) => {
            println!("❌ {err}");
            if let StructureError::MissingField {
                expected, found, ..
            } = &err
            {
                println!("   Expected: {expected:?}");
                println!("   Found: {found:?}");
            }
            false
        }
    }
}

/// Join `sub` under `root` without introducing a leading `./` when the
/// root is the current directory, so the common CI invocation prints
/// repo-relative paths.
fn under_root(root: &Path, sub: &str) -> PathBuf {
    if root == Path::new(".") {
        PathBuf::from(sub)
    } else {
        root.join(sub)
    }
}

/// Workflow candidates: regular files with a YAML extension directly in
/// `dir`, sorted. The scan is deliberately non-recursive — GitHub only
/// reads workflows at the top level of the directory.
fn workflow_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to read workflow directory");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && has_yaml_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Action candidates: files with a reserved action filename anywhere under
/// `dir`, sorted.
fn action_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_action_files(dir, &mut files);
    files.sort();
    files
}

fn walk_action_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to read actions directory");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk_action_files(&path, acc);
        } else if is_action_file(&path) {
            acc.push(path);
        }
    }
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

fn is_action_file(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|name| name.to_str()),
        Some(name) if ACTION_FILE_NAMES.contains(&name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(root: &Path) -> CheckArgs {
        CheckArgs {
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn has_yaml_extension_accepts_both_spellings() {
        assert!(has_yaml_extension(Path::new("ci.yml")));
        assert!(has_yaml_extension(Path::new("ci.yaml")));
        assert!(!has_yaml_extension(Path::new("ci.yml.bak")));
        assert!(!has_yaml_extension(Path::new("README.md")));
        assert!(!has_yaml_extension(Path::new("yml")));
    }

    #[test]
    fn is_action_file_matches_reserved_names_only() {
        assert!(is_action_file(Path::new("foo/action.yml")));
        assert!(is_action_file(Path::new("foo/action.yaml")));
        assert!(!is_action_file(Path::new("foo/actions.yml")));
        assert!(!is_action_file(Path::new("foo/main.yml")));
    }

    #[test]
    fn each_kind_scans_its_conventional_directory() {
        assert_eq!(conventional_dir(FileKind::Workflow), ".github/workflows");
        assert_eq!(conventional_dir(FileKind::Action), ".github/actions");
    }

    #[test]
    fn under_root_keeps_current_dir_paths_relative() {
        assert_eq!(
            under_root(Path::new("."), WORKFLOWS_DIR),
            PathBuf::from(".github/workflows")
        );
        assert_eq!(
            under_root(Path::new("/repo"), WORKFLOWS_DIR),
            PathBuf::from("/repo/.github/workflows")
        );
    }

    #[test]
    fn workflow_scan_is_sorted_and_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.yml"), "on: push\njobs: {}\n").unwrap();
        std::fs::write(dir.path().join("a.yaml"), "on: push\njobs: {}\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not yaml").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("c.yml"), "on: push\njobs: {}\n").unwrap();
        // A directory with a YAML-looking name is not a workflow file.
        std::fs::create_dir_all(dir.path().join("dir.yml")).unwrap();

        let files = workflow_files(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.yaml", "b.yml"]);
    }

    #[test]
    fn workflow_scan_of_missing_dir_is_empty() {
        let files = workflow_files(Path::new("/no/such/dir/anywhere"));
        assert!(files.is_empty());
    }

    #[test]
    fn action_scan_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("b").join("nested");
        std::fs::create_dir_all(&deep).unwrap();
        std::fs::write(deep.join("action.yaml"), "name: B\nruns: {}\n").unwrap();
        let shallow = dir.path().join("a");
        std::fs::create_dir_all(&shallow).unwrap();
        std::fs::write(shallow.join("action.yml"), "name: A\nruns: {}\n").unwrap();
        std::fs::write(shallow.join("README.md"), "docs").unwrap();

        let files = action_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1], "results should be sorted: {files:?}");
        assert!(files[0].ends_with("a/action.yml"));
        assert!(files[1].ends_with("b/nested/action.yaml"));
    }

    #[test]
    fn run_check_passes_when_no_directories_exist() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 0, "absence of targets is not an error");
    }

    #[test]
    fn run_check_rejects_nonexistent_root() {
        let args = args_for(Path::new("/no/such/root/at/all"));
        assert!(run_check(&args).is_err());
    }

    #[test]
    fn run_check_passes_a_valid_repository() {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(WORKFLOWS_DIR);
        std::fs::create_dir_all(&workflows).unwrap();
        std::fs::write(
            workflows.join("ci.yml"),
            "on:\n  push: {}\njobs:\n  build:\n    steps: []\n",
        )
        .unwrap();
        let action_dir = dir.path().join(ACTIONS_DIR).join("setup");
        std::fs::create_dir_all(&action_dir).unwrap();
        std::fs::write(
            action_dir.join("action.yml"),
            "name: Setup\nruns:\n  using: node20\n  main: index.js\n",
        )
        .unwrap();

        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn run_check_fails_on_workflow_missing_trigger() {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(WORKFLOWS_DIR);
        std::fs::create_dir_all(&workflows).unwrap();
        std::fs::write(
            workflows.join("ci.yml"),
            "trigger: push\njobs:\n  build:\n    steps: []\n",
        )
        .unwrap();

        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn run_check_halts_on_first_failure_even_with_later_valid_files() {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(WORKFLOWS_DIR);
        std::fs::create_dir_all(&workflows).unwrap();
        // Sorts first and fails; the valid file after it must not change
        // the verdict.
        std::fs::write(workflows.join("a_broken.yml"), "name: CI\n").unwrap();
        std::fs::write(
            workflows.join("b_valid.yml"),
            "on: push\njobs:\n  build:\n    steps: []\n",
        )
        .unwrap();

        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn run_check_fails_on_action_missing_runs() {
        let dir = tempfile::tempdir().unwrap();
        let action_dir = dir.path().join(ACTIONS_DIR).join("foo");
        std::fs::create_dir_all(&action_dir).unwrap();
        std::fs::write(action_dir.join("action.yml"), "name: Foo\n").unwrap();

        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn run_check_accepts_coerced_trigger_key() {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(WORKFLOWS_DIR);
        std::fs::create_dir_all(&workflows).unwrap();
        std::fs::write(
            workflows.join("roundtripped.yml"),
            "true:\n  push: {}\njobs:\n  build:\n    steps: []\n",
        )
        .unwrap();

        let code = run_check(&args_for(dir.path())).unwrap();
        assert_eq!(code, 0);
    }
}
