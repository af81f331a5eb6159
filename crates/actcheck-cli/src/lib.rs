//! # actcheck-cli — The `actcheck` Command
//!
//! Discovers GitHub Actions workflow and action YAML files under a
//! repository root, validates each file's structure, and reports pass or
//! fail per file.
//!
//! ## Output Compatibility
//!
//! CI pipelines grep the line-oriented stdout of this tool, so the format
//! is load-bearing: one announce line and one verdict line per file, the
//! first failure printed with its context lines, and a summary line only
//! when every file passed.
//!
//! ```bash
//! actcheck
//! actcheck --root path/to/repo
//! actcheck -vv
//! ```

pub mod check;
