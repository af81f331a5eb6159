//! # Validation Failure Types
//!
//! Every way a GitHub Actions file can fail structural validation, as a
//! `thiserror` enum. A failed validation is a value, not a crash: the
//! orchestrator converts the first failure into diagnostics and a non-zero
//! exit, and nothing here ever panics.
//!
//! Display strings double as the body of the user-facing diagnostic lines
//! (the CLI prefixes them with `❌`), so they keep the capitalized wording
//! CI logs have always shown for this tool.

use thiserror::Error;

use crate::rules::FileKind;

/// A structural validation failure for a single file.
///
/// The three variants mirror the failure taxonomy of the tool: the file
/// could not be read or decoded at all, the document decoded to something
/// other than a usable mapping, or a required top-level field is absent.
#[derive(Error, Debug)]
pub enum StructureError {
    /// The file could not be read, or its contents were not valid YAML.
    ///
    /// Read failures (missing file, permissions, invalid UTF-8) and decode
    /// failures are treated uniformly; `reason` carries the underlying
    /// I/O or parser message verbatim.
    #[error("Validation failed for {path}: {reason}")]
    DocumentLoad {
        /// Path to the file that failed to load.
        path: String,
        /// The underlying read or parse error text.
        reason: String,
    },

    /// The document decoded to null, to a non-mapping value (scalar or
    /// sequence), or to an empty mapping.
    #[error("Empty or invalid YAML file: {path}")]
    NotAMapping {
        /// Path to the offending file.
        path: String,
    },

    /// A required top-level field is absent from the document.
    ///
    /// Reported for the first absent field in rule order; later fields are
    /// not examined. `expected` and `found` feed the indented context lines
    /// printed under the diagnostic.
    #[error("Missing required field \"{field}\" in {kind}: {path}")]
    MissingField {
        /// The required field that was not found.
        field: &'static str,
        /// The kind of file being validated (workflow or action).
        kind: FileKind,
        /// Path to the offending file.
        path: String,
        /// The full ordered required-field list for this kind.
        expected: &'static [&'static str],
        /// The top-level keys actually present, rendered for display.
        found: Vec<String>,
    },
}
