#![deny(missing_docs)]

//! # actcheck-core — Structural Validation of GitHub Actions YAML
//!
//! The validation library behind the `actcheck` CLI. It answers one
//! question per file: is this a YAML mapping carrying the top-level fields
//! its kind requires? Workflow files must declare `on` and `jobs`; custom
//! action definitions must declare `name` and `runs`.
//!
//! ## Design Principles
//!
//! 1. **One declarative rules table.** The required fields per file kind
//!    live in [`rules`] as `'static` data. The two validation paths differ
//!    only in which [`StructureRule`] they read.
//!
//! 2. **Failures are values.** Every read, decode, or shape problem becomes
//!    a [`StructureError`]; nothing panics and nothing aborts a run beyond
//!    the file it belongs to. Display strings are the diagnostic lines the
//!    CLI prints.
//!
//! 3. **The decoder quirk is policy, not accident.** YAML 1.1 tooling turns
//!    an unquoted `on` key into boolean `true`; the validator accepts that
//!    coercion for the trigger field only and says so through
//!    [`Validated::trigger_coerced`].
//!
//! 4. **No printing.** This crate never touches stdout; the CLI owns the
//!    output contract.

pub mod error;
pub mod rules;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::StructureError;
pub use rules::{FileKind, StructureRule, ACTION_RULE, TRIGGER_FIELD, WORKFLOW_RULE};
pub use validate::{field_presence, validate_file, validate_source, FieldPresence, Validated};
