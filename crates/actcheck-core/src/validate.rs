//! # Structural Validation
//!
//! Decodes one GitHub Actions file as a YAML document and checks that the
//! required top-level fields of its [`StructureRule`] are present.
//!
//! ## Design
//!
//! Validation is total over its input: every read, decode, or shape problem
//! becomes a [`StructureError`] value, never a panic, and never an error
//! that outlives the one file being validated. Required fields are checked
//! in rule order and the first absent one ends the check — a file missing
//! both `on` and `jobs` is reported for `on`.
//!
//! ## The coerced trigger key
//!
//! YAML 1.1 decoders resolve the unquoted scalar `on` to a boolean, so
//! workflow files that were round-tripped through such tooling reach us
//! with a top-level `true:` key in place of `on:`. GitHub's own runner
//! accepts those files, and so does this validator: the trigger field is
//! satisfied by a boolean `true` key when no string `on` key exists. The
//! tolerance applies to that one field name and is reported back through
//! [`Validated::trigger_coerced`] so callers can surface a warning.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::StructureError;
use crate::rules::{StructureRule, TRIGGER_FIELD};

/// Details from a document that passed structural validation.
#[derive(Debug, Clone)]
pub struct Validated {
    /// The document's top-level keys, rendered for display, in document
    /// order.
    pub found_keys: Vec<String>,
    /// True when the trigger field was satisfied by a boolean `true` key
    /// rather than the literal string `on`.
    pub trigger_coerced: bool,
}

/// How a required field turned out to be represented in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPresence {
    /// A top-level string key equal to the field name exists.
    Present,
    /// The field is the trigger key and only the boolean-`true` coercion
    /// of it exists.
    CoercedTrigger,
    /// The field is not present in any accepted form.
    Absent,
}

/// Validate the file at `path` against `rule`.
///
/// Reads the file and delegates to [`validate_source`]. Read failures
/// (missing file, permission denied, invalid UTF-8) are folded into
/// [`StructureError::DocumentLoad`] exactly as decode failures are: an
/// unreadable file is an invalid file, not a crashed run.
///
/// # Errors
///
/// Returns the first [`StructureError`] the document exhibits.
pub fn validate_file(path: &Path, rule: &StructureRule) -> Result<Validated, StructureError> {
    let source =
        std::fs::read_to_string(path).map_err(|e| StructureError::DocumentLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    validate_source(&source, path, rule)
}

/// Validate YAML source text against `rule`.
///
/// `origin` is the path the source was read from; it appears in
/// diagnostics only.
///
/// # Errors
///
/// - [`StructureError::DocumentLoad`] when the source is not valid YAML;
///   the parser's own message is preserved.
/// - [`StructureError::NotAMapping`] when the document is null, a scalar,
///   a sequence, or an empty mapping.
/// - [`StructureError::MissingField`] for the first required field absent
///   from the mapping's top-level keys.
pub fn validate_source(
    source: &str,
    origin: &Path,
    rule: &StructureRule,
) -> Result<Validated, StructureError> {
    let document: Value =
        serde_yaml::from_str(source).map_err(|e| StructureError::DocumentLoad {
            path: origin.display().to_string(),
            reason: e.to_string(),
        })?;

    // A top-level tag carries no structural meaning here.
    let document = untag(document);

    let mapping = match document {
        Value::Mapping(mapping) if !mapping.is_empty() => mapping,
        _ => {
            return Err(StructureError::NotAMapping {
                path: origin.display().to_string(),
            })
        }
    };

    let found_keys: Vec<String> = mapping.iter().map(|(key, _)| render_key(key)).collect();
    let mut trigger_coerced = false;

    for &field in rule.required_fields {
        match field_presence(&mapping, field) {
            FieldPresence::Present => {}
            FieldPresence::CoercedTrigger => trigger_coerced = true,
            FieldPresence::Absent => {
                return Err(StructureError::MissingField {
                    field,
                    kind: rule.kind,
                    path: origin.display().to_string(),
                    expected: rule.required_fields,
                    found: found_keys,
                });
            }
        }
    }

    Ok(Validated {
        found_keys,
        trigger_coerced,
    })
}

/// Determine how `field` is represented among `mapping`'s top-level keys.
///
/// A string key equal to `field` is [`FieldPresence::Present`]. For the
/// trigger field only ([`TRIGGER_FIELD`]), a boolean `true` key counts as
/// [`FieldPresence::CoercedTrigger`] when no string form exists.
pub fn field_presence(mapping: &Mapping, field: &str) -> FieldPresence {
    let has_string_key = mapping
        .iter()
        .any(|(key, _)| matches!(key, Value::String(name) if name == field));
    if has_string_key {
        return FieldPresence::Present;
    }

    let has_true_key = mapping
        .iter()
        .any(|(key, _)| matches!(key, Value::Bool(true)));
    if field == TRIGGER_FIELD && has_true_key {
        return FieldPresence::CoercedTrigger;
    }

    FieldPresence::Absent
}

/// Strip a top-level YAML tag, keeping the tagged value.
fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => tagged.value,
        other => other,
    }
}

/// Render a top-level mapping key for diagnostics.
///
/// Keys are usually strings, but the YAML quirks this tool exists for mean
/// booleans (and occasionally numbers) show up too.
fn render_key(key: &Value) -> String {
    match key {
        Value::String(name) => name.clone(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::Null => "null".to_string(),
        other => format!("{other:?}"),
    }
}
