//! # Structural Rules — Required Fields per File Kind
//!
//! The single declarative table mapping each GitHub Actions file kind to
//! its ordered list of required top-level fields. Both validation paths
//! (workflow and action) read this table; neither duplicates the rule in
//! code.
//!
//! Fields are checked in table order and validation stops at the first
//! absent one, so the order here is the order failures are reported in.

/// The kind of GitHub Actions file being validated.
///
/// The `Display` form is the lowercase label used in diagnostics
/// (`"workflow"` / `"action"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A CI pipeline definition under `.github/workflows/`.
    Workflow,
    /// A reusable-step definition (`action.yml`) under `.github/actions/`.
    Action,
}

impl FileKind {
    /// Return both file kinds as a slice, in validation pass order.
    pub fn all() -> &'static [FileKind] {
        &[Self::Workflow, Self::Action]
    }

    /// The structural rule for this kind of file.
    pub const fn rule(self) -> &'static StructureRule {
        match self {
            Self::Workflow => &WORKFLOW_RULE,
            Self::Action => &ACTION_RULE,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Workflow => "workflow",
            Self::Action => "action",
        };
        f.write_str(s)
    }
}

/// The structural requirements for one kind of file: which top-level
/// fields must be present, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureRule {
    /// The kind of file this rule applies to.
    pub kind: FileKind,
    /// Ordered top-level field names that must all be present.
    pub required_fields: &'static [&'static str],
}

/// Workflow files must declare their triggers and their jobs.
pub const WORKFLOW_RULE: StructureRule = StructureRule {
    kind: FileKind::Workflow,
    required_fields: &[TRIGGER_FIELD, "jobs"],
};

/// Action definitions must carry a display name and an execution method.
pub const ACTION_RULE: StructureRule = StructureRule {
    kind: FileKind::Action,
    required_fields: &["name", "runs"],
};

/// The trigger-declaration key of a workflow file.
///
/// YAML 1.1 decoders resolve the unquoted scalar `on` to a boolean, so a
/// workflow round-tripped through such tooling carries a `true:` key where
/// `on:` was written. The validator tolerates that coercion for this field
/// name only — see [`crate::validate::field_presence`].
pub const TRIGGER_FIELD: &str = "on";
