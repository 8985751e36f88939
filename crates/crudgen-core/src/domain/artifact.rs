//! Run-level value objects: request kinds, the step plan, and the report.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

// ── RequestKind ───────────────────────────────────────────────────────────────

/// The five form-request flavors generated per model.
///
/// `Update` is special: its stub extends the model's `Store` request instead
/// of the base request type, so update validation rules default to reusing
/// store's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Store,
    Update,
    Delete,
    Index,
    Show,
}

impl RequestKind {
    /// Every kind, in emission order.
    pub const ALL: [Self; 5] = [
        Self::Store,
        Self::Update,
        Self::Delete,
        Self::Index,
        Self::Show,
    ];

    /// The kinds that also receive a request-test stub.
    pub const TESTED: [Self; 3] = [Self::Store, Self::Update, Self::Delete];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "Store",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Index => "Index",
            Self::Show => "Show",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ScaffoldPlan ──────────────────────────────────────────────────────────────

/// Which optional artifact steps to run.
///
/// The model, controller, documentation stub, and route reminder always run;
/// the four flags here correspond to the four interactive confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub requests: bool,
    pub resource: bool,
    pub factory: bool,
    pub tests: bool,
}

impl ScaffoldPlan {
    /// Run every step (the `--yes` path).
    pub const fn everything() -> Self {
        Self {
            requests: true,
            resource: true,
            factory: true,
            tests: true,
        }
    }

    /// Run only the unconditional steps.
    pub const fn minimal() -> Self {
        Self {
            requests: false,
            resource: false,
            factory: false,
            tests: false,
        }
    }
}

impl Default for ScaffoldPlan {
    fn default() -> Self {
        Self::everything()
    }
}

// ── PendingEdit ───────────────────────────────────────────────────────────────

/// A user-facing reminder that a generated file still needs manual edits.
///
/// `target` is display text, not a verified path: it may carry wildcards
/// (`*_create_posts_table.php`) or a code snippet (the route-registration
/// line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEdit {
    pub description: String,
    pub target: String,
}

impl PendingEdit {
    pub fn new(description: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            target: target.into(),
        }
    }
}

// ── ScaffoldReport ────────────────────────────────────────────────────────────

/// The outcome of one run (or one step of a run).
///
/// Each emit step builds its own report fragment and the caller merges them
/// in sequence, so the pending-edit list is an explicit value threaded through
/// the run rather than shared mutable state. Order is preserved: for a full
/// run the route-registration reminder is always the last pending entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Files written this run.
    pub created: Vec<PathBuf>,
    /// Files left untouched because the target path already existed.
    pub skipped: Vec<PathBuf>,
    /// Manual follow-ups, in emission order.
    pub pending: Vec<PendingEdit>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another report fragment, preserving order.
    pub fn merge(&mut self, other: ScaffoldReport) {
        self.created.extend(other.created);
        self.skipped.extend(other.skipped);
        self.pending.extend(other.pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_order_is_stable() {
        let names: Vec<&str> = RequestKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["Store", "Update", "Delete", "Index", "Show"]);
    }

    #[test]
    fn tested_kinds_are_a_subset_of_all() {
        for kind in RequestKind::TESTED {
            assert!(RequestKind::ALL.contains(&kind));
        }
    }

    #[test]
    fn default_plan_runs_everything() {
        assert_eq!(ScaffoldPlan::default(), ScaffoldPlan::everything());
    }

    #[test]
    fn merge_preserves_pending_order() {
        let mut report = ScaffoldReport::new();
        let mut first = ScaffoldReport::new();
        first.pending.push(PendingEdit::new("edit model", "App/Post.php"));
        let mut second = ScaffoldReport::new();
        second
            .pending
            .push(PendingEdit::new("edit factory", "database/factories/PostFactory.php"));

        report.merge(first);
        report.merge(second);

        assert_eq!(report.pending[0].description, "edit model");
        assert_eq!(report.pending[1].description, "edit factory");
    }
}
