use crate::linker::{self, UnlinkOutcome};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// The minimal set of operations that converges actual link state to the
/// desired selection. Already-linked, still-selected skills appear in
/// neither list, so nothing is removed and recreated needlessly.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub to_link: Vec<String>,
    pub to_unlink: Vec<String>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.to_link.is_empty() && self.to_unlink.is_empty()
    }
}

/// Pure set difference between desired and current, preserving the order of
/// the input slices so batch output is reproducible.
pub fn plan(currently_linked: &[String], desired: &[String]) -> Plan {
    let current: HashSet<&str> = currently_linked.iter().map(String::as_str).collect();
    let wanted: HashSet<&str> = desired.iter().map(String::as_str).collect();

    Plan {
        to_link: desired
            .iter()
            .filter(|n| !current.contains(n.as_str()))
            .cloned()
            .collect(),
        to_unlink: currently_linked
            .iter()
            .filter(|n| !wanted.contains(n.as_str()))
            .cloned()
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Link,
    Unlink,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplyOutcome {
    pub name: String,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApplyOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply every operation in the plan. Failures are isolated per skill: one
/// conflict never prevents attempting the rest of the batch.
pub fn apply(skills_root: &Path, target_dir: &Path, plan: &Plan) -> Vec<ApplyOutcome> {
    let mut outcomes = Vec::with_capacity(plan.to_link.len() + plan.to_unlink.len());

    for name in &plan.to_link {
        let error = linker::link(skills_root, target_dir, name)
            .err()
            .map(|e| e.to_string());
        outcomes.push(ApplyOutcome {
            name: name.clone(),
            action: Action::Link,
            error,
        });
    }

    for name in &plan.to_unlink {
        let error = match linker::unlink(target_dir, name) {
            Ok(UnlinkOutcome::Removed) | Ok(UnlinkOutcome::NotLinked) => None,
            Err(e) => Some(e.to_string()),
        };
        outcomes.push(ApplyOutcome {
            name: name.clone(),
            action: Action::Unlink,
            error,
        });
    }

    outcomes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
