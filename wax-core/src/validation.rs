//! Submission-readiness checklist derived from the release record.
//!
//! Pure projection: recomputed from a record snapshot on every call, no
//! caching. The completion percentage shown next to the checklist is tracked
//! as its own signal by the manager and only passes through here.

use crate::release::ReleaseRecord;
use serde::{Deserialize, Serialize};

pub const GROUP_BASIC_INFO: &str = "Basic Info";
pub const GROUP_PARTICIPANTS: &str = "Participants";

/// One boolean readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementItem {
    pub label: String,
    pub complete: bool,
}

/// A named group of readiness checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementGroup {
    pub name: String,
    pub items: Vec<RequirementItem>,
}

impl RequirementGroup {
    fn new(name: &str, items: Vec<RequirementItem>) -> Self {
        Self {
            name: name.to_string(),
            items,
        }
    }
}

/// The checklist plus its derived counts and the externally tracked
/// completion percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub requirements: Vec<RequirementGroup>,
    pub completed_items: usize,
    pub total_items: usize,
    pub completion_percent: u8,
}

fn item(label: &str, complete: bool) -> RequirementItem {
    RequirementItem {
        label: label.to_string(),
        complete,
    }
}

/// Build the requirement tree for a record.
///
/// Two fixed groups. The "Main artist" item passes for ANY participant with a
/// non-empty trimmed name, whatever their role. The label promises more than
/// the check enforces, but that is the shipped behavior and tightening it
/// would flip existing releases to incomplete.
pub fn compute_requirements(record: &ReleaseRecord) -> Vec<RequirementGroup> {
    let basic_info = RequirementGroup::new(
        GROUP_BASIC_INFO,
        vec![
            item("Title", !record.title.trim().is_empty()),
            item("Genre", !record.genre.is_empty()),
            item(
                "Parental advisory",
                record.parental_advisory.is_some(),
            ),
        ],
    );

    let has_named_artist = record
        .artists
        .iter()
        .any(|p| !p.display_name.trim().is_empty());
    let participants =
        RequirementGroup::new(GROUP_PARTICIPANTS, vec![item("Main artist", has_named_artist)]);

    vec![basic_info, participants]
}

/// Derive the full summary for a record.
///
/// `completion_percent` is the independently tracked signal: it is surfaced
/// alongside the derived counts, not computed from them.
pub fn summarize(record: &ReleaseRecord, completion_percent: u8) -> ValidationSummary {
    let requirements = compute_requirements(record);
    let total_items = requirements.iter().map(|g| g.items.len()).sum();
    let completed_items = requirements
        .iter()
        .flat_map(|g| g.items.iter())
        .filter(|i| i.complete)
        .count();
    ValidationSummary {
        requirements,
        completed_items,
        total_items,
        completion_percent,
    }
}
