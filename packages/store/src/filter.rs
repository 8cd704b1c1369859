//! # Filter engine
//!
//! Derives the visible subsequence of the idea list from three independent
//! predicates. The predicates are ANDed together and an empty predicate passes
//! everything:
//!
//! | Field | Passes when |
//! |-------|-------------|
//! | `search` | empty, or the title or content contains it (case-insensitive) |
//! | `tag` | empty, or at least one tag contains it (case-insensitive) |
//! | `priority` | `None`, or equal to the idea's priority |
//!
//! The result always preserves the source order. Nothing is memoised; callers
//! recompute whenever the list or a filter value changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Idea, Priority};

/// Current filter values. Derived state, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeaFilter {
    pub search: String,
    pub tag: String,
    pub priority: Option<Priority>,
}

impl IdeaFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.tag.is_empty() && self.priority.is_none()
    }

    pub fn matches(&self, idea: &Idea) -> bool {
        self.matches_search(idea) && self.matches_tag(idea) && self.matches_priority(idea)
    }

    fn matches_search(&self, idea: &Idea) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        idea.title.to_lowercase().contains(&needle) || idea.content.to_lowercase().contains(&needle)
    }

    fn matches_tag(&self, idea: &Idea) -> bool {
        if self.tag.is_empty() {
            return true;
        }
        let needle = self.tag.to_lowercase();
        idea.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_priority(&self, idea: &Idea) -> bool {
        self.priority.map_or(true, |p| idea.priority == p)
    }

    /// Filter `ideas`, preserving order.
    pub fn apply(&self, ideas: &[Idea]) -> Vec<Idea> {
        ideas.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

/// How the dashboard lays out the filtered list. Also sent to the backend as
/// the `view_mode` query parameter, which picks the sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Newest first by creation time.
    #[default]
    Timeline,
    /// Grouped under each tag.
    Tag,
    /// Cards in a grid, most recently updated first.
    Grid,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Timeline, ViewMode::Tag, ViewMode::Grid];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Timeline => "timeline",
            ViewMode::Tag => "tag",
            ViewMode::Grid => "grid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Timeline => "Timeline",
            ViewMode::Tag => "By tag",
            ViewMode::Grid => "Grid",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .unwrap_or_default()
    }
}

/// Group label used for ideas without tags.
pub const UNTAGGED: &str = "untagged";

/// Group ideas under every tag they carry. Tags are sorted; ideas keep their
/// list order inside a group. An idea with several tags appears in each group.
pub fn group_by_tag(ideas: &[Idea]) -> BTreeMap<String, Vec<Idea>> {
    let mut groups: BTreeMap<String, Vec<Idea>> = BTreeMap::new();
    for idea in ideas {
        if idea.tags.is_empty() {
            groups.entry(UNTAGGED.to_string()).or_default().push(idea.clone());
            continue;
        }
        for tag in &idea.tags {
            let bucket = groups.entry(tag.clone()).or_default();
            // Duplicate tags on one idea would otherwise list it twice.
            if bucket.last().map(|i| &i.id) != Some(&idea.id) {
                bucket.push(idea.clone());
            }
        }
    }
    groups
}

/// Width of a bar as a percentage of the largest value. Zero when `max` is zero.
pub fn bar_width(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value as f64 / max as f64 * 100.0
}
