//! Editor draft state and tag-field parsing.

use crate::models::{Idea, IdeaPayload, Priority};

/// Local form state of the idea editor.
///
/// Tags are edited as one comma-separated string and category as a plain
/// string; both are normalised by [`IdeaDraft::to_payload`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub content: String,
    pub tags_input: String,
    pub priority: Priority,
    pub category: String,
}

impl IdeaDraft {
    /// Empty draft for a new idea (priority medium, no tags, no category).
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing idea.
    pub fn from_idea(idea: &Idea) -> Self {
        Self {
            title: idea.title.clone(),
            content: idea.content.clone(),
            tags_input: idea.tags.join(", "),
            priority: idea.priority,
            category: idea.category.clone().unwrap_or_default(),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags_input)
    }

    /// Request body for create/update.
    pub fn to_payload(&self) -> IdeaPayload {
        let category = self.category.trim();
        IdeaPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags(),
            priority: self.priority,
            category: (!category.is_empty()).then(|| category.to_string()),
        }
    }

    /// Append suggested tags that are not already present (case-insensitive).
    pub fn add_suggested_tags(&mut self, suggestions: &[String]) {
        let merged = merge_tags(&self.tags(), suggestions);
        self.tags_input = merged.join(", ");
    }
}

/// Split a comma-separated tag field, trimming entries and dropping empty ones.
///
/// `"a, b ,, c"` gives `["a", "b", "c"]`.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// `existing` followed by each entry of `extra` not already in the list.
pub fn merge_tags(existing: &[String], extra: &[String]) -> Vec<String> {
    let mut out = existing.to_vec();
    for tag in extra {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if !out.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            out.push(tag.to_string());
        }
    }
    out
}
