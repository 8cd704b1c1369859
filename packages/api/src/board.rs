//! # Idea board — CRUD with refetch
//!
//! [`IdeaBoard`] wraps the idea endpoints. Every mutation issues exactly one
//! call and then refetches the whole list, returning the fresh list to the
//! caller. There is no optimistic patching, so a failed mutation leaves the
//! caller's current list untouched and nothing needs rolling back.

use std::future::Future;

use store::{CombineRequest, Idea, IdeaPatch, IdeaPayload, SmartSuggestion};

use crate::{ApiError, Backend, IdeaQuery};

#[derive(Clone, Debug)]
pub struct IdeaBoard<B> {
    backend: B,
    query: IdeaQuery,
}

impl<B: Backend> IdeaBoard<B> {
    pub fn new(backend: B, query: IdeaQuery) -> Self {
        Self { backend, query }
    }

    /// The full list for the current query.
    pub async fn fetch(&self) -> Result<Vec<Idea>, ApiError> {
        let ideas = self.backend.list_ideas(&self.query).await?;
        tracing::debug!("Fetched {} ideas", ideas.len());
        Ok(ideas)
    }

    pub async fn get(&self, id: &str) -> Result<Idea, ApiError> {
        self.backend.get_idea(id).await
    }

    pub async fn create(&self, payload: &IdeaPayload) -> Result<Vec<Idea>, ApiError> {
        let idea = self.backend.create_idea(payload).await?;
        tracing::info!("Created idea {}", idea.id);
        self.fetch().await
    }

    pub async fn update(&self, id: &str, patch: &IdeaPatch) -> Result<Vec<Idea>, ApiError> {
        self.backend.update_idea(id, patch).await?;
        tracing::info!("Updated idea {id}");
        self.fetch().await
    }

    pub async fn toggle_favorite(&self, idea: &Idea) -> Result<Vec<Idea>, ApiError> {
        self.update(&idea.id, &IdeaPatch::favorite(!idea.is_favorite))
            .await
    }

    /// Delete after `confirm` resolves to `true`.
    ///
    /// Returns `Ok(None)` without touching the backend when the user declines.
    pub async fn delete<F>(&self, id: &str, confirm: F) -> Result<Option<Vec<Idea>>, ApiError>
    where
        F: Future<Output = bool>,
    {
        if !confirm.await {
            tracing::debug!("Delete of {id} cancelled");
            return Ok(None);
        }
        self.backend.delete_idea(id).await?;
        tracing::info!("Deleted idea {id}");
        self.fetch().await.map(Some)
    }

    /// Fuse two ideas into a new one.
    pub async fn combine(
        &self,
        first: &str,
        second: &str,
        new_title: Option<String>,
    ) -> Result<Vec<Idea>, ApiError> {
        let request = CombineRequest {
            idea1_id: first.to_string(),
            idea2_id: second.to_string(),
            new_title: new_title.filter(|t| !t.trim().is_empty()),
        };
        let fused = self.backend.combine_ideas(&request).await?;
        tracing::info!("Combined {first} and {second} into {}", fused.id);
        self.fetch().await
    }

    /// Backend tag suggestions for an existing idea. Read-only, no refetch.
    pub async fn suggest_tags(&self, id: &str) -> Result<SmartSuggestion, ApiError> {
        self.backend.suggest_tags(id).await
    }
}
