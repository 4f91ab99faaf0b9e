use async_trait::async_trait;
use thiserror::Error;

use crate::models::{JobPosting, ProfileDraft, UserProfile};

/// Errors that can occur when reading or writing the data store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Access to stored job postings and user profiles
///
/// Constructed once at startup and shared through the application state.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// All job postings, newest first
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, StoreError>;

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError>;

    async fn insert_profile(&self, draft: &ProfileDraft) -> Result<UserProfile, StoreError>;

    /// Overwrite name, skills and interests of an existing profile
    async fn update_profile(&self, id: &str, draft: &ProfileDraft) -> Result<UserProfile, StoreError>;

    /// Update the profile registered under the draft's email, or create one
    async fn upsert_profile(&self, draft: &ProfileDraft) -> Result<UserProfile, StoreError> {
        match self.find_profile_by_email(&draft.email).await? {
            Some(existing) => {
                tracing::debug!("Updating existing profile {}", existing.id);
                self.update_profile(&existing.id, draft).await
            }
            None => {
                tracing::debug!("Creating profile for {}", draft.email);
                self.insert_profile(draft).await
            }
        }
    }
}
