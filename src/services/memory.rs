use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::{JobPosting, ProfileDraft, UserProfile};
use crate::services::store::{JobStore, StoreError};

/// Process-local store, used for local runs and tests
#[derive(Default)]
pub struct InMemoryStore {
    jobs: RwLock<Vec<JobPosting>>,
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            profiles: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add_job(&self, job: JobPosting) {
        self.jobs.write().await.push(job);
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl JobStore for InMemoryStore {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, StoreError> {
        let mut jobs = self.jobs.read().await.clone();
        // Undated jobs sort last; ties keep insertion order
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.email == email).cloned())
    }

    async fn insert_profile(&self, draft: &ProfileDraft) -> Result<UserProfile, StoreError> {
        let profile = UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            email: draft.email.clone(),
            name: draft.name.clone(),
            skills: draft.skills.clone(),
            interests: draft.interests.clone(),
            created_at: Some(chrono::Utc::now()),
        };

        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile.clone());

        Ok(profile)
    }

    async fn update_profile(&self, id: &str, draft: &ProfileDraft) -> Result<UserProfile, StoreError> {
        let mut profiles = self.profiles.write().await;

        let profile = profiles
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} not found", id)))?;

        profile.name = draft.name.clone();
        profile.skills = draft.skills.clone();
        profile.interests = draft.interests.clone();

        Ok(profile.clone())
    }
}
