use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

use crate::models::{JobPosting, ProfileDraft, UserProfile};
use crate::services::store::{JobStore, StoreError};

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub jobs: String,
    pub user_profiles: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            jobs: "jobs".to_string(),
            user_profiles: "user_profiles".to_string(),
        }
    }
}

/// Supabase REST (PostgREST) client
///
/// Handles all communication with the hosted data store:
/// - Listing job postings
/// - Looking up profiles by email
/// - Inserting and updating profiles
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Decode a PostgREST row array, mapping error statuses
    async fn read_rows<T: DeserializeOwned>(
        response: Response,
        action: &str,
    ) -> Result<Vec<T>, StoreError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to {}: {} - {}", action, status, body);
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to {}", action),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to {}: {}", action, e)))
    }
}

#[async_trait]
impl JobStore for SupabaseClient {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, StoreError> {
        let url = format!(
            "{}?select=*&order=created_at.desc",
            self.table_url(&self.tables.jobs)
        );

        tracing::debug!("Fetching jobs from: {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        let jobs: Vec<JobPosting> = Self::read_rows(response, "fetch jobs").await?;

        tracing::debug!("Fetched {} jobs", jobs.len());

        Ok(jobs)
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError> {
        let url = format!(
            "{}?select=*&email=eq.{}&limit=1",
            self.table_url(&self.tables.user_profiles),
            urlencoding::encode(email)
        );

        tracing::debug!("Looking up profile for: {}", email);

        let response = self.request(Method::GET, &url).send().await?;
        let rows: Vec<UserProfile> = Self::read_rows(response, "look up profile").await?;

        Ok(rows.into_iter().next())
    }

    async fn insert_profile(&self, draft: &ProfileDraft) -> Result<UserProfile, StoreError> {
        let url = self.table_url(&self.tables.user_profiles);

        let response = self
            .request(Method::POST, &url)
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await?;

        let rows: Vec<UserProfile> = Self::read_rows(response, "create profile").await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse("Insert returned no rows".into()))
    }

    async fn update_profile(&self, id: &str, draft: &ProfileDraft) -> Result<UserProfile, StoreError> {
        let url = format!(
            "{}?id=eq.{}",
            self.table_url(&self.tables.user_profiles),
            urlencoding::encode(id)
        );

        let payload = json!({
            "name": draft.name,
            "skills": draft.skills,
            "interests": draft.interests,
        });

        let response = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await?;

        let rows: Vec<UserProfile> = Self::read_rows(response, "update profile").await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} not found", id)))
    }
}
