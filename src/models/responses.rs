use serde::{Deserialize, Serialize};
use crate::models::domain::{JobPosting, MatchResult, UserProfile};

/// Response for the match jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchJobsResponse {
    pub profile: UserProfile,
    pub matches: Vec<MatchResult>,
    pub total_results: usize,
}

/// Response for the list jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
