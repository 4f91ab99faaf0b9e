use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::ProfileDraft;

/// Request to save a profile and rank jobs against it
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchJobsRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "at least one skill is required"))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl MatchJobsRequest {
    /// Apply the profile form rules: trim every entry, drop blank ones and
    /// keep only the first occurrence of an exact duplicate.
    pub fn sanitized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            skills: clean_entries(self.skills),
            interests: clean_entries(self.interests),
        }
    }
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let trimmed = entry.trim();
        if !trimmed.is_empty() && !cleaned.iter().any(|e| e == trimmed) {
            cleaned.push(trimmed.to_string());
        }
    }
    cleaned
}

impl From<MatchJobsRequest> for ProfileDraft {
    fn from(req: MatchJobsRequest) -> Self {
        ProfileDraft {
            email: req.email,
            name: req.name,
            skills: req.skills,
            interests: req.interests,
        }
    }
}

/// Query parameters for listing jobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListJobsQuery {
    #[serde(default)]
    pub refresh: bool,
}
