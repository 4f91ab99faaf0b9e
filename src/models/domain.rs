use serde::{Deserialize, Serialize};

/// User profile as stored in the `user_profiles` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Profile fields supplied by a user, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub email: String,
    pub name: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

/// Job posting as stored in the `jobs` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_range: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

// PostgREST returns `null` for unset columns
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A job posting annotated with how well it fits a profile
///
/// Serializes flat: the job's own fields followed by the computed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Points awarded by each scoring component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Awarded in proportion to the share of required skills the user has
    pub skills: f64,
    /// Flat bonus when an interest lines up with the job category
    pub interest: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 80.0,
            interest: 20.0,
        }
    }
}
