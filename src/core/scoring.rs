use std::collections::HashSet;

use crate::models::{JobPosting, MatchResult, ScoringWeights, UserProfile};
use crate::core::{
    interests::interest_matches,
    skills::{normalize_all, partition_skills, skill_score},
};

/// A profile lower-cased once so it can be scored against many jobs
#[derive(Debug, Clone)]
pub struct NormalizedProfile {
    skills: HashSet<String>,
    interests: Vec<String>,
}

impl NormalizedProfile {
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            skills: normalize_all(&profile.skills).into_iter().collect(),
            interests: normalize_all(&profile.interests),
        }
    }
}

/// Score a job against a profile (0-100)
///
/// Scoring formula:
/// percentage = round(
///     matched / required * weights.skills +   # 0 when nothing is required
///     interest_bonus                          # weights.interest or 0
/// )
pub fn score_job(
    job: JobPosting,
    profile: &NormalizedProfile,
    weights: &ScoringWeights,
) -> MatchResult {
    let (matched_skills, missing_skills) = partition_skills(&job.required_skills, &profile.skills);

    let skill_points = skill_score(matched_skills.len(), job.required_skills.len(), weights.skills);

    let category = job.category.to_lowercase();
    let interest_points = if interest_matches(&category, &profile.interests) {
        weights.interest
    } else {
        0.0
    };

    MatchResult {
        job,
        match_percentage: to_percentage(skill_points + interest_points),
        matched_skills,
        missing_skills,
    }
}

/// Compute the match record for a single job with the default weights
pub fn compute_match(job: &JobPosting, profile: &UserProfile) -> MatchResult {
    score_job(job.clone(), &NormalizedProfile::new(profile), &ScoringWeights::default())
}

/// Round half-up and clamp into 0..=100
#[inline]
fn to_percentage(points: f64) -> u8 {
    if points.is_nan() {
        return 0;
    }

    (points + 0.5).floor().clamp(0.0, 100.0) as u8
}
