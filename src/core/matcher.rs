use crate::models::{JobPosting, MatchResult, ScoringWeights, UserProfile};
use crate::core::scoring::{score_job, NormalizedProfile};

/// Scores job postings against a profile and ranks them
///
/// # Pipeline Stages
/// 1. Profile normalization (once per call)
/// 2. Skill partitioning and interest bonus per job
/// 3. Stable sort by match percentage, highest first
#[derive(Debug, Clone)]
pub struct JobMatcher {
    weights: ScoringWeights,
}

impl JobMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compute the match record for one job
    pub fn compute_match(&self, job: &JobPosting, profile: &UserProfile) -> MatchResult {
        score_job(job.clone(), &NormalizedProfile::new(profile), &self.weights)
    }

    /// Score every job and order them by match percentage, highest first
    ///
    /// Jobs with equal percentages keep their input order.
    ///
    /// # Arguments
    /// * `jobs` - Job postings, already fetched from the data store
    /// * `profile` - The profile to score against
    pub fn rank_jobs(&self, jobs: Vec<JobPosting>, profile: &UserProfile) -> Vec<MatchResult> {
        let normalized = NormalizedProfile::new(profile);

        let mut results: Vec<MatchResult> = jobs
            .into_iter()
            .map(|job| score_job(job, &normalized, &self.weights))
            .collect();

        // `sort_by` is stable
        results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        results
    }
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank jobs against a profile with the default weights
pub fn rank_jobs(jobs: Vec<JobPosting>, profile: &UserProfile) -> Vec<MatchResult> {
    JobMatcher::with_default_weights().rank_jobs(jobs, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_job(id: &str, required: &[&str], category: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            job_type: "Full-time".to_string(),
            location: "Remote".to_string(),
            salary_range: String::new(),
            category: category.to_string(),
            created_at: None,
        }
    }

    fn create_profile(skills: &[&str], interests: &[&str]) -> UserProfile {
        UserProfile {
            id: "user_1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            created_at: None,
        }
    }

    #[test]
    fn test_rank_jobs_sorted() {
        let matcher = JobMatcher::with_default_weights();
        let profile = create_profile(&["rust", "sql"], &["backend"]);

        let jobs = vec![
            create_job("low", &["java"], "Mobile"),                     // 0
            create_job("high", &["rust", "sql"], "Backend Services"),   // 100
            create_job("mid", &["rust", "go"], "Infrastructure"),       // 40
        ];

        let ranked = matcher.rank_jobs(jobs, &profile);

        let ids: Vec<&str> = ranked.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].match_percentage, 100);
        assert_eq!(ranked[1].match_percentage, 40);
        assert_eq!(ranked[2].match_percentage, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = JobMatcher::with_default_weights();
        let profile = create_profile(&["rust"], &[]);

        let jobs = vec![
            create_job("a", &["go"], "Infra"),
            create_job("b", &["rust"], "Infra"),
            create_job("c", &["python"], "Infra"),
            create_job("d", &["rust"], "Infra"),
        ];

        let ranked = matcher.rank_jobs(jobs, &profile);

        let ids: Vec<&str> = ranked.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_empty() {
        let profile = create_profile(&["rust"], &["web"]);
        assert!(rank_jobs(vec![], &profile).is_empty());
    }

    #[test]
    fn test_compute_match_uses_weights() {
        let matcher = JobMatcher::new(ScoringWeights { skills: 50.0, interest: 50.0 });
        let job = create_job("a", &["rust", "go"], "Web Development");
        let profile = create_profile(&["Rust"], &["web"]);

        assert_eq!(matcher.compute_match(&job, &profile).match_percentage, 75);
    }
}
