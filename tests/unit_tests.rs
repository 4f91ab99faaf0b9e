// Unit tests for Job Match

use job_match::core::{
    compute_match, rank_jobs,
    interests::{first_token, interest_matches},
    skills::{normalize_all, partition_skills, skill_score},
};
use job_match::models::{JobPosting, UserProfile};
use std::collections::HashSet;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn create_job(id: &str, required: &[&str], category: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: format!("Job {}", id),
        company: "Acme".to_string(),
        description: "A job".to_string(),
        required_skills: strings(required),
        job_type: "Full-time".to_string(),
        location: "Berlin".to_string(),
        salary_range: "$80k - $100k".to_string(),
        category: category.to_string(),
        created_at: None,
    }
}

fn create_profile(skills: &[&str], interests: &[&str]) -> UserProfile {
    UserProfile {
        id: "user_1".to_string(),
        email: "ada@example.com".to_string(),
        name: "Ada Lovelace".to_string(),
        skills: strings(skills),
        interests: strings(interests),
        created_at: None,
    }
}

#[test]
fn test_web_developer_scenario() {
    let job = create_job("1", &["react", "node"], "Web Development");
    let profile = create_profile(&["React"], &["web"]);

    let result = compute_match(&job, &profile);

    assert_eq!(result.matched_skills, vec!["react"]);
    assert_eq!(result.missing_skills, vec!["node"]);
    assert_eq!(result.match_percentage, 60);
}

#[test]
fn test_empty_profile_scenario() {
    let job = create_job("1", &["react", "node"], "Web Development");
    let profile = create_profile(&[], &[]);

    let result = compute_match(&job, &profile);

    assert_eq!(result.match_percentage, 0);
    assert!(result.matched_skills.is_empty());
    assert_eq!(result.missing_skills, vec!["react", "node"]);
}

#[test]
fn test_equal_category_and_interest_scenario() {
    let job = create_job("1", &[], "Data Science");
    let profile = create_profile(&[], &["data science"]);

    assert_eq!(compute_match(&job, &profile).match_percentage, 20);
}

#[test]
fn test_no_required_skills_is_zero_or_twenty() {
    let profiles = [
        create_profile(&["rust"], &[]),
        create_profile(&["rust"], &["design"]),
        create_profile(&[], &["marketing"]),
        create_profile(&["go"], &["Marketing Team"]),
    ];
    let jobs = [
        create_job("1", &[], "Design"),
        create_job("2", &[], "Marketing"),
        create_job("3", &[], "Finance"),
    ];

    for job in &jobs {
        for profile in &profiles {
            let result = compute_match(job, profile);
            assert!(
                result.match_percentage == 0 || result.match_percentage == 20,
                "unexpected {} for {:?}",
                result.match_percentage,
                job.category
            );
            assert!(result.matched_skills.is_empty());
            assert!(result.missing_skills.is_empty());
        }
    }
}

#[test]
fn test_full_coverage_with_interest_is_hundred() {
    let job = create_job("1", &["Python", "SQL", "Pandas"], "Data Science");
    let profile = create_profile(&["pandas", "sql", "PYTHON", "excel"], &["Data"]);

    assert_eq!(compute_match(&job, &profile).match_percentage, 100);
}

#[test]
fn test_full_coverage_without_interest_is_eighty() {
    let job = create_job("1", &["Python", "SQL"], "Data Science");
    let profile = create_profile(&["python", "sql"], &["gardening"]);

    assert_eq!(compute_match(&job, &profile).match_percentage, 80);
}

#[test]
fn test_nothing_in_common_is_zero() {
    let job = create_job("1", &["swift", "kotlin"], "Mobile Development");
    let profile = create_profile(&["excel"], &["finance"]);

    assert_eq!(compute_match(&job, &profile).match_percentage, 0);
}

#[test]
fn test_case_insensitive_skill_match() {
    let job = create_job("1", &["react"], "Web Development");
    let profile = create_profile(&["React"], &[]);

    let result = compute_match(&job, &profile);

    assert_eq!(result.matched_skills, vec!["react"]);
    assert_eq!(result.match_percentage, 80);
}

#[test]
fn test_skill_counts_add_up() {
    let profile = create_profile(&["rust", "Go", "sql"], &["cloud"]);
    let jobs = vec![
        create_job("1", &[], "Cloud"),
        create_job("2", &["Rust"], "Systems"),
        create_job("3", &["rust", "RUST", "python"], "Backend"),
        create_job("4", &["k8s", "terraform", "go", "sql", "aws"], "Cloud Infrastructure"),
    ];

    for job in &jobs {
        let result = compute_match(job, &profile);
        assert_eq!(
            result.matched_skills.len() + result.missing_skills.len(),
            job.required_skills.len()
        );
        assert!(result.match_percentage <= 100);
    }
}

#[test]
fn test_interest_first_token_direction() {
    // "analytics" is the category's second token, so only the first-token rule could
    // fire, and "web analytics lead" does not contain "product"
    let job = create_job("1", &[], "Product Analytics");
    assert_eq!(compute_match(&job, &create_profile(&[], &["web analytics lead"])).match_percentage, 0);

    // The interest contains the first token "product"
    assert_eq!(compute_match(&job, &create_profile(&[], &["product management"])).match_percentage, 20);

    // The category contains the interest
    assert_eq!(compute_match(&job, &create_profile(&[], &["analytics"])).match_percentage, 20);
}

#[test]
fn test_short_interest_substring_matches() {
    // Loose on purpose: "art" appears inside "smart contracts"
    let job = create_job("1", &[], "Smart Contracts");
    assert_eq!(compute_match(&job, &create_profile(&[], &["Art"])).match_percentage, 20);
}

#[test]
fn test_descriptive_fields_untouched() {
    let mut job = create_job("1", &["rust"], "Systems");
    job.salary_range = String::new();
    let profile = create_profile(&["rust"], &[]);

    let result = compute_match(&job, &profile);

    assert_eq!(result.job, job);
    assert_eq!(result.match_percentage, 80);
}

#[test]
fn test_ranked_non_increasing() {
    let profile = create_profile(&["rust", "sql", "react"], &["web"]);
    let jobs = vec![
        create_job("1", &["java"], "Enterprise"),
        create_job("2", &["react"], "Web Development"),
        create_job("3", &["rust", "sql", "kafka"], "Data Engineering"),
        create_job("4", &[], "Web Design"),
        create_job("5", &["rust", "react"], "Web Platform"),
    ];

    let ranked = rank_jobs(jobs, &profile);

    assert_eq!(ranked.len(), 5);
    for pair in ranked.windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
    assert_eq!(ranked[0].match_percentage, 100);
}

#[test]
fn test_rank_empty_jobs() {
    let profile = create_profile(&["rust"], &["web"]);
    assert!(rank_jobs(vec![], &profile).is_empty());
}

#[test]
fn test_helpers() {
    let user: HashSet<String> = normalize_all(&strings(&["Rust", "SQL"])).into_iter().collect();
    let (matched, missing) = partition_skills(&strings(&["sql", "Go"]), &user);

    assert_eq!(matched, vec!["sql"]);
    assert_eq!(missing, vec!["go"]);
    assert_eq!(skill_score(matched.len(), 2, 80.0), 40.0);
    assert_eq!(first_token("machine learning"), "machine");
    assert!(interest_matches("machine learning", &strings(&["machine vision"])));
}
