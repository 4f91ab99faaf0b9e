// Core algorithm exports
pub mod interests;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use interests::{first_token, interest_matches};
pub use matcher::{JobMatcher, rank_jobs};
pub use scoring::{compute_match, score_job, NormalizedProfile};
pub use skills::{normalize_all, partition_skills, skill_score};
