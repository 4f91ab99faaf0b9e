// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, ProfileDraft, JobPosting, MatchResult, ScoringWeights};
pub use requests::{MatchJobsRequest, ListJobsQuery};
pub use responses::{MatchJobsResponse, JobsResponse, HealthResponse, ErrorResponse};
