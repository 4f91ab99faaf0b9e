//! Job Match - scores job postings against a user's skills and interests
//!
//! The scoring core (`core`) is pure: it takes a profile and already-fetched
//! job postings and returns them ranked by match percentage. The service
//! layers around it load jobs from Supabase, save profiles and expose the
//! ranking over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{JobMatcher, compute_match, rank_jobs};
pub use models::{UserProfile, JobPosting, MatchResult, ScoringWeights, MatchJobsRequest, MatchJobsResponse};
