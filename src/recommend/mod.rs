// src/recommend/mod.rs

//! Heuristic course recommendation.
//!
//! - [`eligibility`] computes which courses a student may take next.
//! - [`ranker`] orders eligible courses by interest alignment and bounds
//!   the result to a course load.

pub mod eligibility;
pub mod ranker;

pub use eligibility::{eligible_courses, is_eligible};
pub use ranker::{Recommendation, recommend_courses};
