//! Candidate domain: roster entries, creation drafts and the roster filter.

mod filter;
mod model;

pub use filter::{filter_candidates, matches_search};
pub use model::{Candidate, CandidateDraft, CandidateForm};
