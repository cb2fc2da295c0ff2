//! Notify Lambda handler and submission email formatting

pub mod email;
pub mod handler;

// Re-export the main handler types for convenience
pub use handler::{BatchOutcome, RecordResult, SubmissionNotifier};
