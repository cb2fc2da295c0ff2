//! HTTP-triggered Lambda handlers (API Gateway proxy integration)

pub mod chat;
pub mod enqueue;
pub mod helpers;

pub use chat::ChatResponder;
pub use enqueue::SubmissionEnqueuer;
