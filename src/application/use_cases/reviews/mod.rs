//! Review Use Cases

mod create_review;

pub use create_review::CreateReviewUseCase;
