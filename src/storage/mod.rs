pub mod bootstrap;
pub mod reviews;

pub use bootstrap::{RetryPolicy, connect, is_transient};
pub use reviews::{CreatedReview, NewReview, Review, ReviewStore};
