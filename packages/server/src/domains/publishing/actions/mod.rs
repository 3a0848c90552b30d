pub mod publish;

pub use publish::{publish, PublishOutcome};
