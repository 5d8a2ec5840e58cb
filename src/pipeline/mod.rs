pub mod pipeline;
pub mod processing;

pub use pipeline::{Pipeline, PipelineResult, RecoveryStats};
