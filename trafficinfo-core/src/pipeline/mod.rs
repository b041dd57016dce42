mod commute_pipeline;
mod tick_outcome;

pub use commute_pipeline::CommutePipeline;
pub use tick_outcome::TickOutcome;
