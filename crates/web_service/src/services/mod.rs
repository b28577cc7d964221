pub mod analysis_service;
pub mod prompt_builder;

pub use analysis_service::{AnalysisError, AnalysisService};
