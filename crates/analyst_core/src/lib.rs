//! analyst_core - Core types for the RNC analysis service
//!
//! This crate provides the foundational types used across the service crates:
//! - `record` - NonconformanceRecord and the inbound request shape
//! - `analysis` - AnalysisResult and its statistics block
//! - `config` - backend selection and per-provider settings

pub mod analysis;
pub mod config;
pub mod record;

// Re-export commonly used types
pub use analysis::{AnalysisResult, RiskLevel, Statistics};
pub use config::{Config, GroqConfig, OllamaConfig, ProviderConfigs};
pub use record::{AnalysisRequest, NonconformanceRecord};
