//! Training utilities for gated network blocks.

pub mod config;
pub mod loss;
pub mod trainer;

pub use config::TrainingConfig;
pub use loss::Loss;
pub use trainer::{TrainingResult, train};
