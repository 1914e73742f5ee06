//! Error types for layer construction.

pub mod layer_error;

pub use layer_error::LayerError;
