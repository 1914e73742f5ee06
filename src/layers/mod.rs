//! Neural network layer implementations.
//!
//! This module contains the building blocks for the gated networks: dense
//! blocks, activation functions, the gated linear unit, and the gated
//! residual network itself.

pub mod activation;
pub mod dense;
pub mod glu;
pub mod grn;

pub use activation::Activation;
pub use dense::{BlockOptions, DenseBlock, DenseBlockConfig};
pub use glu::{GatedLinearUnit, GatedLinearUnitConfig};
pub use grn::{GatedResidualNetwork, GatedResidualNetworkConfig};
