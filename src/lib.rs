//! # gated-networks
//!
//! Gated residual network (GRN) building blocks for the Burn framework.
//!
//! A GRN combines a nonlinear transform, a learned sigmoid gate, and a
//! residual (skip) connection, optionally followed by layer normalization.
//! This crate provides the block and its collaborators as ordinary Burn
//! modules:
//!
//! - [`GatedResidualNetwork`]: the block itself.
//! - [`GatedLinearUnit`]: sigmoid-gated elementwise transform.
//! - [`DenseBlock`]: linear transform with optional activation and dropout,
//!   the unit every sub-layer is built from.
//!
//! Tensor math, autograd, and device execution are entirely Burn's
//! responsibility; this crate is configuration glue over Burn's `nn` layers.
//!
//! ## Example
//!
//! ```
//! use gated_networks::prelude::*;
//! use burn::backend::NdArray;
//! use burn::tensor::{Tensor, backend::Backend};
//!
//! type B = NdArray;
//!
//! let device = <B as Backend>::Device::default();
//!
//! let grn: GatedResidualNetwork<B> = GatedResidualNetworkConfig::new(8, 16, 8)
//!     .with_projector(false)
//!     .init(&device)
//!     .expect("dimensions match, so construction succeeds");
//!
//! let input = Tensor::<B, 2>::zeros([4, 8], &device);
//! let output = grn.forward(input);
//! assert_eq!(output.dims(), [4, 8]);
//! ```

pub mod errors;
pub mod layers;
pub mod training;

// Re-exports for convenience
pub use errors::LayerError;
pub use layers::activation::Activation;
pub use layers::dense::{BlockOptions, DenseBlock, DenseBlockConfig};
pub use layers::glu::{GatedLinearUnit, GatedLinearUnitConfig};
pub use layers::grn::{GatedResidualNetwork, GatedResidualNetworkConfig};
pub use training::{Loss, TrainingConfig};

/// Backend type alias for WGPU with autodiff support.
pub type Backend = burn::backend::Autodiff<burn::backend::Wgpu>;

/// Backend type for inference (no autodiff).
pub type InferenceBackend = burn::backend::Wgpu;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::errors::LayerError;
    pub use crate::layers::activation::Activation;
    pub use crate::layers::dense::{BlockOptions, DenseBlock, DenseBlockConfig};
    pub use crate::layers::glu::{GatedLinearUnit, GatedLinearUnitConfig};
    pub use crate::layers::grn::{GatedResidualNetwork, GatedResidualNetworkConfig};
    pub use crate::training::{Loss, TrainingConfig, train};
    pub use crate::{Backend, InferenceBackend};
}
