//! Gated residual network: nonlinear transform, learned gate, and residual
//! connection, optionally layer-normalized.

use crate::errors::LayerError;
use crate::layers::{
    Activation, BlockOptions, DenseBlock, DenseBlockConfig, GatedLinearUnit, GatedLinearUnitConfig,
};
use burn::{
    module::Module,
    nn::{LayerNorm, LayerNormConfig},
    tensor::{Tensor, backend::Backend},
};

/// Dropout probability for the linear dense sub-layer when not overridden.
const DEFAULT_LINEAR_DENSE_DROPOUT: f64 = 0.15;

/// Configuration for a [`GatedResidualNetwork`].
///
/// Each sub-layer carries its own [`BlockOptions`]; fields left unset fall
/// back to the sub-layer's documented default.
#[derive(Debug, Clone)]
pub struct GatedResidualNetworkConfig {
    /// Number of input features.
    pub in_features: usize,
    /// Number of hidden features between the two dense sub-layers.
    pub hidden_features: usize,
    /// Number of output features.
    pub out_features: usize,
    /// Whether to project the skip connection to `out_features`.
    /// When false, `in_features` must equal `out_features`.
    pub use_projector: bool,
    /// Whether to layer-normalize the output.
    pub use_layer_norm: bool,
    /// Overrides for the first dense sub-layer (defaults to linear + ELU).
    pub elu_dense: BlockOptions,
    /// Overrides for the second dense sub-layer (defaults to linear, no
    /// activation, 15% dropout).
    pub linear_dense: BlockOptions,
    /// Overrides for the gated linear unit's gate path.
    pub glu_gate: BlockOptions,
    /// Overrides for the gated linear unit's value path.
    pub glu_dense: BlockOptions,
    /// Overrides for the skip projector (defaults to a plain linear).
    pub projector: BlockOptions,
    /// Epsilon for layer normalization.
    pub layer_norm_epsilon: f64,
}

impl GatedResidualNetworkConfig {
    /// Creates a new GatedResidualNetworkConfig with projector and layer
    /// normalization enabled and all sub-layers at their defaults.
    pub fn new(in_features: usize, hidden_features: usize, out_features: usize) -> Self {
        Self {
            in_features,
            hidden_features,
            out_features,
            use_projector: true,
            use_layer_norm: true,
            elu_dense: BlockOptions::new(),
            linear_dense: BlockOptions::new(),
            glu_gate: BlockOptions::new(),
            glu_dense: BlockOptions::new(),
            projector: BlockOptions::new(),
            layer_norm_epsilon: 1e-5,
        }
    }

    /// Enables or disables the skip projector.
    pub fn with_projector(mut self, use_projector: bool) -> Self {
        self.use_projector = use_projector;
        self
    }

    /// Enables or disables output layer normalization.
    pub fn with_layer_norm(mut self, use_layer_norm: bool) -> Self {
        self.use_layer_norm = use_layer_norm;
        self
    }

    /// Sets the overrides for the first dense sub-layer.
    pub fn with_elu_dense(mut self, options: BlockOptions) -> Self {
        self.elu_dense = options;
        self
    }

    /// Sets the overrides for the second dense sub-layer.
    pub fn with_linear_dense(mut self, options: BlockOptions) -> Self {
        self.linear_dense = options;
        self
    }

    /// Sets the overrides for the gated linear unit's gate path.
    pub fn with_glu_gate(mut self, options: BlockOptions) -> Self {
        self.glu_gate = options;
        self
    }

    /// Sets the overrides for the gated linear unit's value path.
    pub fn with_glu_dense(mut self, options: BlockOptions) -> Self {
        self.glu_dense = options;
        self
    }

    /// Sets the overrides for the skip projector.
    pub fn with_projector_options(mut self, options: BlockOptions) -> Self {
        self.projector = options;
        self
    }

    /// Sets the epsilon used by layer normalization.
    pub fn with_layer_norm_epsilon(mut self, epsilon: f64) -> Self {
        self.layer_norm_epsilon = epsilon;
        self
    }

    /// Initializes the gated residual network with the given device.
    ///
    /// Fails with [`LayerError::ResidualDimensionMismatch`] when the
    /// projector is disabled and `in_features != out_features`, since the
    /// residual addition requires matching dimensionality.
    pub fn init<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<GatedResidualNetwork<B>, LayerError> {
        let elu_dense = self
            .elu_dense
            .resolve(
                DenseBlockConfig::new(self.in_features, self.hidden_features)
                    .with_activation(Activation::Elu),
            )
            .init(device)?;

        let linear_dense = self
            .linear_dense
            .resolve(
                DenseBlockConfig::new(self.hidden_features, self.out_features)
                    .with_dropout(DEFAULT_LINEAR_DENSE_DROPOUT),
            )
            .init(device)?;

        // The gate operates on the linear dense output, which is already
        // out_features wide.
        let gated_linear_unit = GatedLinearUnitConfig::new(self.out_features, self.out_features)
            .with_gate(self.glu_gate.clone())
            .with_dense(self.glu_dense.clone())
            .init(device)?;

        let projector = if self.use_projector {
            Some(
                self.projector
                    .resolve(DenseBlockConfig::new(self.in_features, self.out_features))
                    .init(device)?,
            )
        } else {
            if self.in_features != self.out_features {
                return Err(LayerError::ResidualDimensionMismatch {
                    in_features: self.in_features,
                    out_features: self.out_features,
                });
            }
            None
        };

        let layer_norm = if self.use_layer_norm {
            Some(
                LayerNormConfig::new(self.out_features)
                    .with_epsilon(self.layer_norm_epsilon)
                    .init(device),
            )
        } else {
            None
        };

        Ok(GatedResidualNetwork {
            elu_dense,
            linear_dense,
            gated_linear_unit,
            projector,
            layer_norm,
            in_features: self.in_features,
            hidden_features: self.hidden_features,
            out_features: self.out_features,
        })
    }
}

/// A gated residual network.
///
/// Forward, for an input of shape `(..., in_features)`:
///
/// 1. `h = elu_dense(x)` — linear + ELU, into `hidden_features`.
/// 2. `h = linear_dense(h)` — linear + dropout, into `out_features`.
/// 3. `skip = projector(x)` if configured, else `x`.
/// 4. `gated = gated_linear_unit(h)`.
/// 5. `out = skip + gated`.
/// 6. `out = layer_norm(out)` if configured.
///
/// All state is fixed at construction; forward only produces transient
/// tensors. Train/eval behavior (dropout) is governed by the backend.
#[derive(Module, Debug)]
pub struct GatedResidualNetwork<B: Backend> {
    /// First dense sub-layer, linear + ELU.
    elu_dense: DenseBlock<B>,
    /// Second dense sub-layer, linear + dropout.
    linear_dense: DenseBlock<B>,
    /// Gate applied to the transformed path before the residual sum.
    gated_linear_unit: GatedLinearUnit<B>,
    /// Skip projector, absent when `in_features == out_features` suffices.
    projector: Option<DenseBlock<B>>,
    /// Output normalization, if configured.
    layer_norm: Option<LayerNorm<B>>,
    /// Input size (constant metadata).
    in_features: usize,
    /// Hidden size (constant metadata).
    hidden_features: usize,
    /// Output size (constant metadata).
    out_features: usize,
}

impl<B: Backend> GatedResidualNetwork<B> {
    /// Performs the forward pass on a tensor of shape `(..., in_features)`,
    /// returning `(..., out_features)`.
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let hidden = self.elu_dense.forward(input.clone());
        let hidden = self.linear_dense.forward(hidden);

        let skip = match &self.projector {
            Some(projector) => projector.forward(input),
            None => input,
        };

        let output = skip + self.gated_linear_unit.forward(hidden);

        match &self.layer_norm {
            Some(layer_norm) => layer_norm.forward(output),
            None => output,
        }
    }

    /// Returns the number of input features.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Returns the number of hidden features.
    pub fn hidden_features(&self) -> usize {
        self.hidden_features
    }

    /// Returns the number of output features.
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// Returns whether a skip projector is present.
    pub fn has_projector(&self) -> bool {
        self.projector.is_some()
    }

    /// Returns whether output layer normalization is present.
    pub fn has_layer_norm(&self) -> bool {
        self.layer_norm.is_some()
    }
}
