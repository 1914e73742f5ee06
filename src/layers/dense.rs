//! Dense block: linear transform with optional activation and dropout.
//!
//! Every sub-layer of the gated network blocks is built from this one unit.

use crate::errors::LayerError;
use crate::layers::Activation;
use burn::{
    module::Module,
    nn::{Dropout, DropoutConfig, Linear, LinearConfig},
    tensor::{Tensor, backend::Backend},
};

/// Per-slot overrides for a dense block.
///
/// This is the explicit counterpart of an open-ended keyword mapping: every
/// field left unset means "use the owning layer's documented default". The
/// owning layer merges the options over its defaults with
/// [`BlockOptions::resolve`].
#[derive(Debug, Clone, Default)]
pub struct BlockOptions {
    /// Activation override; `None` keeps the owner's default.
    pub activation: Option<Activation>,
    /// Dropout probability override; `None` keeps the owner's default.
    /// Setting `Some(0.0)` disables dropout explicitly.
    pub dropout: Option<f64>,
    /// Bias override; `None` keeps the owner's default (bias enabled).
    pub bias: Option<bool>,
}

impl BlockOptions {
    /// Creates empty options (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    /// Overrides the dropout probability.
    pub fn with_dropout(mut self, probability: f64) -> Self {
        self.dropout = Some(probability);
        self
    }

    /// Overrides whether the linear transform carries a bias.
    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = Some(bias);
        self
    }

    /// Merges these options over a default configuration.
    pub fn resolve(&self, default: DenseBlockConfig) -> DenseBlockConfig {
        DenseBlockConfig {
            activation: self.activation.unwrap_or(default.activation),
            dropout: self.dropout.or(default.dropout),
            bias: self.bias.unwrap_or(default.bias),
            ..default
        }
    }
}

/// Configuration for a dense block.
#[derive(Debug, Clone)]
pub struct DenseBlockConfig {
    /// Number of input features.
    pub input_size: usize,
    /// Number of output features.
    pub output_size: usize,
    /// Activation function to apply after the linear transformation.
    pub activation: Activation,
    /// Dropout probability applied after the activation, if any.
    pub dropout: Option<f64>,
    /// Whether the linear transform carries a bias.
    pub bias: bool,
}

impl DenseBlockConfig {
    /// Creates a new DenseBlockConfig: plain linear transform, no activation,
    /// no dropout.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            activation: Activation::None,
            dropout: None,
            bias: true,
        }
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the dropout probability.
    pub fn with_dropout(mut self, probability: f64) -> Self {
        self.dropout = Some(probability);
        self
    }

    /// Sets whether the linear transform carries a bias.
    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    /// Initializes the dense block with the given device.
    ///
    /// Fails if the dropout probability is outside `[0, 1)`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<DenseBlock<B>, LayerError> {
        let dropout = match self.dropout {
            Some(p) if !(0.0..1.0).contains(&p) => {
                return Err(LayerError::InvalidDropout { probability: p });
            }
            // Zero probability would still scale activations during training.
            Some(p) if p > 0.0 => Some(DropoutConfig::new(p).init()),
            _ => None,
        };

        let linear = LinearConfig::new(self.input_size, self.output_size)
            .with_bias(self.bias)
            .init(device);

        Ok(DenseBlock {
            linear,
            dropout,
            input_size: self.input_size,
            output_size: self.output_size,
            activation_id: self.activation.to_id(),
        })
    }
}

/// A dense block: linear transform, optional activation, optional dropout.
///
/// It performs: output = dropout(activation(input @ weights.T + bias)).
/// Dropout only has an effect on autodiff (training) backends; on inference
/// backends Burn's `Dropout` is the identity.
#[derive(Module, Debug)]
pub struct DenseBlock<B: Backend> {
    /// The underlying linear transformation.
    linear: Linear<B>,
    /// Optional dropout applied after the activation.
    dropout: Option<Dropout>,
    /// Input size (constant metadata).
    input_size: usize,
    /// Output size (constant metadata).
    output_size: usize,
    /// Activation function ID (see `Activation::to_id`).
    activation_id: u8,
}

impl<B: Backend> DenseBlock<B> {
    /// Performs the forward pass on a tensor of shape `(..., input_size)`,
    /// returning `(..., output_size)`.
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let output = self.linear.forward(input);
        let output = Activation::from_id(self.activation_id).apply(output);
        match &self.dropout {
            Some(dropout) => dropout.forward(output),
            None => output,
        }
    }

    /// Returns the input size of this block.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the output size of this block.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Returns the activation function.
    pub fn activation(&self) -> Activation {
        Activation::from_id(self.activation_id)
    }

    /// Returns whether dropout is configured.
    pub fn has_dropout(&self) -> bool {
        self.dropout.is_some()
    }
}
