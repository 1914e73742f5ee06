//! Gated linear unit: a learned value path scaled by a learned sigmoid gate.

use crate::errors::LayerError;
use crate::layers::{Activation, BlockOptions, DenseBlock, DenseBlockConfig};
use burn::{
    module::Module,
    tensor::{Tensor, backend::Backend},
};

/// Configuration for a [`GatedLinearUnit`].
#[derive(Debug, Clone)]
pub struct GatedLinearUnitConfig {
    /// Number of input features.
    pub input_size: usize,
    /// Number of output features.
    pub output_size: usize,
    /// Overrides for the gate path (defaults to linear + sigmoid).
    pub gate: BlockOptions,
    /// Overrides for the value path (defaults to linear, no activation).
    pub dense: BlockOptions,
}

impl GatedLinearUnitConfig {
    /// Creates a new GatedLinearUnitConfig with default gate and value paths.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            gate: BlockOptions::new(),
            dense: BlockOptions::new(),
        }
    }

    /// Sets the overrides for the gate path.
    pub fn with_gate(mut self, gate: BlockOptions) -> Self {
        self.gate = gate;
        self
    }

    /// Sets the overrides for the value path.
    pub fn with_dense(mut self, dense: BlockOptions) -> Self {
        self.dense = dense;
        self
    }

    /// Initializes the gated linear unit with the given device.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<GatedLinearUnit<B>, LayerError> {
        let gate = self
            .gate
            .resolve(
                DenseBlockConfig::new(self.input_size, self.output_size)
                    .with_activation(Activation::Sigmoid),
            )
            .init(device)?;

        let dense = self
            .dense
            .resolve(DenseBlockConfig::new(self.input_size, self.output_size))
            .init(device)?;

        Ok(GatedLinearUnit { gate, dense })
    }
}

/// A gated linear unit.
///
/// Forward computes `gate(x) * dense(x)` elementwise, mapping
/// `(..., input_size)` to `(..., output_size)`. With the default
/// configuration the gate is sigmoid-activated, so each output feature of
/// the value path is scaled into place by a learned factor in `(0, 1)`.
#[derive(Module, Debug)]
pub struct GatedLinearUnit<B: Backend> {
    /// Sigmoid-activated gate path.
    gate: DenseBlock<B>,
    /// Linear value path.
    dense: DenseBlock<B>,
}

impl<B: Backend> GatedLinearUnit<B> {
    /// Performs the forward pass.
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let gate = self.gate.forward(input.clone());
        let value = self.dense.forward(input);
        gate * value
    }

    /// Returns the input size of this unit.
    pub fn input_size(&self) -> usize {
        self.gate.input_size()
    }

    /// Returns the output size of this unit.
    pub fn output_size(&self) -> usize {
        self.gate.output_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_glu_forward_shape() {
        let device = <TestBackend as Backend>::Device::default();
        let glu: GatedLinearUnit<TestBackend> = GatedLinearUnitConfig::new(6, 4)
            .init(&device)
            .expect("GLU build should succeed");

        assert_eq!(glu.input_size(), 6);
        assert_eq!(glu.output_size(), 4);

        let input = Tensor::<TestBackend, 2>::zeros([5, 6], &device);
        let output = glu.forward(input);

        assert_eq!(output.dims(), [5, 4]);
    }

    #[test]
    fn test_glu_output_bounded_by_value_path() {
        let device = <TestBackend as Backend>::Device::default();
        let glu: GatedLinearUnit<TestBackend> = GatedLinearUnitConfig::new(3, 3)
            .init(&device)
            .expect("GLU build should succeed");

        let input =
            Tensor::<TestBackend, 2>::from_floats([[1.0, -2.0, 0.5], [0.0, 3.0, -1.0]], &device);

        let gated: Vec<f32> = glu.forward(input.clone()).to_data().to_vec().unwrap();
        let value: Vec<f32> = glu.dense.forward(input).to_data().to_vec().unwrap();

        // The sigmoid gate is in (0, 1), so the gated output never exceeds
        // the ungated value path in magnitude.
        for (g, v) in gated.iter().zip(value.iter()) {
            assert!(g.abs() <= v.abs() + 1e-6);
            assert!(g * v >= -1e-12, "gating must not flip the sign");
        }
    }

    #[test]
    fn test_glu_gate_override() {
        let device = <TestBackend as Backend>::Device::default();
        let glu: GatedLinearUnit<TestBackend> = GatedLinearUnitConfig::new(4, 4)
            .with_gate(BlockOptions::new().with_activation(Activation::Tanh))
            .init(&device)
            .expect("GLU build should succeed");

        assert_eq!(glu.gate.activation(), Activation::Tanh);
        assert_eq!(glu.dense.activation(), Activation::None);
    }
}
