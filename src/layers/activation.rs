//! Activation functions for neural network layers.

use burn::tensor::{Tensor, backend::Backend};
use serde::{Deserialize, Serialize};

/// Supported activation functions.
///
/// These cover the activations the gated network blocks are configured with;
/// anything Burn does not provide directly (ELU) is computed from tensor
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Activation {
    /// No activation (identity function).
    #[default]
    None,
    /// Rectified Linear Unit: f(x) = max(0, x)
    Relu,
    /// Sigmoid: f(x) = 1 / (1 + exp(-x))
    Sigmoid,
    /// Hyperbolic tangent: f(x) = tanh(x)
    Tanh,
    /// Exponential Linear Unit: f(x) = x for x > 0, else exp(x) - 1
    Elu,
    /// Gaussian Error Linear Unit: f(x) = x * 0.5 * (1 + erf(x / sqrt(2)))
    Gelu,
    /// Softmax normalization (across last dimension)
    Softmax,
}

impl Activation {
    /// Applies the activation function to a tensor.
    pub fn apply<B: Backend, const D: usize>(&self, tensor: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::None => tensor,
            Activation::Relu => burn::tensor::activation::relu(tensor),
            Activation::Sigmoid => burn::tensor::activation::sigmoid(tensor),
            Activation::Tanh => burn::tensor::activation::tanh(tensor),
            Activation::Elu => {
                // x for x > 0, else exp(x) - 1 (alpha = 1)
                let mask = tensor.clone().greater_elem(0.0);
                let negative = tensor.clone().exp() - 1.0;
                // mask_where: where mask is true, use second arg; else keep self
                negative.mask_where(mask, tensor)
            }
            Activation::Gelu => burn::tensor::activation::gelu(tensor),
            Activation::Softmax => burn::tensor::activation::softmax(tensor, D - 1),
        }
    }

    /// Converts activation to a numeric ID for storage in Module.
    pub fn to_id(&self) -> u8 {
        match self {
            Activation::None => 0,
            Activation::Relu => 1,
            Activation::Sigmoid => 2,
            Activation::Tanh => 3,
            Activation::Elu => 4,
            Activation::Gelu => 5,
            Activation::Softmax => 6,
        }
    }

    /// Creates an Activation from a numeric ID.
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Activation::None,
            1 => Activation::Relu,
            2 => Activation::Sigmoid,
            3 => Activation::Tanh,
            4 => Activation::Elu,
            5 => Activation::Gelu,
            6 => Activation::Softmax,
            _ => Activation::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_activation_id_roundtrip() {
        let activations = [
            Activation::None,
            Activation::Relu,
            Activation::Sigmoid,
            Activation::Tanh,
            Activation::Elu,
            Activation::Gelu,
            Activation::Softmax,
        ];
        for act in activations {
            assert_eq!(Activation::from_id(act.to_id()), act);
        }
    }

    #[test]
    fn test_elu_activation() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-2.0, -1.0, 0.0, 1.0, 2.0], &device);
        let output = Activation::Elu.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        // ELU(-2) = exp(-2)-1 ≈ -0.8647, ELU(-1) = exp(-1)-1 ≈ -0.6321,
        // ELU(0) = exp(0)-1 = 0, ELU(1) = 1, ELU(2) = 2
        assert!((result[0] - (-0.8647)).abs() < 1e-3);
        assert!((result[1] - (-0.6321)).abs() < 1e-3);
        assert!((result[2] - 0.0).abs() < 1e-5);
        assert!((result[3] - 1.0).abs() < 1e-5);
        assert!((result[4] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_elu_is_continuous_at_zero() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-1e-4, 1e-4], &device);
        let output = Activation::Elu.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert!((result[0] - result[1]).abs() < 1e-3);
    }

    #[test]
    fn test_sigmoid_activation_range() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-10.0, 0.0, 10.0], &device);
        let output = Activation::Sigmoid.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert!(result[0] < 0.001);
        assert!((result[1] - 0.5).abs() < 1e-5);
        assert!(result[2] > 0.999);
    }

    #[test]
    fn test_none_activation_is_identity() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-1.5, 0.0, 2.5], &device);
        let output = Activation::None.apply(input.clone());
        let expected: Vec<f32> = input.to_data().to_vec().unwrap();
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert_eq!(result, expected);
    }
}
