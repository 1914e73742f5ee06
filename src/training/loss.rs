//! Loss functions for training.

use burn::tensor::{Tensor, backend::Backend};

/// Supported loss functions.
///
/// Gated residual network outputs are unbounded, so both losses here are
/// regression losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    /// Mean Squared Error loss.
    Mse,
    /// Mean Absolute Error loss.
    Mae,
}

impl Loss {
    /// Computes the loss between predictions and targets.
    pub fn compute<B: Backend>(
        &self,
        predictions: Tensor<B, 2>,
        targets: Tensor<B, 2>,
    ) -> Tensor<B, 1> {
        match self {
            Loss::Mse => {
                let diff = predictions - targets;
                let squared = diff.clone() * diff;
                squared.mean()
            }
            Loss::Mae => (predictions - targets).abs().mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_mse_loss_zero() {
        let device = <TestBackend as Backend>::Device::default();
        let predictions = Tensor::<TestBackend, 2>::from_floats([[1.0, 2.0], [3.0, 4.0]], &device);
        let targets = predictions.clone();

        let loss = Loss::Mse.compute(predictions, targets);
        let loss_value: f32 = loss.into_scalar();

        assert!(
            loss_value.abs() < 1e-6,
            "MSE of identical tensors should be 0"
        );
    }

    #[test]
    fn test_mse_loss_nonzero() {
        let device = <TestBackend as Backend>::Device::default();
        let predictions = Tensor::<TestBackend, 2>::from_floats([[1.0], [2.0]], &device);
        let targets = Tensor::<TestBackend, 2>::from_floats([[2.0], [2.0]], &device);

        let loss = Loss::Mse.compute(predictions, targets);
        let loss_value: f32 = loss.into_scalar();

        // MSE = mean((1-2)^2 + (2-2)^2) = 0.5
        assert!((loss_value - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_mae_loss() {
        let device = <TestBackend as Backend>::Device::default();
        let predictions = Tensor::<TestBackend, 2>::from_floats([[1.0], [4.0]], &device);
        let targets = Tensor::<TestBackend, 2>::from_floats([[2.0], [2.0]], &device);

        let loss = Loss::Mae.compute(predictions, targets);
        let loss_value: f32 = loss.into_scalar();

        // MAE = mean(|1-2| + |4-2|) = 1.5
        assert!((loss_value - 1.5).abs() < 1e-6);
    }
}
