//! Training loop implementation.

use super::TrainingConfig;
use crate::layers::GatedResidualNetwork;
use burn::{
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{ElementConversion, Tensor, backend::AutodiffBackend},
};

/// Training result containing the trained model and metrics.
#[derive(Debug)]
pub struct TrainingResult<B: AutodiffBackend> {
    /// The trained model.
    pub model: GatedResidualNetwork<B>,
    /// Loss values per epoch.
    pub loss_history: Vec<f32>,
}

/// Trains a gated residual network using the Adam optimizer.
///
/// Inputs and targets are row-per-sample; the whole dataset is used as a
/// single batch each epoch.
pub fn train<B: AutodiffBackend>(
    model: GatedResidualNetwork<B>,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
    config: &TrainingConfig,
    device: &B::Device,
) -> TrainingResult<B> {
    let num_samples = inputs.len();
    let input_size = inputs.first().map(|v| v.len()).unwrap_or(0);
    let output_size = targets.first().map(|v| v.len()).unwrap_or(0);

    // Convert data to tensors
    let input_data: Vec<f32> = inputs.iter().flat_map(|v| v.iter().copied()).collect();
    let target_data: Vec<f32> = targets.iter().flat_map(|v| v.iter().copied()).collect();

    let input_tensor = Tensor::<B, 1>::from_floats(input_data.as_slice(), device)
        .reshape([num_samples, input_size]);
    let target_tensor = Tensor::<B, 1>::from_floats(target_data.as_slice(), device)
        .reshape([num_samples, output_size]);

    // Initialize optimizer
    let optimizer_config = AdamConfig::new();
    let mut optimizer = optimizer_config.init();

    let mut current_model = model;
    let mut loss_history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        // Forward pass
        let predictions = current_model.forward(input_tensor.clone());

        // Compute loss
        let loss = config.loss.compute(predictions, target_tensor.clone());
        let loss_value: f32 = loss.clone().into_scalar().elem();
        loss_history.push(loss_value);

        if config.verbose && (epoch % 10 == 0 || epoch == config.epochs - 1) {
            log::info!(
                "Epoch {}/{}: loss = {:.6}",
                epoch + 1,
                config.epochs,
                loss_value
            );
        }

        // Backward pass
        let grads = loss.backward();
        let grads_params = GradientsParams::from_grads(grads, &current_model);

        // Update model parameters
        current_model = optimizer.step(config.learning_rate, current_model, grads_params);
    }

    TrainingResult {
        model: current_model,
        loss_history,
    }
}
