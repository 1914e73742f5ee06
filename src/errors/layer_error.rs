//! Layer construction error types.

use thiserror::Error;

/// Errors that can occur while building a layer from its configuration.
///
/// Shape mismatches at forward time are surfaced by Burn itself and are not
/// translated here.
#[derive(Debug, Error)]
pub enum LayerError {
    #[error(
        "in_features must be the same as out_features when not using a projector layer, \
         in_features: {in_features}, out_features: {out_features}"
    )]
    ResidualDimensionMismatch {
        in_features: usize,
        out_features: usize,
    },

    #[error("dropout probability must be in [0, 1), got {probability}")]
    InvalidDropout { probability: f64 },
}
