//! Umbrella error for callers that drive a whole run (inputs, sweep, charts).

use thiserror::Error;

use crate::core::ballistics::InputError;
use crate::core::charts::ChartError;
use crate::core::config::ConfigError;
use crate::core::sweep::SweepError;

#[derive(Debug, Error)]
pub enum PlotterError {
    #[error("invalid launch inputs: {0}")]
    Input(#[from] InputError),
    #[error("time sweep failed: {0}")]
    Sweep(#[from] SweepError),
    #[error("chart rendering failed: {0}")]
    Chart(#[from] ChartError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
