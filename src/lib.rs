pub mod core;

pub use crate::core::ballistics::{KinematicSummary, LaunchInputs, STANDARD_GRAVITY_MPS2};
pub use crate::core::error::PlotterError;
