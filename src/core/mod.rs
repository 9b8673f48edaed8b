pub mod analysis;
pub mod ballistics;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod sweep;
pub mod window;
