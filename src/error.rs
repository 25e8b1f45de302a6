// error.rs - Library error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::geometry::FeatureError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid feature: {0}")]
    Feature(#[from] FeatureError),
}
