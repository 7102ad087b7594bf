use thiserror::Error;

/// Errors produced while constructing a component.
///
/// All trait operations in this crate are infallible; the only failure mode
/// is handing a component an unusable configuration value at build time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ConfigError {
    pub fn invalid_config<S: ToString>(reason: S) -> Self {
        Self::InvalidConfig { reason: reason.to_string() }
    }
}
