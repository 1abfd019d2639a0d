use thiserror::Error;

/// Main error type for the pod usage reporter
#[derive(Error, Debug)]
pub enum UsageError {
    /// Kubernetes API errors
    #[error("Kubernetes error: {0}")]
    Kubernetes(#[from] KubernetesError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Quantity parsing or unit errors outside of pod aggregation
    #[error("Quantity error: {0}")]
    Quantity(#[from] QuantityError),

    /// Quantity errors raised while aggregating one pod's containers
    #[error("Pod {pod}: {source}")]
    Pod { pod: String, source: QuantityError },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from parsing, adding, or converting resource quantities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// The raw string is not digits followed by a unit suffix
    #[error("Invalid quantity {input:?}: expected digits followed by a unit suffix")]
    Parse { input: String },

    /// Addition attempted between two different unit labels
    #[error("Unit mismatch: cannot add {right:?} to {left:?}")]
    UnitMismatch { left: String, right: String },

    /// Conversion requested for a unit with no known factor
    #[error("No conversion factor for unit {unit:?}")]
    UnsupportedUnit { unit: String },
}

/// Kubernetes-specific errors
#[derive(Error, Debug)]
pub enum KubernetesError {
    /// API server connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// API error
    #[error("API error: {0}")]
    ApiError(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Helper type alias for Results
pub type Result<T, E = UsageError> = std::result::Result<T, E>;
