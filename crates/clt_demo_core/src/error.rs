use std::fmt;

/// Errors raised while configuring or recomputing the demo
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A `DemoConfig` field is out of its allowed range
    InvalidConfig(String),
    /// Distribution parameters rejected by `rand_distr`
    InvalidParameters {
        distribution: &'static str,
        mean: f64,
        std_dev: f64,
        reason: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidConfig(msg) => write!(f, "configuration error: {msg}"),
            CoreError::InvalidParameters {
                distribution,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {distribution} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
