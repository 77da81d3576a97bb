use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid trial count: {requested} (must be a positive integer)")]
    InvalidTrialCount { requested: usize },

    #[error("Invalid demand distribution (mean {mean}, std dev {std_dev}): {reason}")]
    InvalidDemand {
        mean: f64,
        std_dev: f64,
        reason: String,
    },

    #[error("Invalid parameter '{field}': {value} (must be finite and non-negative)")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
