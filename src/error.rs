use thiserror::Error;

/// Failures raised by the statistics core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Sample is empty.")]
    EmptySample,

    #[error("Non-finite value at position {index}: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// The small-sample correction divides by `n - k - 1`.
    #[error("Score undefined: n={} must exceed k+1={}", .n, .k + 1)]
    DegenerateSample { n: usize, k: usize },

    #[error("Score undefined: log-likelihood is not finite")]
    NonFiniteScore,
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// Prefix the message with where the failure happened (e.g. a file path).
    pub fn context(self, what: impl std::fmt::Display) -> Self {
        Self {
            exit_code: self.exit_code,
            message: format!("{what}: {}", self.message),
        }
    }
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        let exit_code = match err {
            StatsError::EmptySample => 3,
            StatsError::NonFiniteValue { .. } => 2,
            StatsError::DegenerateSample { .. } | StatsError::NonFiniteScore => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
