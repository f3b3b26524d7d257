use candlelens_core::AnalyzeError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] candlelens_core::ValidationError),

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Analyze(AnalyzeError::EmptySymbol) => 2,
            Self::Analyze(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
