use crate::types::DbId;

/// Domain error taxonomy shared by every catalog read.
///
/// The `Display` output of each variant is the message sent to clients, so
/// the data-access variants deliberately carry no detail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {field} is invalid")]
    InvalidInput { field: &'static str },

    #[error("Movie with ID {0} not found")]
    TitleNotFound(DbId),

    #[error("Contributor with ID {0} not found")]
    ContributorNotFound(DbId),

    #[error("Internal Server Error")]
    DataProvider,

    #[error("Internal Server Error")]
    PoolNotReady,
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidInput`].
    pub fn invalid(field: &'static str) -> Self {
        Self::InvalidInput { field }
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::TitleNotFound(_) | Self::ContributorNotFound(_) => 404,
            Self::DataProvider | Self::PoolNotReady => 500,
        }
    }

    /// Application error code carried in the error body.
    pub fn error_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 1000,
            Self::TitleNotFound(_) => 1001,
            Self::ContributorNotFound(_) => 1002,
            Self::DataProvider => 501,
            Self::PoolNotReady => 502,
        }
    }
}
