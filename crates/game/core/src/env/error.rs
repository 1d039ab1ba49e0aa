//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required collaborator is missing from the env.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MapOracle is not available in the environment.
    #[error("MapOracle not available")]
    MapNotAvailable,

    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// ActionProvider is not available in the environment.
    #[error("ActionProvider not available")]
    ProviderNotAvailable,

    /// FovOracle is not available in the environment.
    #[error("FovOracle not available")]
    FovNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            ProviderNotAvailable => "ORACLE_PROVIDER_NOT_AVAILABLE",
            FovNotAvailable => "ORACLE_FOV_NOT_AVAILABLE",
        }
    }
}
