use thiserror::Error;

use stockpad_core::DomainError;

use crate::config::ConfigError;
use crate::navigation::Screen;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("`{action}` is not available on the {screen} screen")]
    NotAvailable { action: &'static str, screen: Screen },

    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("failed to serialize products: {0}")]
    Serialize(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Serialize(value.to_string())
    }
}
