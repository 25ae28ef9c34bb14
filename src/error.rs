//! Crate-level error type for the page controllers.

use crate::backend::BackendError;
use crate::config::ConfigError;

/// Failures a page controller can hit while building a response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no item id in the page address")]
    MissingItemId,
}
