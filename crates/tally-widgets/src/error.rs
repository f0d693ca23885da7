//! Error types for widget construction.

use tally_core::MountError;
use thiserror::Error;

/// Errors raised while building widgets from names and properties.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// No widget is registered under this name.
    #[error("unknown widget type: {0}")]
    UnknownKind(String),

    /// Properties do not decode into the widget's configuration.
    #[error("invalid props for {kind}: {message}")]
    InvalidProps {
        /// Widget type name
        kind: String,
        /// Decoder message
        message: String,
    },

    /// Two widgets of one view share an id.
    #[error("duplicate widget id: {0}")]
    DuplicateId(String),

    /// The host refused an operation.
    #[error(transparent)]
    Mount(#[from] MountError),
}
