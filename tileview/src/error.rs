use alloc::string::String;

use thiserror::Error;

/// Failure reported by a [`crate::SlotBinder`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("no template configured")]
    NoTemplate,
}

/// Rejected engine operation.
///
/// Both variants are recoverable: the engine state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TileViewError {
    #[error("tile view is not ready (missing items or template)")]
    NotReady,

    #[error("tile view has been destroyed")]
    Destroyed,
}
