//! Error types for gridbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridbook-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed cell reference, column letters, or a non-positive
    /// coordinate on a strict entry point
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Sheet lookup failed (unknown index, unknown name, or "ACTIVE"
    /// requested when the source reports no active sheet)
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The external parser failed to open or parse its input; carries
    /// the collaborator's diagnostic verbatim
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The external serializer failed to render or persist the grids
    #[error("Failed to render workbook: {0}")]
    RenderFailed(String),

    /// Operation outside the enumerated collaborator capability surface
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}
