//! Library error types.

use thiserror::Error;

/// Errors surfaced by the grid components.
#[derive(Debug, Error)]
pub enum GridError {
    /// A candidate child type has no entry in the page type registry.
    /// The registry is expected to be self-consistent; this is a
    /// configuration error, not a recoverable runtime condition.
    #[error("unknown page type: {0}")]
    UnknownType(String),

    /// Submitted grid state was missing, unparsable, or incomplete.
    #[error("malformed grid state: {0}")]
    MalformedState(String),

    /// Fragment rendering failed.
    #[error("render error")]
    Render(#[from] anyhow::Error),

    /// The downstream page-creation workflow failed. The cause is passed
    /// through unchanged and never interpreted here.
    #[error("page creation failed")]
    Workflow(#[source] anyhow::Error),
}

/// Result type alias using [`GridError`].
pub type GridResult<T> = Result<T, GridError>;
