//! Error taxonomy for the render entry points.

use thiserror::Error;

/// Errors surfaced by the renderers. Every variant is caller misuse,
/// fatal to the current render call, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("field name resolved to an empty string")]
    InvalidName,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("model expression is missing or empty")]
    NullExpression,
}
