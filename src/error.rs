//! Aggregate error for one engine invocation.

use thiserror::Error;

use crate::color::InvalidColorFormat;
use crate::compose::{ComposeError, TemplateLayoutError};
use crate::host::{FetchError, FontError};

/// Everything that can fail an apply-styles invocation, one variant per
/// pipeline stage.
///
/// Malformed CSS is deliberately absent: the style-source parser
/// degrades to partial rules instead of failing.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The style source or kit service could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A color value could not be decoded.
    #[error(transparent)]
    Color(#[from] InvalidColorFormat),
    /// The kit response was not a valid payload.
    #[error("kit payload could not be parsed: {0}")]
    Payload(#[from] serde_json::Error),
    /// A required font resource could not be loaded.
    #[error(transparent)]
    Font(#[from] FontError),
    /// A post template or one of its required layers was missing.
    #[error(transparent)]
    Template(#[from] TemplateLayoutError),
}

impl From<ComposeError> for ApplyError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::Layout(layout) => ApplyError::Template(layout),
            ComposeError::Font(font) => ApplyError::Font(font),
        }
    }
}
