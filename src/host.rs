//! Capability surface of the embedding host.
//!
//! The engine receives everything it needs from the host through
//! [`HostContext`] at invocation start; there is no global host
//! singleton. Each trait is one suspension point of the original design:
//! network I/O and font acquisition may block or yield inside the host,
//! while traversal and mutation stay synchronous on this side of the
//! boundary.

use thiserror::Error;

/// Failure fetching a style source or calling the kit service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request completed with a non-success status.
    #[error("fetching '{url}' returned status {status}")]
    Status { url: String, status: u16 },
    /// The request never completed.
    #[error("fetching '{url}' failed: {message}")]
    Transport { url: String, message: String },
}

/// Failure loading a font resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("font '{family} {style}' could not be loaded: {message}")]
pub struct FontError {
    pub family: String,
    pub style: String,
    pub message: String,
}

/// Retrieves remote style sources.
pub trait SourceFetcher {
    /// Fetches a URL expected to return text content.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// POSTs a JSON body and returns the response body.
    fn post_json(&self, url: &str, body: &str) -> Result<String, FetchError>;
}

/// Loads font resources by family and style before they are used.
///
/// Each load is independent and side-effect-free; hosts may satisfy
/// several loads concurrently behind this seam.
pub trait FontLoader {
    fn load(&self, family: &str, style: &str) -> Result<(), FontError>;
}

/// The host's user-facing surface: one notification per invocation,
/// then session termination.
pub trait HostUi {
    /// Emits a user-visible notification string.
    fn notify(&mut self, message: &str);

    /// Ends the plugin session.
    fn close(&mut self);
}

/// Everything the engine may touch in the host, bundled per invocation.
pub struct HostContext<'a> {
    pub fetcher: &'a dyn SourceFetcher,
    pub fonts: &'a dyn FontLoader,
    pub ui: &'a mut dyn HostUi,
}
