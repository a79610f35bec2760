//! Error types for `grannymail-pages`.
//!
//! Rendering itself cannot fail; errors only come from resolving a request
//! path to a page and from writing the exported site to disk.

use std::path::PathBuf;

/// Errors from resolving pages.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No page is served at the requested path.
    #[error("no page is served at '{path}'")]
    UnknownRoute { path: String },
}

/// Errors from exporting the site as static files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An output directory could not be created.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered page could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
