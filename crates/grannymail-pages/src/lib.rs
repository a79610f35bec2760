//! Pages of the GrannyMail website.
//!
//! Renders the landing page and the privacy policy as complete HTML
//! documents. Everything here is pure: the same inputs always produce the
//! same bytes, and nothing touches the network. The only I/O lives in
//! [`export`], which writes the rendered site to disk.

pub mod error;
pub mod export;
pub mod landing;
pub mod layout;
pub mod markup;
pub mod not_found;
pub mod policy;
pub mod route;

pub use error::{ExportError, PageError};
pub use layout::{SiteMeta, WIDTH_CONSTRAINT_CLASS, width_wrapper};
pub use markup::Markup;
pub use route::Route;
