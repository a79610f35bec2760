//! GrannyMail website server.
//!
//! Hosts the pages rendered by `grannymail-pages` on an Axum server: the
//! landing page at `/`, the privacy policy at `/privacy-policy`, and a
//! health check at `/healthz`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
