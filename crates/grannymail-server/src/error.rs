//! HTTP error types for the GrannyMail website server.
//!
//! Maps page-resolution errors into HTTP responses. A missing page renders
//! the site's HTML not-found document. A method other than `GET`/`HEAD` on a
//! page path gets the same empty-bodied 405 Axum sends for the page routes.

use std::sync::LazyLock;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use grannymail_pages::layout::SiteMeta;
use grannymail_pages::{PageError, not_found};

/// The not-found page has no canonical link, so the site origin never
/// appears in it and a single copy serves every configuration.
static NOT_FOUND_PAGE: LazyLock<String> = LazyLock::new(|| not_found::render(&SiteMeta::default()));

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No page is served at the requested path.
    #[error("no page at '{0}'")]
    NotFound(String),
    /// The request method is not supported on an existing page.
    #[error("method {0} is not allowed")]
    MethodNotAllowed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(path) => {
                tracing::debug!(path = %path, "page not found");
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE.as_str())).into_response()
            }
            Self::MethodNotAllowed(method) => {
                tracing::debug!(method = %method, "method not allowed");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, HeaderValue::from_static("GET,HEAD"))],
                )
                    .into_response()
            }
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::UnknownRoute { path } => Self::NotFound(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_maps_to_not_found() {
        let err = AppError::from(PageError::UnknownRoute {
            path: "/nope".to_owned(),
        });
        assert!(matches!(err, AppError::NotFound(ref p) if p == "/nope"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_lists_allowed_methods() {
        let resp = AppError::MethodNotAllowed("POST".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[header::ALLOW], "GET,HEAD");
    }
}
