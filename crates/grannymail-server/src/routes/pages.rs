//! Page routes.
//!
//! Serves every [`Route`] at its canonical path. Paths that resolve to a
//! page only after trimming a trailing slash redirect to the canonical path;
//! anything else renders the not-found page, whatever the method.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use grannymail_pages::Route;

use crate::error::AppError;
use crate::state::AppState;

/// Build the page router.
pub fn router() -> Router<Arc<AppState>> {
    Route::ALL
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path(), get(page))
        })
        .fallback(fallback)
}

async fn page(State(state): State<Arc<AppState>>, uri: Uri) -> Result<Response, AppError> {
    let route = Route::from_path(uri.path())?;
    Ok(serve(&state, route))
}

async fn fallback(method: Method, uri: Uri) -> Result<Response, AppError> {
    let route = Route::from_path(uri.path())?;
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    tracing::debug!(from = %uri.path(), to = %route, "redirecting to canonical path");
    Ok(Redirect::permanent(route.path()).into_response())
}

fn serve(state: &AppState, route: Route) -> Response {
    (
        [(header::CACHE_CONTROL, state.cache_control.clone())],
        Html(state.page(route)),
    )
        .into_response()
}
