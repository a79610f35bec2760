//! Shared application state for the website server.
//!
//! Page rendering is deterministic, so every page is rendered once when the
//! state is built and handlers hand out cheap clones of the same bytes.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use tracing::debug;

use grannymail_pages::{Route, SiteMeta};

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Site-wide settings the pages were rendered with.
    pub site: SiteMeta,
    /// `Cache-Control` value sent with every page.
    pub cache_control: HeaderValue,
    pages: HashMap<Route, Bytes>,
}

impl AppState {
    /// Render every page for `site`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `Cache-Control` value cannot be encoded as a
    /// header.
    pub fn new(site: SiteMeta, cache_max_age_secs: u64) -> Result<Self, InvalidHeaderValue> {
        let cache_control = if cache_max_age_secs == 0 {
            HeaderValue::from_static("no-cache")
        } else {
            HeaderValue::try_from(format!("public, max-age={cache_max_age_secs}"))?
        };

        let pages = Route::ALL
            .into_iter()
            .map(|route| {
                let html = route.render(&site);
                debug!(route = %route, bytes = html.len(), "page rendered");
                (route, Bytes::from(html))
            })
            .collect();

        Ok(Self {
            site,
            cache_control,
            pages,
        })
    }

    /// Rendered document for `route`.
    #[must_use]
    pub fn page(&self, route: Route) -> Bytes {
        // Every route is rendered in `new`.
        self.pages.get(&route).cloned().unwrap_or_default()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("site", &self.site)
            .field("cache_control", &self.cache_control)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prerenders_every_route() {
        let site = SiteMeta::default();
        let state = AppState::new(site.clone(), 60).unwrap();
        for route in Route::ALL {
            assert_eq!(state.page(route), Bytes::from(route.render(&site)));
        }
    }

    #[test]
    fn cache_control_reflects_max_age() {
        let state = AppState::new(SiteMeta::default(), 60).unwrap();
        assert_eq!(state.cache_control, "public, max-age=60");

        let state = AppState::new(SiteMeta::default(), 0).unwrap();
        assert_eq!(state.cache_control, "no-cache");
    }
}
