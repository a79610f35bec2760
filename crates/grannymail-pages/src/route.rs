//! The site's route table.
//!
//! Maps request paths to pages. Both the HTTP server and the static export
//! walk [`Route::ALL`], so a page added here is served and exported.

use std::fmt;

use crate::error::PageError;
use crate::layout::{PageMeta, SiteMeta};
use crate::{landing, policy};

/// A page served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: product pitch.
    Landing,
    /// `/privacy-policy`: legal notice.
    PrivacyPolicy,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 2] = [Route::Landing, Route::PrivacyPolicy];

    /// Canonical request path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::PrivacyPolicy => "/privacy-policy",
        }
    }

    /// Document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => landing::TITLE,
            Self::PrivacyPolicy => policy::TITLE,
        }
    }

    /// Description meta text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Landing => landing::DESCRIPTION,
            Self::PrivacyPolicy => policy::DESCRIPTION,
        }
    }

    /// Head metadata for the page's document.
    #[must_use]
    pub const fn meta(self) -> PageMeta<'static> {
        PageMeta {
            title: self.title(),
            description: self.description(),
            canonical_path: Some(self.path()),
        }
    }

    /// File the page is written to in a static export, relative to the
    /// export root.
    #[must_use]
    pub const fn export_path(self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::PrivacyPolicy => "privacy-policy/index.html",
        }
    }

    /// Resolve a request path.
    ///
    /// Accepts the canonical path with or without a single trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnknownRoute`] if no page is served at `path`.
    pub fn from_path(path: &str) -> Result<Self, PageError> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| PageError::UnknownRoute {
                path: path.to_owned(),
            })
    }

    /// Render the full page document.
    #[must_use]
    pub fn render(self, site: &SiteMeta) -> String {
        match self {
            Self::Landing => landing::render(site),
            Self::PrivacyPolicy => policy::render(site),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
