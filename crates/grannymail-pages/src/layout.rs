//! Shared layout: the width wrapper and the HTML document shell.
//!
//! Every page is a body fragment placed inside [`document`]. Content that
//! should line up with the rest of the site goes through [`width_wrapper`],
//! which applies [`WIDTH_CONSTRAINT_CLASS`] and any extra classes the caller
//! passes.

use crate::markup::{Markup, escape_html};
use crate::policy;

/// Classes that constrain content to the site's maximum width, centred, with
/// responsive horizontal padding.
pub const WIDTH_CONSTRAINT_CLASS: &str = "mx-auto w-full max-w-screen-xl px-2.5 md:px-20";

/// Default public origin of the site.
pub const DEFAULT_SITE_URL: &str = "https://www.grannymail.io";

const SITE_NAME: &str = "GrannyMail";

const STYLESHEET: &str = include_str!("../assets/site.css");

/// Site-wide settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    base_url: String,
}

impl SiteMeta {
    /// Build site settings for the given public origin.
    ///
    /// Trailing slashes are trimmed so paths can be appended directly.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_SITE_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self { base_url }
    }

    /// Public origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a site path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let mut url = String::with_capacity(self.base_url.len().saturating_add(path.len()));
        url.push_str(&self.base_url);
        url.push_str(path);
        url
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

/// Per-page head metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta<'a> {
    /// Text for `<title>`.
    pub title: &'a str,
    /// Text for the description meta tag.
    pub description: &'a str,
    /// Site path used for the canonical link, or `None` for pages without one.
    pub canonical_path: Option<&'a str>,
}

/// Merge `extra` classes into `base`.
///
/// Base classes come first, followed by extra classes not already present,
/// in their original order. Whitespace is normalised. A missing, empty or
/// blank `extra` yields the base classes alone.
#[must_use]
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in base
        .split_whitespace()
        .chain(extra.unwrap_or_default().split_whitespace())
    {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// Wrap `content` in a container constrained to the site width.
///
/// `content` is emitted unchanged. `class` adds to the width constraint and
/// never replaces it.
#[must_use]
pub fn width_wrapper(class: Option<&str>, content: &Markup) -> Markup {
    let classes = merge_classes(WIDTH_CONSTRAINT_CLASS, class);
    let classes = escape_html(&classes);

    let mut html =
        String::with_capacity(content.len().saturating_add(classes.len()).saturating_add(24));
    html.push_str("<div class=\"");
    html.push_str(&classes);
    html.push_str("\">");
    html.push_str(content.as_str());
    html.push_str("</div>");
    Markup::from_built(html)
}

/// Render a complete HTML document around `body`.
#[must_use]
pub fn document(site: &SiteMeta, meta: &PageMeta<'_>, body: &Markup) -> String {
    let mut html = String::with_capacity(body.len().saturating_add(STYLESHEET.len()).saturating_add(2048));

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"/>");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>");

    html.push_str("<title>");
    html.push_str(&escape_html(meta.title));
    html.push_str("</title>");

    html.push_str("<meta name=\"description\" content=\"");
    html.push_str(&escape_html(meta.description));
    html.push_str("\"/>");

    html.push_str("<meta property=\"og:site_name\" content=\"");
    html.push_str(SITE_NAME);
    html.push_str("\"/>");

    if let Some(path) = meta.canonical_path {
        html.push_str("<link rel=\"canonical\" href=\"");
        html.push_str(&escape_html(&site.url_for(path)));
        html.push_str("\"/>");
    }

    html.push_str("<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style></head>\n<body class=\"min-h-screen antialiased\">\n<main>");
    html.push_str(body.as_str());
    html.push_str("</main>\n");
    html.push_str(footer().as_str());
    html.push_str("\n</body></html>\n");
    html
}

fn footer() -> Markup {
    let mut inner = String::with_capacity(256);
    inner.push_str("<span>&copy; ");
    inner.push_str(SITE_NAME);
    inner.push_str("</span><nav class=\"flex space-x-2\"><a href=\"/\">Home</a>");
    inner.push_str("<a href=\"/privacy-policy\">Privacy Policy</a>");
    inner.push_str("<a href=\"mailto:");
    inner.push_str(policy::CONTACT_EMAIL);
    inner.push_str("\">Contact</a></nav>");

    let wrapped = width_wrapper(
        Some("flex items-center justify-between py-6 text-sm text-zinc-700"),
        &Markup::from_built(inner),
    );

    let mut html = String::with_capacity(wrapped.len().saturating_add(48));
    html.push_str("<footer class=\"border-t border-gray-200\">");
    html.push_str(wrapped.as_str());
    html.push_str("</footer>");
    Markup::from_built(html)
}
