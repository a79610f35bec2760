//! Page shown for any path the site does not serve.

use crate::layout::{self, PageMeta, SiteMeta};
use crate::markup::Markup;

pub(crate) const TITLE: &str = "404: This page could not be found - GrannyMail";

const BODY: &str = r#"<p class="text-5xl font-bold">404</p><p class="mt-5 text-zinc-700 sm:text-lg">This page could not be found.</p><p class="mt-5"><a class="text-orange-600" href="/">Back to GrannyMail</a></p>"#;

/// Body fragment of the not-found page.
#[must_use]
pub fn content() -> Markup {
    layout::width_wrapper(
        Some("mb-48 pt-16 sm:mt-40 flex flex-col items-center justify-center text-center"),
        &Markup::trusted(BODY),
    )
}

/// Full not-found document. Carries no canonical link.
#[must_use]
pub fn render(site: &SiteMeta) -> String {
    let meta = PageMeta {
        title: TITLE,
        description: "This page could not be found.",
        canonical_path: None,
    };
    layout::document(site, &meta, &content())
}
