//! Privacy policy page at `/privacy-policy`.
//!
//! The policy text is generated by an external legal-template service and
//! compiled in verbatim. It is emitted as-is: never parsed, rewritten or
//! combined with anything decided at runtime.

use crate::layout::{self, SiteMeta};
use crate::route::Route;
use crate::markup::Markup;

/// The privacy policy markup, embedded at build time.
pub const POLICY_HTML: &str = include_str!("../assets/privacy_policy.html");

/// Contact address named in the policy.
pub const CONTACT_EMAIL: &str = "dominique.c.a.paul@gmail.com";

/// Revision date printed in the policy header.
pub const LAST_UPDATED: &str = "January 22, 2024";

pub(crate) const TITLE: &str = "Privacy Policy - GrannyMail";

pub(crate) const DESCRIPTION: &str =
    "How GrannyMail collects, stores, uses and shares your information.";

const WRAPPER_CLASS: &str = "mb-48 pt-16 sm:mt-40 flex flex-col items-center justify-center";

const POLICY_OPEN: &str = "<div class=\"policy\">";
const POLICY_CLOSE: &str = "</div>";

/// Body fragment of the policy page.
#[must_use]
pub fn content() -> Markup {
    let policy = Markup::concat([
        Markup::trusted(POLICY_OPEN),
        Markup::trusted(POLICY_HTML),
        Markup::trusted(POLICY_CLOSE),
    ]);
    layout::width_wrapper(Some(WRAPPER_CLASS), &policy)
}

/// Full policy page document.
#[must_use]
pub fn render(site: &SiteMeta) -> String {
    layout::document(site, &Route::PrivacyPolicy.meta(), &content())
}
