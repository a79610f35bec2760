//! Landing page: the product pitch at `/`.
//!
//! A hero block (status badge, headline, subheadline) inside the width
//! wrapper, followed by a purely decorative gradient shape behind the page.

use crate::layout::{self, SiteMeta};
use crate::route::Route;
use crate::markup::Markup;

/// Status badge text.
pub const BADGE_TEXT: &str = "GrannyMail is currently in closed alpha.";

/// Headline as plain text.
pub const HEADLINE: &str = "Record a voice memo. Send it as a letter.";

/// Subheadline paragraph.
pub const SUBHEADLINE: &str = "Effortlessly create and send physical letters from your telegram and whatsapp chat - simply record, edit, and mail, all without leaving the chat.";

pub(crate) const TITLE: &str = "GrannyMail - Send voice memos as letters";

pub(crate) const DESCRIPTION: &str = SUBHEADLINE;

const HERO_CLASS: &str = "mb-12 pt-16 sm:mt-40 flex flex-col items-center justify-center text-center";

const BADGE: &str = r#"<div class="mx-auto mt-4 mb-4 flex max-w-fit items-center justify-center space-x-2 overflow-hidden rounded-full border border-gray-200 bg-white px-7 py-2 shadow-md backdrop-blur transition-all hover:border-gray-300 hover:bg-white-50"><p class="text-sm font-semibold text-gray-700">GrannyMail is currently in closed alpha.</p></div>"#;

const HEADING: &str = r#"<h1 class="max-w-4xl text-5xl font-bold md:text-6xl lg:text-7xl">Record a voice memo. Send it as a <span class="text-orange-600">letter</span>.</h1>"#;

const SUBHEADING: &str = r#"<p class="mt-5 max-w-prose text-zinc-700 sm:text-lg">Effortlessly create and send physical letters from your telegram and whatsapp chat - simply record, edit, and mail, all without leaving the chat.</p>"#;

const BACKGROUND: &str = r#"<div class="relative isolate"><div aria-hidden="true" class="pointer-events-none absolute inset-x-0 -top-30 -z-10 transform-gpu overflow-hidden blur-3xl sm:-top-80"><div class="backdrop-shape relative aspect-1155-678 -translate-x-1-2 rotate-30 bg-gradient-to-tr from-pink to-indigo opacity-30" style="clip-path: polygon(74.1% 44.1%, 100% 61.6%, 97.5% 26.9%, 85.5% 0.1%, 80.7% 2%, 72.5% 32.5%, 60.2% 62.4%, 52.4% 68.1%, 47.5% 58.3%, 45.2% 34.5%, 27.5% 76.7%, 0.1% 64.9%, 17.9% 100%, 27.6% 76.8%, 76.1% 97.7%, 74.1% 44.1%)"></div></div></div>"#;

/// Body fragment of the landing page.
#[must_use]
pub fn content() -> Markup {
    let hero = layout::width_wrapper(
        Some(HERO_CLASS),
        &Markup::concat([
            Markup::trusted(BADGE),
            Markup::trusted(HEADING),
            Markup::trusted(SUBHEADING),
        ]),
    );
    Markup::concat([hero, Markup::trusted(BACKGROUND)])
}

/// Full landing page document.
#[must_use]
pub fn render(site: &SiteMeta) -> String {
    layout::document(site, &Route::Landing.meta(), &content())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strip_tags(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn exactly_one_heading_with_tagline() {
        let html = render(&SiteMeta::default());
        assert_eq!(html.matches("<h1").count(), 1);
        let start = html.find("<h1").unwrap();
        let end = html.find("</h1>").unwrap() + "</h1>".len();
        assert_eq!(strip_tags(&html[start..end]), HEADLINE);
    }

    #[test]
    fn heading_emphasises_letter() {
        assert!(HEADING.contains(r#"<span class="text-orange-600">letter</span>"#));
    }

    #[test]
    fn one_subheading_and_one_badge() {
        let body = content();
        let s = body.as_str();
        assert_eq!(s.matches(SUBHEADLINE).count(), 1);
        assert_eq!(s.matches(BADGE_TEXT).count(), 1);
        assert_eq!(s.matches("rounded-full").count(), 1);
    }

    #[test]
    fn blocks_render_badge_then_heading_then_subheading() {
        let body = content();
        let s = body.as_str();
        let badge = s.find(BADGE_TEXT).unwrap();
        let heading = s.find("<h1").unwrap();
        let sub = s.find(SUBHEADLINE).unwrap();
        assert!(badge < heading && heading < sub);
    }

    #[test]
    fn hero_sits_inside_width_wrapper() {
        let body = content();
        let expected = format!(
            "<div class=\"{}\">",
            layout::merge_classes(layout::WIDTH_CONSTRAINT_CLASS, Some(HERO_CLASS))
        );
        assert!(body.as_str().starts_with(&expected));
    }

    #[test]
    fn background_is_decorative() {
        let body = content();
        let s = body.as_str();
        let bg = s.find("aria-hidden=\"true\"").unwrap();
        assert!(bg > s.find("</h1>").unwrap());
        assert!(s.contains("pointer-events-none"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let site = SiteMeta::default();
        let first = render(&site);
        for _ in 0..5 {
            assert_eq!(render(&site), first);
        }
    }

    #[test]
    fn page_text_matches_marketing_copy() {
        let text = strip_tags(&render(&SiteMeta::default()));
        assert!(text.contains("Record a voice memo"));
        assert!(text.contains("GrannyMail is currently in closed alpha."));
    }
}
