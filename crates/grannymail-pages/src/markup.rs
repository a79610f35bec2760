//! Rendered HTML fragments.
//!
//! [`Markup`] is the unit every page component produces and consumes. Raw
//! markup can only enter through [`Markup::trusted`], which accepts nothing
//! but `&'static str`: content compiled into the binary. Anything decided at
//! runtime goes through [`Markup::text`] and is escaped.

use std::borrow::Cow;
use std::fmt;

/// An HTML fragment that is safe to emit verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Markup(Cow<'static, str>);

impl Markup {
    /// Wrap build-time constant markup without escaping it.
    #[must_use]
    pub const fn trusted(html: &'static str) -> Self {
        Self(Cow::Borrowed(html))
    }

    /// Escape `text` so it renders as literal characters.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(Cow::Owned(escape_html(text).into_owned()))
    }

    /// Join fragments in order.
    #[must_use]
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        let mut out = String::new();
        for part in parts {
            out.push_str(part.as_str());
        }
        Self(Cow::Owned(out))
    }

    /// Markup assembled inside this crate from already-safe pieces.
    pub(crate) fn from_built(html: String) -> Self {
        Self(Cow::Owned(html))
    }

    /// The fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the fragment in bytes.
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The policy fragment alone is ~150 KiB.
        f.debug_struct("Markup")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Escape the five HTML-significant characters.
///
/// Returns the input borrowed when nothing needs escaping.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len().saturating_add(16));
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
