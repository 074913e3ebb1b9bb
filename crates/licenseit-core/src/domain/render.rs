//! Placeholder substitution.
//!
//! Templates carry two literal markers, `{author}` and `{date}`. There is no
//! escaping and no other syntax: anything that is not exactly one of the two
//! markers, including a lone `{` or `}`, is copied through untouched.

use chrono::Datelike;

/// Marker replaced by the author name.
pub const AUTHOR_TOKEN: &str = "{author}";

/// Marker replaced by the date string.
pub const DATE_TOKEN: &str = "{date}";

/// Context for template rendering.
///
/// A value object holding the two substitution values. Immutable after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    author: String,
    date: String,
}

impl RenderContext {
    pub fn new(author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
        }
    }

    /// Context dated with the current local year.
    pub fn this_year(author: impl Into<String>) -> Self {
        Self::new(author, current_year())
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Render a template body by replacing `{author}` and `{date}`.
    ///
    /// # Algorithm
    ///
    /// One left-to-right scan. At each `{` the two markers are tried; a match
    /// emits the value and skips past the marker, anything else emits the
    /// brace and moves on by one byte. Replacement values are never scanned
    /// again, so an author named `{date}` stays `{date}` in the output.
    ///
    /// # Edge Cases
    ///
    /// - `{unknown}` → remains as literal `{unknown}`
    /// - `{author}{author}` → both replaced
    /// - `{{author}}` → outer braces preserved, inner replaced
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(idx) = rest.find('{') {
            out.push_str(&rest[..idx]);
            let tail = &rest[idx..];

            if let Some(after) = tail.strip_prefix(AUTHOR_TOKEN) {
                out.push_str(&self.author);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(DATE_TOKEN) {
                out.push_str(&self.date);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}

/// The current local year, e.g. `"2026"`.
pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new("Jane Doe", "2024")
    }

    #[test]
    fn replaces_both_tokens() {
        assert_eq!(
            ctx().render("Copyright {date} {author}"),
            "Copyright 2024 Jane Doe"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            ctx().render("{author}, {author} ({date}/{date})"),
            "Jane Doe, Jane Doe (2024/2024)"
        );
    }

    #[test]
    fn stray_braces_pass_through() {
        let body = "fn main() { let x = {}; } {authors} {date {author";
        assert_eq!(ctx().render(body), body);
    }

    #[test]
    fn doubled_braces_keep_outer_pair() {
        assert_eq!(ctx().render("{{author}}"), "{Jane Doe}");
    }

    #[test]
    fn body_without_tokens_is_unchanged() {
        let body = "Permission is hereby granted, free of charge.\n";
        assert_eq!(ctx().render(body), body);
    }

    #[test]
    fn replacement_never_creates_new_match() {
        let tricky = RenderContext::new("{date}", "{author}");
        assert_eq!(tricky.render("{author} / {date}"), "{date} / {author}");
    }

    #[test]
    fn substitution_order_does_not_matter() {
        let a = RenderContext::new("A", "D").render("{date}{author}{date}");
        assert_eq!(a, "DAD");
    }

    #[test]
    fn second_render_is_a_no_op() {
        let once = ctx().render("(c) {date} {author}");
        assert_eq!(ctx().render(&once), once);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            RenderContext::new("Zoë Ångström", "2024").render("© {date} {author} — ✓"),
            "© 2024 Zoë Ångström — ✓"
        );
    }

    #[test]
    fn current_year_is_four_digits() {
        let year = current_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
