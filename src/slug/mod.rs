//! Title to URL slug derivation.

/// Derive a URL-safe slug from a display title.
///
/// Keeps ASCII letters and digits (lowercased), turns every run of whitespace and hyphens into a
/// single hyphen, drops everything else, and trims hyphens from both ends. Hyphens survive so
/// that a slug maps to itself.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}
