//! # Field Key Normalization
//!
//! Callers may name a field in camelCase (`landingPage`) or snake_case
//! (`landing_page`). Both spellings resolve to the same canonical camelCase
//! field name.

use std::borrow::Cow;

/// Normalize a caller-supplied key to its canonical camelCase field name.
///
/// A key without `_` is returned unchanged. Otherwise the key is split on
/// `_`, the first segment is kept as-is, and every later segment has its
/// first letter upper-cased before the segments are joined.
///
/// ```
/// use assessment_core::normalize_key;
///
/// assert_eq!(normalize_key("organisation_type"), "organisationType");
/// assert_eq!(normalize_key("organisationType"), "organisationType");
/// ```
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if !key.contains('_') {
        return Cow::Borrowed(key);
    }

    let mut segments = key.split('_');
    let mut camel = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        camel.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            camel.extend(head.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    Cow::Owned(camel)
}

/// Convert a camelCase field name to its snake_case schema key.
///
/// An underscore is inserted wherever a lower-case ASCII letter is directly
/// followed by an upper-case ASCII letter, then the result is lower-cased.
pub fn camel_to_snake(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && previous_lower {
            snake.push('_');
        }
        previous_lower = c.is_ascii_lowercase();
        snake.push(c.to_ascii_lowercase());
    }
    snake
}
