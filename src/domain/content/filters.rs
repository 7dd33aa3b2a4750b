//! Markup filters applied to content on the way out.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_ATTRIBUTE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"(width|height)="\d*"\s"#).ok());

/// Removes hard-coded `width`/`height` attributes from image markup so
/// the front end can size images responsively.
///
/// Only attributes followed by whitespace are removed, matching how the
/// editor emits them (`<img width="300" height="200" src=...>`).
pub fn strip_size_attributes(html: &str) -> String {
    match SIZE_ATTRIBUTE.as_ref() {
        Some(re) => re.replace_all(html, "").into_owned(),
        None => html.to_string(),
    }
}
