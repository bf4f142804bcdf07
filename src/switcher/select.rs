//! `<select>` markup construction for the version dropdown

use tracing::warn;

use crate::switcher::registry::VersionRegistry;

/// Build the `<select>` markup for the version dropdown.
///
/// Emits one `<option>` per registry entry in display order. The entry
/// matching `current_version` is marked selected and shows `current_release`
/// as its text, so the dropdown can display a precise release string (e.g.
/// "0.13.1") even though the registry only tracks coarse versions ("0.13").
/// All interpolated text is HTML-escaped.
///
/// If `current_version` is not in the registry, no option is selected.
pub fn build_version_select(
    registry: &VersionRegistry,
    current_version: &str,
    current_release: &str,
) -> String {
    if !registry.contains(current_version) {
        warn!(
            "Current version {} is not in the version registry; no option will be selected",
            current_version
        );
    }

    let mut buf = String::from("<select>");
    for (identifier, label) in registry.iter() {
        if identifier == current_version {
            buf.push_str(&format!(
                r#"<option value="{}" selected="selected">{}</option>"#,
                escape_html(identifier),
                escape_html(current_release)
            ));
        } else {
            buf.push_str(&format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(identifier),
                escape_html(label)
            ));
        }
    }
    buf.push_str("</select>");
    buf
}

/// Escape text for interpolation into HTML markup
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
