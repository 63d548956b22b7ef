//! Server-rendered pages.
//!
//! Every view is a pure function of the language context, the static catalog
//! and the page's own toggles. Views return HTML fragments; the
//! [`layout::Shell`] wraps them into a full document.

pub mod green_points;
pub mod home;
pub mod ideas;
pub mod layout;
pub mod map;
pub mod matching;
pub mod not_found;
pub mod onboarding;
pub mod profile;
pub mod resources;
pub mod services;
pub mod stories;

pub use layout::{Route, Shell, Theme};

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
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

/// Fill a single `{name}` placeholder and escape the result.
pub fn fill(template: &str, name: &str, value: &str) -> String {
    escape(&template.replace(&format!("{{{}}}", name), value))
}

/// Page heading with subtitle, shared by most pages.
pub(crate) fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="page-header"><h1>{}</h1><p class="muted">{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

pub(crate) fn badges(tags: &[&str], class: &str) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="{}">{}</span>"#, class, escape(tag)))
        .collect()
}
