//! Navigation shell wrapped around every page.

use crate::i18n::{LanguageContext, LanguageRegistry, NavStrings};
use crate::toast::Toast;

use super::escape;

pub const BRAND: &str = "CircularFlow";

/// Every routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Onboarding,
    Resources,
    Matching,
    Map,
    GreenPoints,
    Ideas,
    Services,
    Stories,
    Profile,
}

/// Links shown in the navigation bar, in display order.
pub const NAVIGATION: [Route; 8] = [
    Route::Home,
    Route::Map,
    Route::Resources,
    Route::GreenPoints,
    Route::Ideas,
    Route::Services,
    Route::Stories,
    Route::Profile,
];

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Onboarding,
        Route::Resources,
        Route::Matching,
        Route::Map,
        Route::GreenPoints,
        Route::Ideas,
        Route::Services,
        Route::Stories,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Onboarding => "/onboarding",
            Route::Resources => "/resources",
            Route::Matching => "/matching",
            Route::Map => "/map",
            Route::GreenPoints => "/green-points",
            Route::Ideas => "/ideas",
            Route::Services => "/services",
            Route::Stories => "/stories",
            Route::Profile => "/profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Navigation label. Pages outside the navigation bar have none.
    pub fn nav_label(&self, nav: &NavStrings) -> Option<&'static str> {
        match self {
            Route::Home => Some(nav.home),
            Route::Map => Some(nav.map),
            Route::Resources => Some(nav.resources),
            Route::GreenPoints => Some(nav.green_points),
            Route::Ideas => Some(nav.ideas),
            Route::Services => Some(nav.services),
            Route::Stories => Some(nav.stories),
            Route::Profile => Some(nav.profile),
            Route::Onboarding | Route::Matching => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_cookie(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Document frame: head, navigation bar, toast region and main content.
///
/// `target` is the path and query the visitor returns to after switching
/// language, so it must reproduce the page as it is shown.
#[derive(Debug, Clone)]
pub struct Shell<'a> {
    ctx: &'a LanguageContext,
    theme: Theme,
    target: &'a str,
    toasts: Vec<Toast>,
    refresh: Option<(u64, &'static str)>,
}

impl<'a> Shell<'a> {
    pub fn new(ctx: &'a LanguageContext, theme: Theme, target: &'a str) -> Self {
        Self {
            ctx,
            theme,
            target,
            toasts: Vec::new(),
            refresh: None,
        }
    }

    pub fn with_toast(mut self, toast: Option<Toast>) -> Self {
        self.toasts.extend(toast);
        self
    }

    /// Redirect to `target` after `delay_secs` via `meta refresh`.
    pub fn with_refresh(mut self, delay_secs: u64, target: &'static str) -> Self {
        self.refresh = Some((delay_secs, target));
        self
    }

    pub fn render(&self, title: &str, body: &str) -> String {
        let language = self.ctx.language();
        let refresh = self
            .refresh
            .map(|(delay, target)| {
                format!(
                    r#"<meta http-equiv="refresh" content="{}; url={}">"#,
                    delay,
                    escape(target)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}" class="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>{title} · {brand}</title>
<style>{css}</style>
</head>
<body>
<nav class="navbar">
<a class="brand" href="/">♻ {brand}</a>
<div class="nav-links">{links}</div>
{language_form}
</nav>
{toasts}
<main>
{body}
</main>
</body>
</html>
"#,
            lang = language.code(),
            dir = self.ctx.direction().as_html(),
            theme = self.theme.as_str(),
            refresh = refresh,
            title = escape(title),
            brand = BRAND,
            css = STYLESHEET,
            links = self.nav_links(),
            language_form = self.language_form(),
            toasts = self.toast_region(),
            body = body,
        )
    }

    fn nav_links(&self) -> String {
        let nav = &self.ctx.strings().nav;
        let path = self
            .target
            .split_once('?')
            .map_or(self.target, |(path, _)| path);
        let active = Route::from_path(path);

        NAVIGATION
            .iter()
            .filter_map(|route| route.nav_label(nav).map(|label| (route, label)))
            .map(|(route, label)| {
                let class = if active == Some(*route) {
                    "nav-link active"
                } else {
                    "nav-link"
                };
                format!(
                    r#"<a class="{}" href="{}">{}</a>"#,
                    class,
                    route.path(),
                    escape(label)
                )
            })
            .collect()
    }

    fn language_form(&self) -> String {
        let current = self.ctx.language().code();
        let options: String = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| {
                let selected = if lang.code == current { " selected" } else { "" };
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    lang.code,
                    selected,
                    escape(lang.native_name)
                )
            })
            .collect();
        let common = &self.ctx.strings().common;

        format!(
            r#"<form class="language-form" method="post" action="/language">
<label>{label} <select name="lang">{options}</select></label>
<input type="hidden" name="return_to" value="{return_to}">
<button type="submit">{apply}</button>
</form>"#,
            label = escape(common.language),
            options = options,
            return_to = escape(self.target),
            apply = escape(common.apply),
        )
    }

    fn toast_region(&self) -> String {
        if self.toasts.is_empty() {
            return String::new();
        }

        let items: String = self
            .toasts
            .iter()
            .map(|toast| {
                format!(
                    r#"<div class="{}" role="status"><strong>{}</strong><p>{}</p></div>"#,
                    toast.variant.css_class(),
                    escape(toast.title),
                    escape(toast.description)
                )
            })
            .collect();

        format!(
            r#"<section class="toasts" aria-label="{}">{}</section>"#,
            escape(self.ctx.strings().common.notifications),
            items
        )
    }
}

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f5f8f6;color:#14231c}\
html.dark body{background:#0f1914;color:#e6efe9}\
.navbar{display:flex;align-items:center;gap:1rem;padding:.75rem 2rem;border-bottom:1px solid #d5e0d9}\
.brand{font-weight:700;font-size:1.25rem;text-decoration:none;color:inherit}\
.nav-links{display:flex;gap:.25rem;flex:1}\
.nav-link{padding:.5rem 1rem;border-radius:.5rem;text-decoration:none;color:#5b6e64}\
.nav-link.active{background:#1f6f4a;color:#fff}\
main{max-width:80rem;margin:0 auto;padding:2rem}\
.muted{color:#5b6e64}\
.card{background:#fff;border:1px solid #d5e0d9;border-radius:.75rem;padding:1.5rem;margin-bottom:1.5rem}\
html.dark .card{background:#16241d;border-color:#24382e}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}\
.badge{display:inline-block;border:1px solid #d5e0d9;border-radius:999px;padding:.1rem .6rem;margin:.1rem;font-size:.75rem}\
.badge-secondary{background:#e8efeb}\
.success{color:#1f8a4c}\
.destructive{color:#c0392b}\
.button{display:inline-block;padding:.5rem 1rem;border-radius:.5rem;background:#2aa36b;color:#fff;text-decoration:none;border:0}\
.button-outline{background:transparent;color:inherit;border:1px solid #d5e0d9}\
.toasts{position:fixed;right:1rem;bottom:1rem;display:flex;flex-direction:column;gap:.5rem}\
.toast{background:#fff;border:1px solid #d5e0d9;border-radius:.5rem;padding:.75rem 1rem;box-shadow:0 4px 12px #0002}\
.toast-destructive{background:#c0392b;color:#fff}\
.hidden{display:none}\
.map{position:relative;height:600px;overflow:hidden}\
.marker{position:absolute;transform:translate(-50%,-50%);border-radius:999px;color:#fff;font-weight:700;text-decoration:none;display:flex;align-items:center;justify-content:center}\
.red{background:#e74c3c}.blue{background:#3498db}.green{background:#27ae60}.yellow{background:#f1c40f}\
.steps{display:flex;justify-content:space-between;margin-bottom:2rem}\
.step{text-align:center}.step.reached .step-index{background:#2aa36b;color:#fff}\
.step-index{display:inline-flex;width:2.5rem;height:2.5rem;border-radius:999px;align-items:center;justify-content:center;background:#e8efeb}\
.field-error{color:#c0392b;font-size:.875rem}\
";
