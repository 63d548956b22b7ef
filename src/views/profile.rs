use serde::Deserialize;

use crate::catalog::DEMO_COMPANY;
use crate::i18n::{LanguageContext, ProfileStrings};
use crate::toast::Toast;

use super::{escape, page_header, Route, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Company,
    Resources,
    Settings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Company, ProfileTab::Resources, ProfileTab::Settings];

    pub fn slug(&self) -> &'static str {
        match self {
            ProfileTab::Company => "company",
            ProfileTab::Resources => "resources",
            ProfileTab::Settings => "settings",
        }
    }

    fn label(&self, strings: &ProfileStrings) -> &'static str {
        match self {
            ProfileTab::Company => strings.tab_company,
            ProfileTab::Resources => strings.tab_resources,
            ProfileTab::Settings => strings.tab_settings,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileQuery {
    pub tab: Option<String>,
}

impl ProfileQuery {
    /// Active tab; unknown values fall back to the company tab.
    pub fn tab(&self) -> ProfileTab {
        self.tab
            .as_deref()
            .and_then(|slug| ProfileTab::ALL.into_iter().find(|tab| tab.slug() == slug))
            .unwrap_or_default()
    }
}

/// How the demo session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOut {
    LoggedOut,
    Deactivated,
}

impl SignOut {
    pub fn toast(&self, strings: &ProfileStrings) -> Toast {
        match self {
            SignOut::LoggedOut => Toast::info(strings.logged_out_title, strings.logged_out_text),
            SignOut::Deactivated => {
                Toast::destructive(strings.deactivated_title, strings.deactivated_text)
            }
        }
    }
}

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().profile.title
}

pub fn render(ctx: &LanguageContext, theme: Theme, query: &ProfileQuery) -> String {
    let strings = &ctx.strings().profile;
    let active = query.tab();

    let tabs: String = ProfileTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active { "tab active" } else { "tab" };
            format!(
                r#"<a class="{}" href="{}?tab={}">{}</a>"#,
                class,
                Route::Profile.path(),
                tab.slug(),
                escape(tab.label(strings))
            )
        })
        .collect();

    let panel = match active {
        ProfileTab::Company => company_panel(strings),
        ProfileTab::Resources => resources_panel(strings),
        ProfileTab::Settings => settings_panel(strings, theme),
    };

    format!(
        r#"{}
<div class="card company-summary"><span class="glyph">🏭</span><div><h2>{}</h2><p class="muted">{} • {}</p></div><span class="badge success">✓ {}</span></div>
<nav class="tabs">{}</nav>
<section class="card tab-panel">{}</section>"#,
        page_header(strings.title, strings.subtitle),
        escape(DEMO_COMPANY.name),
        escape(DEMO_COMPANY.sector),
        escape(DEMO_COMPANY.city),
        escape(ctx.strings().common.verified),
        tabs,
        panel
    )
}

/// Confirmation page shown after log out or deactivation.
pub fn render_signed_out(ctx: &LanguageContext, outcome: SignOut) -> String {
    let strings = &ctx.strings().profile;
    let heading = match outcome {
        SignOut::LoggedOut => strings.logged_out_title,
        SignOut::Deactivated => strings.deactivated_title,
    };

    format!(
        r#"<section class="card signed-out"><h1>{}</h1><p class="muted">{}</p></section>"#,
        escape(heading),
        escape(strings.redirecting)
    )
}

fn field(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{}<input name="{}" value="{}"></label>"#,
        escape(label),
        name,
        escape(value)
    )
}

fn company_panel(strings: &ProfileStrings) -> String {
    format!(
        r#"<form class="profile-form">{}{}{}{}{}
<button type="reset" class="button button-outline">{}</button>
<button type="button" class="button">{}</button>
</form>"#,
        field(strings.company_name, "company_name", DEMO_COMPANY.name),
        field(strings.sector, "sector", DEMO_COMPANY.sector),
        field(strings.email, "email", DEMO_COMPANY.email),
        field(strings.phone, "phone", DEMO_COMPANY.phone),
        field(strings.address, "address", DEMO_COMPANY.address),
        escape(strings.cancel),
        escape(strings.save)
    )
}

fn resources_panel(strings: &ProfileStrings) -> String {
    let listed = strings
        .listed
        .replace("{age}", DEMO_COMPANY.listed_age)
        .replace("{views}", &DEMO_COMPANY.listed_views.to_string());

    format!(
        r#"<h3>{}</h3><button class="button">{}</button>
<div class="card listing"><h4>{}</h4><p class="muted">{}</p><p class="muted">{}</p>
<button class="button button-outline">{}</button>
<button class="button button-outline destructive">{}</button></div>"#,
        escape(strings.your_resources),
        escape(strings.add_resource),
        escape(DEMO_COMPANY.listed_resource),
        escape(DEMO_COMPANY.listed_detail),
        escape(&listed),
        escape(strings.edit),
        escape(strings.remove)
    )
}

fn settings_panel(strings: &ProfileStrings, theme: Theme) -> String {
    let current = match theme {
        Theme::Light => strings.light_mode,
        Theme::Dark => strings.dark_mode,
    };

    format!(
        r#"<h3>{account}</h3>
<div class="setting"><h4>{theme_label}</h4><p class="muted">{current}</p>
<form method="post" action="/profile/theme"><button type="submit" class="button button-outline">{toggle}</button></form></div>
<div class="setting"><h4>{notifications}</h4><p class="muted">{notifications_text}</p>
<button class="button button-outline">{configure}</button></div>
<form method="post" action="/profile/logout"><button type="submit" class="button button-outline">{log_out}</button></form>
<div class="setting danger"><h4 class="destructive">{danger}</h4><p class="muted">{danger_text}</p>
<form method="post" action="/profile/deactivate"><button type="submit" class="button destructive">{deactivate}</button></form></div>"#,
        account = escape(strings.account_settings),
        theme_label = escape(strings.theme),
        current = escape(current),
        toggle = escape(strings.toggle_theme),
        notifications = escape(strings.notifications),
        notifications_text = escape(strings.notifications_text),
        configure = escape(strings.configure_notifications),
        log_out = escape(strings.log_out),
        danger = escape(strings.danger_zone),
        danger_text = escape(strings.danger_text),
        deactivate = escape(strings.deactivate),
    )
}
