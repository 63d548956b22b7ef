//! HTTP handlers.
//!
//! Every handler resolves the visitor's language and theme from cookies,
//! renders a view and wraps it in the navigation shell. Nothing is stored
//! between requests.

use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        uri::PathAndQuery,
        HeaderMap, StatusCode, Uri,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::AppError;
use crate::i18n::LanguageContext;
use crate::state::AppState;
use crate::views::{
    green_points, home, ideas, map, matching, not_found, onboarding, profile, resources,
    services, stories, Route, Shell, Theme,
};
use crate::wizard::{OnboardingDraft, Wizard, WizardAction, WizardInputError, WizardState};

pub const LANGUAGE_COOKIE: &str = "lang";
pub const THEME_COOKIE: &str = "theme";

// ==================== Request Context ====================

/// Value of the named cookie, if the request carries it.
pub fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn request_context(state: &AppState, headers: &HeaderMap) -> (LanguageContext, Theme) {
    let ctx = LanguageContext::resolve(
        cookie(headers, LANGUAGE_COOKIE),
        state.config.default_language,
    );
    let theme = Theme::from_cookie(cookie(headers, THEME_COOKIE));
    (ctx, theme)
}

/// Local path to return to after a settings change; anything else goes home.
pub fn safe_return_path(path: &str) -> &str {
    let local = path.starts_with('/') && !path.starts_with("//");
    let plain = path.chars().all(|c| c.is_ascii_graphic() && c != '\\');

    if local && plain {
        path
    } else {
        Route::Home.path()
    }
}

fn set_cookie(name: &str, value: &str) -> String {
    format!("{}={}; Path=/; SameSite=Lax", name, value)
}

/// Path and query of the request, as the language form should return to it.
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or_else(|| uri.path())
}

fn page(ctx: &LanguageContext, theme: Theme, uri: &Uri, title: &str, body: &str) -> Html<String> {
    Html(Shell::new(ctx, theme, request_target(uri)).render(title, body))
}

// ==================== Pages ====================

pub async fn home_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, home::title(&ctx), &home::render(&ctx))
}

pub async fn resources_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<resources::ResourcesQuery>,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(
        &ctx,
        theme,
        &uri,
        resources::title(&ctx),
        &resources::render(&ctx, &query),
    )
}

pub async fn matching_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, matching::title(&ctx), &matching::render(&ctx))
}

pub async fn map_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<map::MapQuery>,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, map::title(&ctx), &map::render(&ctx, &query))
}

pub async fn green_points_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(
        &ctx,
        theme,
        &uri,
        green_points::title(&ctx),
        &green_points::render(&ctx),
    )
}

pub async fn ideas_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, ideas::title(&ctx), &ideas::render(&ctx))
}

pub async fn services_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, services::title(&ctx), &services::render(&ctx))
}

pub async fn stories_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(&ctx, theme, &uri, stories::title(&ctx), &stories::render(&ctx))
}

pub async fn profile_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<profile::ProfileQuery>,
) -> Html<String> {
    let (ctx, theme) = request_context(&state, &headers);
    page(
        &ctx,
        theme,
        &uri,
        profile::title(&ctx),
        &profile::render(&ctx, theme, &query),
    )
}

pub async fn not_found_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    debug!("No route for {}", uri.path());
    let (ctx, theme) = request_context(&state, &headers);
    let html = Shell::new(&ctx, theme, request_target(&uri))
        .render(not_found::title(&ctx), &not_found::render(&ctx));

    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

// ==================== Onboarding ====================

/// A fresh wizard, or one reopened from the query a language switch returns to.
pub async fn onboarding_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(form): Query<OnboardingForm>,
) -> Result<Html<String>, AppError> {
    let (ctx, theme) = request_context(&state, &headers);
    let wizard = form.into_resumed()?;

    Ok(page(
        &ctx,
        theme,
        &uri,
        onboarding::title(&ctx),
        &onboarding::render(&ctx, &wizard, &[]),
    ))
}

/// One wizard submission: the step being shown, the button pressed and the
/// whole draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingForm {
    #[serde(default)]
    pub step: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal: String,
    #[serde(default)]
    pub resources: String,
}

impl OnboardingForm {
    /// Rebuild the wizard this form was rendered from. `action` is ignored.
    pub fn into_resumed(self) -> Result<Wizard, WizardInputError> {
        let state = WizardState::from_param(&self.step)?;
        let draft = OnboardingDraft {
            resources: OnboardingDraft::parse_resources(&self.resources)?,
            company_name: self.company_name,
            sector: self.sector,
            email: self.email,
            address: self.address,
            city: self.city,
            postal: self.postal,
        };

        Ok(Wizard::restore(state, draft))
    }

    /// Rebuild the wizard this form was rendered from, plus the requested action.
    pub fn into_wizard(self) -> Result<(Wizard, WizardAction), WizardInputError> {
        let action = self.action.parse::<WizardAction>();
        let wizard = self.into_resumed()?;
        Ok((wizard, action?))
    }
}

/// `GET /onboarding` target that reopens `wizard` at its state with its draft.
pub fn resume_target(wizard: &Wizard) -> String {
    let draft = wizard.draft();
    let state = wizard.state().param();
    let resources = draft.resources_param();
    let params = [
        ("step", state.as_str()),
        ("company_name", draft.company_name.as_str()),
        ("sector", draft.sector.as_str()),
        ("email", draft.email.as_str()),
        ("address", draft.address.as_str()),
        ("city", draft.city.as_str()),
        ("postal", draft.postal.as_str()),
        ("resources", resources.as_str()),
    ];

    let query = params
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", Route::Onboarding.path(), query)
}

pub async fn onboarding_submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<OnboardingForm>,
) -> Result<Html<String>, AppError> {
    let (ctx, theme) = request_context(&state, &headers);
    let (mut wizard, action) = form.into_wizard()?;

    let feedback = wizard.apply(action, &ctx.strings().onboarding);
    match wizard.state() {
        WizardState::Completed => info!("Onboarding completed for '{}'", wizard.draft().company_name),
        WizardState::Step(step) => debug!("Onboarding action '{}' left wizard at {:?}", action, step),
    }

    let body = onboarding::render(&ctx, &wizard, &feedback.errors);
    let target = resume_target(&wizard);
    Ok(Html(
        Shell::new(&ctx, theme, &target)
            .with_toast(feedback.toast)
            .render(onboarding::title(&ctx), &body),
    ))
}

// ==================== Settings ====================

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
    #[serde(default)]
    pub return_to: String,
}

pub async fn switch_language(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Result<Response, AppError> {
    let (mut ctx, _) = request_context(&state, &headers);
    let previous = ctx.language();
    ctx.set_language(&form.lang)?;

    let code = ctx.language().code();
    info!("Language switched from {} to {}", previous.code(), code);

    Ok((
        [(SET_COOKIE, set_cookie(LANGUAGE_COOKIE, code))],
        Redirect::to(safe_return_path(&form.return_to)),
    )
        .into_response())
}

pub async fn toggle_theme(headers: HeaderMap) -> Response {
    let theme = Theme::from_cookie(cookie(&headers, THEME_COOKIE)).toggled();
    debug!("Theme switched to {}", theme.as_str());

    (
        [(SET_COOKIE, set_cookie(THEME_COOKIE, theme.as_str()))],
        Redirect::to("/profile?tab=settings"),
    )
        .into_response()
}

fn signed_out(state: &AppState, headers: &HeaderMap, outcome: profile::SignOut) -> Html<String> {
    let (ctx, theme) = request_context(state, headers);
    let strings = &ctx.strings().profile;
    info!("Demo session ended: {:?}", outcome);

    Html(
        Shell::new(&ctx, theme, Route::Profile.path())
            .with_toast(Some(outcome.toast(strings)))
            .with_refresh(state.config.redirect_delay_secs, Route::Home.path())
            .render(profile::title(&ctx), &profile::render_signed_out(&ctx, outcome)),
    )
}

pub async fn log_out(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    signed_out(&state, &headers, profile::SignOut::LoggedOut)
}

pub async fn deactivate(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    signed_out(&state, &headers, profile::SignOut::Deactivated)
}

// ==================== Health ====================

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use crate::wizard::{ResourceKind, WizardStep};

    fn headers(cookie_header: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie_header).unwrap());
        headers
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_cookie_lookup() {
        let headers = headers("theme=dark; lang=fr");
        assert_eq!(cookie(&headers, "lang"), Some("fr"));
        assert_eq!(cookie(&headers, "theme"), Some("dark"));
        assert_eq!(cookie(&headers, "session"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let headers = headers("xlang=ar");
        assert_eq!(cookie(&headers, "lang"), None);
    }

    #[test]
    fn test_request_context_falls_back_to_default() {
        let state = AppState {
            config: crate::config::Config::default(),
        };
        let (ctx, theme) = request_context(&state, &headers("lang=zz; theme=dark"));

        assert_eq!(ctx.language(), state.config.default_language);
        assert_eq!(theme, Theme::Dark);
    }

    // ==================== Return Path Tests ====================

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path("/map"), "/map");
        assert_eq!(safe_return_path("/resources?filters=open"), "/resources?filters=open");
        assert_eq!(safe_return_path(""), "/");
        assert_eq!(safe_return_path("https://evil.example"), "/");
        assert_eq!(safe_return_path("//evil.example"), "/");
        assert_eq!(safe_return_path("/\\evil.example"), "/");
        assert_eq!(safe_return_path("/map\r\nSet-Cookie: x"), "/");
    }

    // ==================== Onboarding Form Tests ====================

    #[test]
    fn test_form_rebuilds_wizard() {
        let form = OnboardingForm {
            step: "2".to_string(),
            action: "toggle:glass-scraps".to_string(),
            company_name: "Acme Co".to_string(),
            resources: "waste-heat".to_string(),
            ..OnboardingForm::default()
        };

        let (wizard, action) = form.into_wizard().unwrap();
        assert_eq!(wizard.state(), WizardState::Step(WizardStep::Resources));
        assert_eq!(action, WizardAction::Toggle(ResourceKind::GlassScraps));
        assert_eq!(wizard.draft().company_name, "Acme Co");
        assert!(wizard.draft().resources.contains(&ResourceKind::WasteHeat));
    }

    #[test]
    fn test_form_rejects_malformed_input() {
        for step in ["7", "abc"] {
            let bad_step = OnboardingForm {
                step: step.to_string(),
                action: "next".to_string(),
                ..OnboardingForm::default()
            };
            assert_eq!(
                bad_step.into_wizard().unwrap_err(),
                WizardInputError::UnknownStep(step.to_string())
            );
        }

        let bad_action = OnboardingForm::default();
        assert!(matches!(
            bad_action.into_wizard().unwrap_err(),
            WizardInputError::UnknownAction(_)
        ));

        let bad_resource = OnboardingForm {
            action: "next".to_string(),
            resources: "gold".to_string(),
            ..OnboardingForm::default()
        };
        assert!(matches!(
            bad_resource.into_wizard().unwrap_err(),
            WizardInputError::UnknownResource(_)
        ));
    }

    #[test]
    fn test_resume_target_reopens_wizard() {
        let form = OnboardingForm {
            step: "1".to_string(),
            company_name: "Acme & Co".to_string(),
            email: "contact@acme.com".to_string(),
            address: "Hafenstraße 1".to_string(),
            resources: "waste-heat,used-oils".to_string(),
            ..OnboardingForm::default()
        };
        let wizard = form.into_resumed().unwrap();
        let target = resume_target(&wizard);

        assert!(target.starts_with("/onboarding?step=1&company_name=Acme%20%26%20Co&"));
        assert!(target.contains("&resources=waste-heat%2Cused-oils"));
        assert_eq!(safe_return_path(&target), target);
    }

    #[test]
    fn test_resume_target_for_completed_wizard() {
        let wizard = Wizard::restore(WizardState::Completed, OnboardingDraft::default());
        assert!(resume_target(&wizard).starts_with("/onboarding?step=complete&"));
    }

    #[test]
    fn test_request_target_keeps_query() {
        let uri: Uri = "/map?cluster=heat".parse().unwrap();
        assert_eq!(request_target(&uri), "/map?cluster=heat");

        let uri: Uri = "/ideas".parse().unwrap();
        assert_eq!(request_target(&uri), "/ideas");
    }
}
