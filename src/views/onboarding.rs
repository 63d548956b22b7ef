//! Onboarding wizard page.
//!
//! The whole draft travels with every submission: fields of the visible step
//! are inputs, the rest are hidden inputs, and the selected resource kinds are
//! a single comma-separated hidden field.

use crate::i18n::{LanguageContext, OnboardingStrings};
use crate::wizard::{Field, OnboardingDraft, ResourceKind, Wizard, WizardState, WizardStep};

use super::{escape, fill, page_header, Route};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().onboarding.title
}

pub fn render(ctx: &LanguageContext, wizard: &Wizard, errors: &[Field]) -> String {
    let strings = &ctx.strings().onboarding;

    let step = match wizard.state() {
        WizardState::Completed => return welcome(strings),
        WizardState::Step(step) => step,
    };

    format!(
        r#"{header}
{progress}
<form class="card wizard" method="post" action="{action}">
<input type="hidden" name="step" value="{index}">
<input type="hidden" name="resources" value="{resources}">
{hidden}
{fields}
<div class="wizard-buttons">{buttons}</div>
</form>"#,
        header = page_header(strings.title, strings.subtitle),
        progress = progress(step, strings),
        action = Route::Onboarding.path(),
        index = step.index(),
        resources = escape(&wizard.draft().resources_param()),
        hidden = hidden_fields(step, wizard.draft()),
        fields = step_fields(step, wizard.draft(), errors, strings),
        buttons = buttons(step, strings),
    )
}

fn progress(current: WizardStep, strings: &OnboardingStrings) -> String {
    let steps: String = WizardStep::ALL
        .iter()
        .map(|step| {
            let class = if *step <= current { "step reached" } else { "step" };
            format!(
                r#"<div class="{}"><span class="step-index">{}</span><p>{}</p></div>"#,
                class,
                step.index() + 1,
                escape(step.label(strings))
            )
        })
        .collect();

    format!(r#"<div class="steps">{}</div>"#, steps)
}

/// Text fields owned by each step, in display order.
fn text_fields(draft: &OnboardingDraft) -> [(WizardStep, Field, &str); 6] {
    [
        (WizardStep::CompanyInfo, Field::CompanyName, draft.company_name.as_str()),
        (WizardStep::CompanyInfo, Field::Sector, draft.sector.as_str()),
        (WizardStep::CompanyInfo, Field::Email, draft.email.as_str()),
        (WizardStep::Location, Field::Address, draft.address.as_str()),
        (WizardStep::Location, Field::City, draft.city.as_str()),
        (WizardStep::Location, Field::PostalCode, draft.postal.as_str()),
    ]
}

fn hidden_fields(current: WizardStep, draft: &OnboardingDraft) -> String {
    text_fields(draft)
        .iter()
        .filter(|(step, _, _)| *step != current)
        .map(|(_, field, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                field.name(),
                escape(value)
            )
        })
        .collect()
}

fn field_error(field: Field, errors: &[Field], strings: &OnboardingStrings) -> String {
    if errors.contains(&field) {
        format!(
            r#"<p class="field-error">{}</p>"#,
            escape(field.message(strings))
        )
    } else {
        String::new()
    }
}

struct Input<'a> {
    field: Field,
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    kind: &'a str,
}

impl Input<'_> {
    fn render(&self, errors: &[Field], strings: &OnboardingStrings) -> String {
        format!(
            r#"<label>{label}<input type="{kind}" name="{name}" value="{value}" placeholder="{placeholder}"></label>{error}"#,
            label = escape(self.label),
            kind = self.kind,
            name = self.field.name(),
            value = escape(self.value),
            placeholder = escape(self.placeholder),
            error = field_error(self.field, errors, strings),
        )
    }
}

fn step_fields(
    step: WizardStep,
    draft: &OnboardingDraft,
    errors: &[Field],
    strings: &OnboardingStrings,
) -> String {
    match step {
        WizardStep::CompanyInfo => {
            let inputs = [
                Input {
                    field: Field::CompanyName,
                    label: strings.company_name,
                    placeholder: strings.company_name_placeholder,
                    value: &draft.company_name,
                    kind: "text",
                },
                Input {
                    field: Field::Sector,
                    label: strings.sector,
                    placeholder: strings.sector_placeholder,
                    value: &draft.sector,
                    kind: "text",
                },
                Input {
                    field: Field::Email,
                    label: strings.email,
                    placeholder: strings.email_placeholder,
                    value: &draft.email,
                    kind: "email",
                },
            ];
            section(strings.company_heading, &inputs, errors, strings)
        }
        WizardStep::Location => {
            let inputs = [
                Input {
                    field: Field::Address,
                    label: strings.address,
                    placeholder: strings.address_placeholder,
                    value: &draft.address,
                    kind: "text",
                },
                Input {
                    field: Field::City,
                    label: strings.city,
                    placeholder: strings.city,
                    value: &draft.city,
                    kind: "text",
                },
                Input {
                    field: Field::PostalCode,
                    label: strings.postal,
                    placeholder: strings.postal_placeholder,
                    value: &draft.postal,
                    kind: "text",
                },
            ];
            format!(
                r#"{}<div class="map-preview muted">📍 {}</div>"#,
                section(strings.location_heading, &inputs, errors, strings),
                escape(strings.map_preview)
            )
        }
        WizardStep::Resources => resource_picker(draft, errors, strings),
        WizardStep::Verification => format!(
            r#"<h2>{}</h2><p class="muted">{}</p>
<div class="upload-zone"><p>⬆ {}</p><p class="muted">{}</p></div>"#,
            escape(strings.upload_heading),
            escape(strings.upload_text),
            escape(strings.upload_drop),
            escape(strings.upload_limits)
        ),
    }
}

fn section(heading: &str, inputs: &[Input], errors: &[Field], strings: &OnboardingStrings) -> String {
    let fields: String = inputs.iter().map(|i| i.render(errors, strings)).collect();
    format!(r#"<h2>{}</h2>{}"#, escape(heading), fields)
}

fn resource_picker(draft: &OnboardingDraft, errors: &[Field], strings: &OnboardingStrings) -> String {
    let tags: String = ResourceKind::ALL
        .iter()
        .map(|kind| {
            let selected = draft.resources.contains(kind);
            format!(
                r#"<button type="submit" name="action" value="toggle:{}" class="{}" aria-pressed="{}">{}</button>"#,
                kind.slug(),
                if selected { "resource-tag selected" } else { "resource-tag" },
                selected,
                escape(kind.label(strings))
            )
        })
        .collect();

    let status = match draft.resources.len() {
        0 => format!(r#"<p class="muted">{}</p>"#, escape(strings.resources_hint)),
        1 => format!(
            r#"<p class="success">{}</p>"#,
            escape(strings.resources_selected_one)
        ),
        count => format!(
            r#"<p class="success">{}</p>"#,
            fill(strings.resources_selected_many, "count", &count.to_string())
        ),
    };

    format!(
        r#"<h2>{}</h2><p class="muted">{}</p><div class="resource-tags">{}</div>{}{}"#,
        escape(strings.resources_heading),
        escape(strings.resources_text),
        tags,
        status,
        field_error(Field::Resources, errors, strings)
    )
}

fn buttons(step: WizardStep, strings: &OnboardingStrings) -> String {
    let disabled = if step.previous().is_none() { " disabled" } else { "" };
    let next = if step.is_last() { strings.complete } else { strings.next };

    format!(
        r#"<button type="submit" name="action" value="previous" class="button button-outline"{}>{}</button>
<button type="submit" name="action" value="next" class="button">{}</button>"#,
        disabled,
        escape(strings.previous),
        escape(next)
    )
}

fn welcome(strings: &OnboardingStrings) -> String {
    format!(
        r#"<section class="card welcome"><span class="glyph">✅</span><h1>{}</h1><p class="muted">{}</p><a class="button" href="{}">{}</a></section>"#,
        escape(strings.welcome_title),
        escape(strings.welcome_text),
        Route::Resources.path(),
        escape(strings.browse_resources)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::collections::BTreeSet;

    fn ctx() -> LanguageContext {
        LanguageContext::default()
    }

    fn draft() -> OnboardingDraft {
        OnboardingDraft {
            company_name: "Acme & Co".to_string(),
            sector: "Energy".to_string(),
            email: "hello@acme.co".to_string(),
            address: "Hafenstraße 1".to_string(),
            city: "Hamburg".to_string(),
            postal: "20095".to_string(),
            resources: BTreeSet::from([ResourceKind::UsedOils]),
        }
    }

    // ==================== Progress Tests ====================

    #[test]
    fn test_progress_marks_reached_steps() {
        let wizard = Wizard::resume(WizardStep::Resources, draft());
        let html = render(&ctx(), &wizard, &[]);

        assert_eq!(html.matches("step reached").count(), 3);
        assert!(html.contains(r#"<input type="hidden" name="step" value="2">"#));
    }

    // ==================== Draft Carry Tests ====================

    #[test]
    fn test_first_step_shows_inputs_and_hides_location() {
        let wizard = Wizard::resume(WizardStep::CompanyInfo, draft());
        let html = render(&ctx(), &wizard, &[]);

        assert!(html.contains(r#"name="company_name" value="Acme &amp; Co" placeholder="#));
        assert!(html.contains(r#"<input type="hidden" name="city" value="Hamburg">"#));
        assert!(html.contains(r#"<input type="hidden" name="resources" value="used-oils">"#));
        assert!(html.contains(r#"value="previous" class="button button-outline" disabled"#));
    }

    #[test]
    fn test_every_draft_field_is_submitted_once() {
        for step in WizardStep::ALL {
            let html = render(&ctx(), &Wizard::resume(step, draft()), &[]);
            for field in [
                Field::CompanyName,
                Field::Sector,
                Field::Email,
                Field::Address,
                Field::City,
                Field::PostalCode,
                Field::Resources,
            ] {
                let needle = format!(r#"name="{}""#, field.name());
                assert_eq!(html.matches(&needle).count(), 1, "{:?} at {:?}", field, step);
            }
        }
    }

    // ==================== Field Error Tests ====================

    #[test]
    fn test_field_errors_rendered() {
        let wizard = Wizard::resume(WizardStep::Location, draft());
        let html = render(&ctx(), &wizard, &[Field::PostalCode]);

        assert_eq!(html.matches("field-error").count(), 1);
        assert!(html.contains("Postal code is required"));
    }

    // ==================== Resource Step Tests ====================

    #[test]
    fn test_resource_tags_reflect_selection() {
        let wizard = Wizard::resume(WizardStep::Resources, draft());
        let html = render(&ctx(), &wizard, &[]);

        assert_eq!(html.matches(r#"name="action" value="toggle:"#).count(), 6);
        assert!(html.contains(r#"value="toggle:used-oils" class="resource-tag selected""#));
        assert!(html.contains("1 resource type selected"));
    }

    #[test]
    fn test_resource_count_text() {
        let mut many = draft();
        many.resources.insert(ResourceKind::WasteHeat);
        let html = render(&ctx(), &Wizard::resume(WizardStep::Resources, many), &[]);
        assert!(html.contains("2 resource types selected"));

        let mut none = draft();
        none.resources.clear();
        let html = render(&ctx(), &Wizard::resume(WizardStep::Resources, none), &[]);
        assert!(html.contains("Please select at least one resource type to continue"));
    }

    #[test]
    fn test_last_step_button_says_complete() {
        let html = render(&ctx(), &Wizard::resume(WizardStep::Verification, draft()), &[]);
        assert!(html.contains(">Complete</button>"));
    }

    // ==================== Completion Tests ====================

    #[test]
    fn test_completed_shows_welcome() {
        let mut wizard = Wizard::resume(WizardStep::Verification, draft());
        wizard.next().unwrap();
        let html = render(&ctx(), &wizard, &[]);

        assert!(html.contains("Welcome to CircularFlow!"));
        assert!(html.contains(r#"href="/resources""#));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_french_labels() {
        let html = render(
            &LanguageContext::new(Language::FRENCH),
            &Wizard::resume(WizardStep::Resources, draft()),
            &[],
        );
        assert!(html.contains("Débris de verre"));
    }
}
