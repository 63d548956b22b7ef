//! Company onboarding wizard.
//!
//! Four fixed steps (company info, location, resources, verification) and a
//! terminal `Completed` state. `next` advances only when the current step
//! validates; `previous` always moves back one step and stops at the first.
//! The draft is never discarded by a failed step or by going back.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::i18n::OnboardingStrings;
use crate::toast::Toast;

// ==================== Steps ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    CompanyInfo,
    Location,
    Resources,
    Verification,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::CompanyInfo,
        WizardStep::Location,
        WizardStep::Resources,
        WizardStep::Verification,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::CompanyInfo => 0,
            WizardStep::Location => 1,
            WizardStep::Resources => 2,
            WizardStep::Verification => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `None` for the last one.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` for the first one.
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn label(&self, strings: &OnboardingStrings) -> &'static str {
        strings.steps[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Step(WizardStep),
    Completed,
}

impl WizardState {
    const COMPLETED_PARAM: &'static str = "complete";

    /// Form and query value: the step index, or `complete`.
    pub fn param(&self) -> String {
        match self {
            WizardState::Step(step) => step.index().to_string(),
            WizardState::Completed => Self::COMPLETED_PARAM.to_string(),
        }
    }

    /// Parse the output of [`param`](Self::param). An empty value is the first step.
    pub fn from_param(param: &str) -> Result<WizardState, WizardInputError> {
        match param {
            "" => Ok(WizardState::Step(WizardStep::CompanyInfo)),
            Self::COMPLETED_PARAM => Ok(WizardState::Completed),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(WizardStep::from_index)
                .map(WizardState::Step)
                .ok_or_else(|| WizardInputError::UnknownStep(other.to_string())),
        }
    }
}

// ==================== Resource kinds ====================

/// The fixed set of resource types a company can select during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    WasteHeat,
    GlassScraps,
    WoodResidues,
    UsedOils,
    MetalWaste,
    PlasticWaste,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::WasteHeat,
        ResourceKind::GlassScraps,
        ResourceKind::WoodResidues,
        ResourceKind::UsedOils,
        ResourceKind::MetalWaste,
        ResourceKind::PlasticWaste,
    ];

    pub fn index(&self) -> usize {
        match self {
            ResourceKind::WasteHeat => 0,
            ResourceKind::GlassScraps => 1,
            ResourceKind::WoodResidues => 2,
            ResourceKind::UsedOils => 3,
            ResourceKind::MetalWaste => 4,
            ResourceKind::PlasticWaste => 5,
        }
    }

    /// Stable identifier used in form fields.
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::WasteHeat => "waste-heat",
            ResourceKind::GlassScraps => "glass-scraps",
            ResourceKind::WoodResidues => "wood-residues",
            ResourceKind::UsedOils => "used-oils",
            ResourceKind::MetalWaste => "metal-waste",
            ResourceKind::PlasticWaste => "plastic-waste",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ResourceKind> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn label(&self, strings: &OnboardingStrings) -> &'static str {
        strings.resource_kinds[self.index()]
    }
}

// ==================== Validation ====================

/// A draft field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CompanyName,
    Sector,
    Email,
    Address,
    City,
    PostalCode,
    Resources,
}

impl Field {
    /// Form field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::CompanyName => "company_name",
            Field::Sector => "sector",
            Field::Email => "email",
            Field::Address => "address",
            Field::City => "city",
            Field::PostalCode => "postal",
            Field::Resources => "resources",
        }
    }

    pub fn message(&self, strings: &OnboardingStrings) -> &'static str {
        match self {
            Field::CompanyName => strings.error_company_name,
            Field::Sector => strings.error_sector,
            Field::Email => strings.error_email,
            Field::Address => strings.error_address,
            Field::City => strings.error_city,
            Field::PostalCode => strings.error_postal,
            Field::Resources => strings.error_resources,
        }
    }
}

/// The current step's data did not satisfy its rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {step:?} is incomplete: {fields:?}")]
pub struct ValidationError {
    pub step: WizardStep,
    pub fields: Vec<Field>,
}

impl ValidationError {
    /// The single notification shown for this failure.
    pub fn toast(&self, strings: &OnboardingStrings) -> Toast {
        match self.step {
            WizardStep::Resources => Toast::destructive(
                strings.toast_no_resources_title,
                strings.toast_no_resources_text,
            ),
            WizardStep::Location => {
                Toast::destructive(strings.toast_missing_title, strings.toast_location_text)
            }
            WizardStep::CompanyInfo | WizardStep::Verification => {
                Toast::destructive(strings.toast_missing_title, strings.toast_company_text)
            }
        }
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Standard email shape: local part, `@`, dotted domain ending in a 2+ letter TLD.
pub fn is_valid_email(value: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    });

    !value.starts_with('.') && !value.contains("..") && regex.is_match(value)
}

/// Length in UTF-16 code units, the unit browsers report for form values.
fn min_chars(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

// ==================== Draft ====================

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub company_name: String,
    pub sector: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal: String,
    pub resources: BTreeSet<ResourceKind>,
}

impl OnboardingDraft {
    /// Check the rule for a single step.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), ValidationError> {
        let mut fields = Vec::new();

        match step {
            WizardStep::CompanyInfo => {
                if !min_chars(&self.company_name, 2) {
                    fields.push(Field::CompanyName);
                }
                if !min_chars(&self.sector, 2) {
                    fields.push(Field::Sector);
                }
                if !is_valid_email(&self.email) {
                    fields.push(Field::Email);
                }
            }
            WizardStep::Location => {
                if !min_chars(&self.address, 5) {
                    fields.push(Field::Address);
                }
                if !min_chars(&self.city, 2) {
                    fields.push(Field::City);
                }
                if !min_chars(&self.postal, 4) {
                    fields.push(Field::PostalCode);
                }
            }
            WizardStep::Resources => {
                if self.resources.is_empty() {
                    fields.push(Field::Resources);
                }
            }
            // Upload placeholder only.
            WizardStep::Verification => {}
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { step, fields })
        }
    }

    /// Select `kind` if absent, deselect it if present. Returns whether it is now selected.
    pub fn toggle_resource(&mut self, kind: ResourceKind) -> bool {
        if self.resources.remove(&kind) {
            false
        } else {
            self.resources.insert(kind);
            true
        }
    }

    /// Comma-separated slugs, in `ResourceKind::ALL` order.
    pub fn resources_param(&self) -> String {
        self.resources
            .iter()
            .map(ResourceKind::slug)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the output of [`resources_param`](Self::resources_param).
    pub fn parse_resources(param: &str) -> Result<BTreeSet<ResourceKind>, WizardInputError> {
        param
            .split(',')
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(|slug| {
                ResourceKind::from_slug(slug)
                    .ok_or_else(|| WizardInputError::UnknownResource(slug.to_string()))
            })
            .collect()
    }
}

// ==================== Actions ====================

/// Malformed wizard input, as opposed to a failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardInputError {
    #[error("Unknown wizard step: '{0}'")]
    UnknownStep(String),

    #[error("Unknown wizard action: '{0}'")]
    UnknownAction(String),

    #[error("Unknown resource type: '{0}'")]
    UnknownResource(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
    Toggle(ResourceKind),
}

impl FromStr for WizardAction {
    type Err = WizardInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(WizardAction::Next),
            "previous" => Ok(WizardAction::Previous),
            other => other
                .strip_prefix("toggle:")
                .and_then(ResourceKind::from_slug)
                .map(WizardAction::Toggle)
                .ok_or_else(|| WizardInputError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardAction::Next => write!(f, "next"),
            WizardAction::Previous => write!(f, "previous"),
            WizardAction::Toggle(kind) => write!(f, "toggle:{}", kind.slug()),
        }
    }
}

/// What the page should show after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub toast: Option<Toast>,
    pub errors: Vec<Field>,
}

// ==================== Wizard ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    state: WizardState,
    draft: OnboardingDraft,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::resume(WizardStep::CompanyInfo, OnboardingDraft::default())
    }

    /// Continue at `step` with a previously entered draft.
    pub fn resume(step: WizardStep, draft: OnboardingDraft) -> Self {
        Self::restore(WizardState::Step(step), draft)
    }

    /// Rebuild a wizard from a state and draft carried by the client.
    pub fn restore(state: WizardState, draft: OnboardingDraft) -> Self {
        Self { state, draft }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OnboardingDraft {
        &mut self.draft
    }

    pub fn is_completed(&self) -> bool {
        self.state == WizardState::Completed
    }

    /// Advance if the current step validates.
    ///
    /// On failure the state is left untouched. Calling `next` once completed
    /// is a no-op.
    pub fn next(&mut self) -> Result<WizardState, ValidationError> {
        let WizardState::Step(step) = self.state else {
            return Ok(self.state);
        };

        self.draft.validate_step(step)?;

        self.state = match step.next() {
            Some(following) => WizardState::Step(following),
            None => WizardState::Completed,
        };
        debug!("Wizard advanced from {:?} to {:?}", step, self.state);
        Ok(self.state)
    }

    /// Go back one step. No-op on the first step and once completed.
    pub fn previous(&mut self) -> WizardState {
        if let WizardState::Step(step) = self.state {
            if let Some(preceding) = step.previous() {
                self.state = WizardState::Step(preceding);
            }
        }
        self.state
    }

    pub fn toggle_resource(&mut self, kind: ResourceKind) -> bool {
        self.draft.toggle_resource(kind)
    }

    /// Apply a user action and collect what to show for it.
    ///
    /// A rejected `Next` yields exactly one destructive toast plus the
    /// offending fields; finishing the last step yields the success toast.
    pub fn apply(&mut self, action: WizardAction, strings: &OnboardingStrings) -> Feedback {
        match action {
            WizardAction::Next => match self.next() {
                Ok(WizardState::Completed) => Feedback {
                    toast: Some(Toast::info(
                        strings.toast_success_title,
                        strings.toast_success_text,
                    )),
                    errors: Vec::new(),
                },
                Ok(WizardState::Step(_)) => Feedback::default(),
                Err(e) => {
                    debug!("Wizard step rejected: {}", e);
                    Feedback {
                        toast: Some(e.toast(strings)),
                        errors: e.fields,
                    }
                }
            },
            WizardAction::Previous => {
                self.previous();
                Feedback::default()
            }
            WizardAction::Toggle(kind) => {
                self.toggle_resource(kind);
                Feedback::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ENGLISH_STRINGS;
    use proptest::prelude::*;

    // ==================== Helper Functions ====================

    fn strings() -> &'static OnboardingStrings {
        &ENGLISH_STRINGS.onboarding
    }

    fn valid_draft() -> OnboardingDraft {
        OnboardingDraft {
            company_name: "Acme Co".to_string(),
            sector: "Manufacturing".to_string(),
            email: "contact@acme.com".to_string(),
            address: "Industriestraße 123".to_string(),
            city: "Hamburg".to_string(),
            postal: "20095".to_string(),
            resources: BTreeSet::from([ResourceKind::WasteHeat]),
        }
    }

    /// A draft that fails only the rule for `step`.
    fn draft_invalid_for(step: WizardStep) -> OnboardingDraft {
        let mut draft = valid_draft();
        match step {
            WizardStep::CompanyInfo => draft.company_name = "A".to_string(),
            WizardStep::Location => draft.postal = "123".to_string(),
            WizardStep::Resources => draft.resources.clear(),
            WizardStep::Verification => {}
        }
        draft
    }

    // ==================== Step Tests ====================

    #[test]
    fn test_step_navigation() {
        assert_eq!(WizardStep::CompanyInfo.next(), Some(WizardStep::Location));
        assert_eq!(WizardStep::Verification.next(), None);
        assert_eq!(WizardStep::CompanyInfo.previous(), None);
        assert_eq!(WizardStep::Resources.previous(), Some(WizardStep::Location));
        assert!(WizardStep::Verification.is_last());
    }

    #[test]
    fn test_step_from_index() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(WizardStep::from_index(4), None);
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(WizardStep::CompanyInfo.label(strings()), "Company Info");
        assert_eq!(WizardStep::Verification.label(strings()), "Verification");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_company_name_too_short_rejected() {
        let mut draft = valid_draft();
        draft.company_name = "A".to_string();

        let err = draft.validate_step(WizardStep::CompanyInfo).unwrap_err();
        assert_eq!(err.fields, vec![Field::CompanyName]);
    }

    #[test]
    fn test_empty_company_step_reports_every_field() {
        let err = OnboardingDraft::default()
            .validate_step(WizardStep::CompanyInfo)
            .unwrap_err();

        assert!(err.has(Field::CompanyName));
        assert!(err.has(Field::Sector));
        assert!(err.has(Field::Email));
        assert_eq!(err.fields.len(), 3);
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.company_name = "Éa".to_string();
        draft.city = "Ők".to_string();

        assert!(draft.validate_step(WizardStep::CompanyInfo).is_ok());
        assert!(draft.validate_step(WizardStep::Location).is_ok());
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        let mut draft = valid_draft();
        draft.company_name = "😀".to_string();
        draft.sector = "⚙".to_string();

        let err = draft.validate_step(WizardStep::CompanyInfo).unwrap_err();
        assert_eq!(err.fields, vec![Field::Sector]);
    }

    #[test]
    fn test_location_rules() {
        let mut draft = valid_draft();
        draft.address = "Main".to_string();
        draft.city = "H".to_string();
        draft.postal = "123".to_string();

        let err = draft.validate_step(WizardStep::Location).unwrap_err();
        assert_eq!(err.fields, vec![Field::Address, Field::City, Field::PostalCode]);
    }

    #[test]
    fn test_resources_rule() {
        let mut draft = valid_draft();
        draft.resources.clear();

        let err = draft.validate_step(WizardStep::Resources).unwrap_err();
        assert_eq!(err.fields, vec![Field::Resources]);
    }

    #[test]
    fn test_verification_always_valid() {
        assert!(OnboardingDraft::default()
            .validate_step(WizardStep::Verification)
            .is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("contact@company.com"));
        assert!(is_valid_email("first.last+tag@mail.example.de"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("contact"));
        assert!(!is_valid_email("contact@company"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email(".contact@company.com"));
        assert!(!is_valid_email("con..tact@company.com"));
        assert!(!is_valid_email("contact@company.c"));
        assert!(!is_valid_email("contact @company.com"));
    }

    #[test]
    fn test_validation_toasts() {
        let company = draft_invalid_for(WizardStep::CompanyInfo)
            .validate_step(WizardStep::CompanyInfo)
            .unwrap_err()
            .toast(strings());
        assert_eq!(company.title, "Missing Information");
        assert_eq!(company.description, "Please fill in all required fields correctly.");
        assert!(company.is_destructive());

        let location = draft_invalid_for(WizardStep::Location)
            .validate_step(WizardStep::Location)
            .unwrap_err()
            .toast(strings());
        assert_eq!(location.description, "Please fill in all location details.");

        let resources = draft_invalid_for(WizardStep::Resources)
            .validate_step(WizardStep::Resources)
            .unwrap_err()
            .toast(strings());
        assert_eq!(resources.title, "No Resources Selected");
    }

    // ==================== State Param Tests ====================

    #[test]
    fn test_state_param_parsing() {
        assert_eq!(
            WizardState::from_param(""),
            Ok(WizardState::Step(WizardStep::CompanyInfo))
        );
        assert_eq!(
            WizardState::from_param(&WizardState::Step(WizardStep::Resources).param()),
            Ok(WizardState::Step(WizardStep::Resources))
        );
        assert_eq!(
            WizardState::from_param(&WizardState::Completed.param()),
            Ok(WizardState::Completed)
        );
    }

    #[test]
    fn test_state_param_rejects_garbage() {
        for param in ["4", "abc", "-1", "1.0"] {
            assert_eq!(
                WizardState::from_param(param),
                Err(WizardInputError::UnknownStep(param.to_string()))
            );
        }
    }

    // ==================== Transition Tests ====================

    #[test]
    fn test_new_wizard_starts_at_company_info() {
        let wizard = Wizard::new();
        assert_eq!(wizard.state(), WizardState::Step(WizardStep::CompanyInfo));
        assert!(!wizard.is_completed());
    }

    #[test]
    fn test_acme_example_advances_to_location() {
        let mut wizard = Wizard::new();
        wizard.draft_mut().company_name = "A".to_string();
        wizard.draft_mut().sector = "Energy".to_string();
        wizard.draft_mut().email = "hello@acme.co".to_string();

        assert!(wizard.next().is_err());
        assert_eq!(wizard.state(), WizardState::Step(WizardStep::CompanyInfo));

        wizard.draft_mut().company_name = "Acme Co".to_string();
        assert_eq!(wizard.next(), Ok(WizardState::Step(WizardStep::Location)));
    }

    #[test]
    fn test_invalid_next_keeps_step_and_raises_one_toast() {
        for step in [WizardStep::CompanyInfo, WizardStep::Location, WizardStep::Resources] {
            let mut wizard = Wizard::resume(step, draft_invalid_for(step));
            let before = wizard.clone();

            let feedback = wizard.apply(WizardAction::Next, strings());

            assert_eq!(wizard, before, "state and draft unchanged at {:?}", step);
            let toast = feedback.toast.expect("one notification");
            assert!(toast.is_destructive());
            assert!(!feedback.errors.is_empty());
        }
    }

    #[test]
    fn test_valid_next_moves_forward_one_step() {
        for step in WizardStep::ALL {
            let mut wizard = Wizard::resume(step, valid_draft());
            let state = wizard.next().unwrap();

            match step.next() {
                Some(following) => assert_eq!(state, WizardState::Step(following)),
                None => assert_eq!(state, WizardState::Completed),
            }
        }
    }

    #[test]
    fn test_completion_raises_success_toast() {
        let mut wizard = Wizard::resume(WizardStep::Verification, OnboardingDraft::default());
        let feedback = wizard.apply(WizardAction::Next, strings());

        assert!(wizard.is_completed());
        let toast = feedback.toast.unwrap();
        assert_eq!(toast.title, "Success!");
        assert!(!toast.is_destructive());
        assert!(feedback.errors.is_empty());
    }

    #[test]
    fn test_plain_advance_has_no_toast() {
        let mut wizard = Wizard::resume(WizardStep::Location, valid_draft());
        let feedback = wizard.apply(WizardAction::Next, strings());
        assert_eq!(feedback, Feedback::default());
    }

    #[test]
    fn test_previous_from_first_step_is_noop() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.previous(),
            WizardState::Step(WizardStep::CompanyInfo)
        );
    }

    #[test]
    fn test_previous_decrements_by_one() {
        for step in WizardStep::ALL.into_iter().skip(1) {
            let mut wizard = Wizard::resume(step, OnboardingDraft::default());
            let expected = WizardState::Step(WizardStep::from_index(step.index() - 1).unwrap());
            assert_eq!(wizard.previous(), expected);
        }
    }

    #[test]
    fn test_previous_keeps_draft() {
        let mut wizard = Wizard::resume(WizardStep::Resources, valid_draft());
        wizard.apply(WizardAction::Previous, strings());
        assert_eq!(wizard.draft(), &valid_draft());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut wizard = Wizard::resume(WizardStep::Verification, valid_draft());
        wizard.next().unwrap();

        assert_eq!(wizard.previous(), WizardState::Completed);
        assert_eq!(wizard.next(), Ok(WizardState::Completed));
    }

    #[test]
    fn test_full_walkthrough() {
        let mut wizard = Wizard::new();
        *wizard.draft_mut() = valid_draft();

        for _ in 0..4 {
            wizard.next().unwrap();
        }
        assert!(wizard.is_completed());
    }

    // ==================== Resource Tests ====================

    #[test]
    fn test_toggle_resource_selects_and_deselects() {
        let mut draft = OnboardingDraft::default();
        assert!(draft.toggle_resource(ResourceKind::UsedOils));
        assert!(draft.resources.contains(&ResourceKind::UsedOils));
        assert!(!draft.toggle_resource(ResourceKind::UsedOils));
        assert!(draft.resources.is_empty());
    }

    #[test]
    fn test_resources_param_roundtrip_order() {
        let mut draft = OnboardingDraft::default();
        draft.toggle_resource(ResourceKind::PlasticWaste);
        draft.toggle_resource(ResourceKind::WasteHeat);

        assert_eq!(draft.resources_param(), "waste-heat,plastic-waste");
        assert_eq!(
            OnboardingDraft::parse_resources(&draft.resources_param()).unwrap(),
            draft.resources
        );
    }

    #[test]
    fn test_parse_resources_empty_and_unknown() {
        assert!(OnboardingDraft::parse_resources("").unwrap().is_empty());
        assert_eq!(
            OnboardingDraft::parse_resources("waste-heat,uranium"),
            Err(WizardInputError::UnknownResource("uranium".to_string()))
        );
    }

    #[test]
    fn test_resource_labels_follow_language() {
        assert_eq!(ResourceKind::GlassScraps.label(strings()), "Glass Scraps");
        assert_eq!(
            ResourceKind::GlassScraps.label(&crate::i18n::FRENCH_STRINGS.onboarding),
            "Débris de verre"
        );
    }

    // ==================== Action Parsing Tests ====================

    #[test]
    fn test_parse_actions() {
        assert_eq!("next".parse::<WizardAction>(), Ok(WizardAction::Next));
        assert_eq!("previous".parse::<WizardAction>(), Ok(WizardAction::Previous));
        assert_eq!(
            "toggle:metal-waste".parse::<WizardAction>(),
            Ok(WizardAction::Toggle(ResourceKind::MetalWaste))
        );
        assert!("toggle:gold".parse::<WizardAction>().is_err());
        assert!("submit".parse::<WizardAction>().is_err());
    }

    #[test]
    fn test_action_display_parses_back() {
        for action in [
            WizardAction::Next,
            WizardAction::Previous,
            WizardAction::Toggle(ResourceKind::WoodResidues),
        ] {
            assert_eq!(action.to_string().parse::<WizardAction>(), Ok(action));
        }
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores_selection(
            initial in prop::collection::btree_set(prop::sample::select(ResourceKind::ALL.to_vec()), 0..6),
            kind in prop::sample::select(ResourceKind::ALL.to_vec()),
        ) {
            let mut draft = OnboardingDraft { resources: initial.clone(), ..OnboardingDraft::default() };
            draft.toggle_resource(kind);
            draft.toggle_resource(kind);
            prop_assert_eq!(draft.resources, initial);
        }

        #[test]
        fn prop_short_company_names_rejected(name in "\\PC{0,1}") {
            let mut draft = valid_draft();
            draft.company_name = name;
            prop_assert!(draft.validate_step(WizardStep::CompanyInfo).is_err());
        }
    }
}
