//! Ephemeral user-visible notifications.
//!
//! A toast is rendered once into the response that produced it and is never
//! stored anywhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: &'static str,
    pub description: &'static str,
}

impl Toast {
    pub fn info(title: &'static str, description: &'static str) -> Self {
        Self {
            variant: ToastVariant::Default,
            title,
            description,
        }
    }

    pub fn destructive(title: &'static str, description: &'static str) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title,
            description,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
