use crate::i18n::LanguageContext;

use super::{escape, Route};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().not_found.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().not_found;

    format!(
        r#"<section class="not-found"><h1>{}</h1><p class="muted">{}</p><a class="button" href="{}">{}</a></section>"#,
        escape(strings.title),
        escape(strings.message),
        Route::Home.path(),
        escape(strings.back_home)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_not_found_links_home() {
        let html = render(&LanguageContext::default());
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_not_found_localized() {
        let html = render(&LanguageContext::new(Language::FRENCH));
        assert!(html.contains("Retour à l&#39;accueil"));
    }
}
