use crate::catalog::{ServiceListing, SERVICES};
use crate::i18n::LanguageContext;

use super::{badges, escape, fill, page_header};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().services.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().services;
    let cards: String = SERVICES
        .iter()
        .map(|service| service_card(ctx, service))
        .collect();

    format!(
        r#"{}<div class="grid">{}</div>"#,
        page_header(strings.title, strings.subtitle),
        cards
    )
}

fn service_card(ctx: &LanguageContext, service: &ServiceListing) -> String {
    let strings = &ctx.strings().services;

    format!(
        r#"<article class="card service" id="service-{id}">
<div class="card-head"><span class="glyph">{glyph}</span><div><h3>{name}</h3><span class="badge">{category}</span></div></div>
<p>⭐ <strong>{rating:.1}</strong> <span class="muted">{reviews}</span></p>
<p class="muted">📍 {location}</p>
<p>{description}</p>
<div>{offerings}</div>
<button class="button">{contact}</button>
<button class="button button-outline">{view_profile}</button>
</article>"#,
        id = service.id,
        glyph = service.glyph,
        name = escape(service.name),
        category = escape(service.category),
        rating = service.rating,
        reviews = fill(strings.reviews, "count", &service.reviews.to_string()),
        location = escape(service.location),
        description = escape(service.description),
        offerings = badges(service.offerings, "badge badge-secondary"),
        contact = escape(strings.contact),
        view_profile = escape(strings.view_profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_services() {
        let html = render(&LanguageContext::default());

        assert_eq!(html.matches(r#"<article class="card service""#).count(), 4);
        assert!(html.contains("<strong>4.8</strong>"));
        assert!(html.contains("(127 reviews)"));
        assert!(html.contains(r#"<span class="badge badge-secondary">Route Optimization</span>"#));
    }
}
