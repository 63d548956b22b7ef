use serde::Deserialize;

use crate::catalog::{ResourceListing, DISTANCE_FILTERS, RESOURCES, RESOURCE_TYPE_FILTERS};
use crate::i18n::LanguageContext;

use super::{escape, fill, page_header, Route};

/// Page toggles carried in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourcesQuery {
    pub filters: Option<String>,
}

impl ResourcesQuery {
    pub fn filters_open(&self) -> bool {
        self.filters.as_deref() == Some("open")
    }
}

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().resources.title
}

pub fn render(ctx: &LanguageContext, query: &ResourcesQuery) -> String {
    let strings = &ctx.strings().resources;
    let path = Route::Resources.path();

    let panel_class = if query.filters_open() {
        "card filters"
    } else {
        "card filters hidden"
    };

    let cards: String = RESOURCES.iter().map(|r| resource_card(ctx, r)).collect();

    format!(
        r#"{header}
<a class="button" href="{path}">{add}</a>
<a class="button button-outline" href="{path}?filters=open">{filters}</a>
<div class="layout-sidebar">
<aside class="{panel_class}">
<h3>{filters}</h3>
<a class="button button-outline" href="{path}">{close}</a>
<h4>{resource_type}</h4>{types}
<h4>{distance}</h4>{distances}
<h4>{verification}</h4><label><input type="checkbox" name="verified"> {verified_only}</label>
<a class="button button-outline" href="{path}">{reset}</a>
</aside>
<div>
<input type="search" placeholder="{search}">
<div class="grid">{cards}</div>
</div>
</div>"#,
        header = page_header(strings.title, strings.subtitle),
        path = path,
        add = escape(strings.add_resource),
        filters = escape(strings.filters),
        panel_class = panel_class,
        close = escape(ctx.strings().common.close),
        resource_type = escape(strings.resource_type),
        types = checkboxes(&RESOURCE_TYPE_FILTERS),
        distance = escape(strings.distance),
        distances = checkboxes(&DISTANCE_FILTERS),
        verification = escape(strings.verification),
        verified_only = escape(strings.verified_only),
        reset = escape(strings.reset_filters),
        search = escape(strings.search_placeholder),
        cards = cards,
    )
}

fn checkboxes(options: &[&str]) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                r#"<label><input type="checkbox" name="filter" value="{0}"> {0}</label>"#,
                escape(option)
            )
        })
        .collect()
}

fn resource_card(ctx: &LanguageContext, resource: &ResourceListing) -> String {
    let strings = &ctx.strings().resources;
    let common = &ctx.strings().common;

    let verified = if resource.verified {
        format!(r#"<span class="badge success">✓ {}</span>"#, escape(common.verified))
    } else {
        String::new()
    };
    let action = if resource.available {
        common.view_details
    } else {
        strings.request_info
    };

    format!(
        r##"<article class="card resource">
<div class="card-head"><span class="glyph">{glyph}</span><div><h3>{kind}</h3><p class="muted">{company}</p></div>{verified}</div>
<p><strong>{quantity_label}</strong> {quantity}</p>
<p class="muted">📍 {location}</p>
<p class="success">{co2}</p>
<a class="button" href="#">{action}</a>
</article>"##,
        glyph = resource.category.glyph(),
        kind = escape(resource.category.label()),
        company = escape(resource.company),
        verified = verified,
        quantity_label = escape(strings.quantity),
        quantity = escape(resource.quantity),
        location = escape(resource.location),
        co2 = fill(strings.co2_saved_month, "value", resource.co2_saved),
        action = escape(action),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_resource() {
        let html = render(&LanguageContext::default(), &ResourcesQuery::default());

        assert_eq!(html.matches(r#"<article class="card resource">"#).count(), 4);
        assert!(html.contains("ThermalTech GmbH"));
        assert!(html.contains("2.3t CO₂ saved/month"));
    }

    #[test]
    fn test_unverified_listing_has_no_badge() {
        let html = render(&LanguageContext::default(), &ResourcesQuery::default());
        assert_eq!(html.matches("✓ Verified").count(), 3);
    }

    #[test]
    fn test_filter_panel_hidden_by_default() {
        let html = render(&LanguageContext::default(), &ResourcesQuery::default());
        assert!(html.contains(r#"<aside class="card filters hidden">"#));
    }

    #[test]
    fn test_filter_panel_open() {
        let query = ResourcesQuery {
            filters: Some("open".to_string()),
        };
        let html = render(&LanguageContext::default(), &query);
        assert!(html.contains(r#"<aside class="card filters">"#));
    }

    #[test]
    fn test_filter_options_rendered() {
        let html = render(&LanguageContext::default(), &ResourcesQuery::default());
        assert!(html.contains("&lt; 10 km"));
        assert!(html.contains(r#"value="Plastic""#));
    }
}
