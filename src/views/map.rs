use serde::Deserialize;

use crate::catalog::{cluster_for, MapCluster, ResourceCategory, CLUSTERS};
use crate::i18n::LanguageContext;

use super::{escape, fill, page_header, Route};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    pub cluster: Option<String>,
}

impl MapQuery {
    /// Selected cluster. Unknown slugs select nothing.
    pub fn selected(&self) -> Option<&'static MapCluster> {
        self.cluster
            .as_deref()
            .and_then(ResourceCategory::from_slug)
            .and_then(cluster_for)
    }
}

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().map.title
}

pub fn render(ctx: &LanguageContext, query: &MapQuery) -> String {
    let strings = &ctx.strings().map;
    let selected = query.selected();

    let markers: String = CLUSTERS
        .iter()
        .map(|cluster| marker(cluster, selected.map(|s| s.id) == Some(cluster.id)))
        .collect();

    let legend: String = ResourceCategory::ALL
        .iter()
        .map(|category| {
            format!(
                r#"<li><span class="dot {}"></span> {}</li>"#,
                category.color(),
                escape(category.label())
            )
        })
        .collect();

    format!(
        r#"{header}
<div class="layout-sidebar">
<div class="card map">{markers}
<div class="card legend"><h4>{legend_title}</h4><ul>{legend}</ul></div>
</div>
<aside class="card cluster-panel">{panel}</aside>
</div>"#,
        header = page_header(strings.title, strings.subtitle),
        markers = markers,
        legend_title = escape(strings.legend),
        legend = legend,
        panel = panel(ctx, selected),
    )
}

fn marker(cluster: &MapCluster, selected: bool) -> String {
    let size = cluster.count * 8;
    let class = if selected { "marker selected" } else { "marker" };

    format!(
        r#"<a class="{class} {color}" href="{path}?cluster={slug}" style="left:{x}%;top:{y}%;width:{size}px;height:{size}px" title="{label}">{count}</a>"#,
        class = class,
        color = cluster.category.color(),
        path = Route::Map.path(),
        slug = cluster.category.slug(),
        x = cluster.x,
        y = cluster.y,
        size = size,
        label = escape(cluster.category.label()),
        count = cluster.count,
    )
}

fn panel(ctx: &LanguageContext, selected: Option<&MapCluster>) -> String {
    let strings = &ctx.strings().map;

    let Some(cluster) = selected else {
        return format!(
            r#"<p class="muted">{}</p><p class="muted">{}</p>"#,
            escape(strings.click_cluster),
            escape(strings.clusters_info)
        );
    };

    let companies: String = cluster
        .companies
        .iter()
        .map(|company| {
            format!(
                r#"<div class="card company"><h4>{}</h4><p class="muted">📍 {}</p><p>{}</p><button class="button button-outline">{}</button></div>"#,
                escape(company.name),
                escape(company.location),
                escape(company.offer),
                escape(ctx.strings().common.view_details)
            )
        })
        .collect();

    format!(
        r#"<h3><span class="dot {}"></span> {}</h3><p class="muted">{}</p>{}"#,
        cluster.category.color(),
        escape(cluster.category.label()),
        fill(strings.companies, "count", &cluster.count.to_string()),
        companies
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(cluster: &str) -> MapQuery {
        MapQuery {
            cluster: Some(cluster.to_string()),
        }
    }

    #[test]
    fn test_all_markers_rendered() {
        let html = render(&LanguageContext::default(), &MapQuery::default());

        assert_eq!(html.matches(r#"href="/map?cluster="#).count(), 4);
        assert!(html.contains("width:96px;height:96px"));
        assert!(html.contains("left:75%;top:50%"));
    }

    #[test]
    fn test_no_selection_shows_hint() {
        let html = render(&LanguageContext::default(), &MapQuery::default());

        assert!(html.contains("Click on a cluster"));
        assert!(!html.contains("marker selected"));
        assert!(!html.contains("ThermalTech Algeria"));
    }

    #[test]
    fn test_selected_cluster_lists_companies() {
        let html = render(&LanguageContext::default(), &query("glass"));

        assert!(html.contains("8 companies"));
        assert!(html.contains("GlassWorks Industries"));
        assert!(html.contains("Crystal Processing"));
        assert_eq!(html.matches("marker selected").count(), 1);
    }

    #[test]
    fn test_unknown_cluster_selects_nothing() {
        assert!(query("metal").selected().is_none());
        let html = render(&LanguageContext::default(), &query("metal"));
        assert!(html.contains("Click on a cluster"));
    }
}
