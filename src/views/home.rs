use crate::catalog::{PlatformMetric, Trend, PLATFORM_STATS};
use crate::i18n::{HomeStrings, LanguageContext};

use super::{escape, fill, Route};

fn metric_title(metric: PlatformMetric, strings: &HomeStrings) -> &'static str {
    match metric {
        PlatformMetric::ActiveResources => strings.stat_active_resources,
        PlatformMetric::DealsMatched => strings.stat_deals_matched,
        PlatformMetric::Co2Saved => strings.stat_co2_saved,
        PlatformMetric::GreenPoints => strings.stat_green_points,
    }
}

fn trend_text(trend: Trend, strings: &HomeStrings) -> String {
    match trend {
        Trend::PercentThisMonth(value) => fill(strings.trend_percent_month, "value", value),
        Trend::ThisMonth => escape(strings.trend_this_month),
        Trend::CommunityTotal => escape(strings.trend_community_total),
    }
}

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().nav.home
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().home;

    let stats: String = PLATFORM_STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="card stat"><p class="muted">{}</p><p class="stat-value">{}</p><p class="{}">{}</p></div>"#,
                escape(metric_title(stat.metric, strings)),
                escape(stat.value),
                if stat.trend_up { "success" } else { "muted" },
                trend_text(stat.trend, strings)
            )
        })
        .collect();

    let quick_links: String = [
        (Route::Map, strings.map_title, strings.map_text),
        (Route::Matching, strings.matching_title, strings.matching_text),
        (Route::Ideas, strings.ideas_title, strings.ideas_text),
    ]
    .iter()
    .map(|(route, heading, text)| {
        format!(
            r#"<a class="card quick-link" href="{}"><h3>{}</h3><p class="muted">{}</p></a>"#,
            route.path(),
            escape(heading),
            escape(text)
        )
    })
    .collect();

    format!(
        r#"<section class="hero card">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a class="button button-outline" href="{resources}">{browse}</a>
<a class="button" href="{onboarding}">{get_started}</a>
</section>
<section>
<h2>{overview}</h2>
<div class="grid">{stats}</div>
</section>
<section class="grid">{quick_links}</section>"#,
        hero_title = escape(strings.hero_title),
        hero_subtitle = escape(strings.hero_subtitle),
        resources = Route::Resources.path(),
        browse = escape(strings.browse_resources),
        onboarding = Route::Onboarding.path(),
        get_started = escape(strings.get_started),
        overview = escape(strings.overview_title),
        stats = stats,
        quick_links = quick_links,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_home_shows_stats_and_links() {
        let html = render(&LanguageContext::default());

        assert!(html.contains("Transform Industrial Waste into Value"));
        assert_eq!(html.matches("card stat").count(), 4);
        assert!(html.contains("+12% this month"));
        assert!(html.contains("1,234t"));
        assert!(html.contains(r#"href="/matching""#));
        assert!(html.contains(r#"href="/onboarding""#));
    }

    #[test]
    fn test_home_in_french() {
        let html = render(&LanguageContext::new(Language::FRENCH));
        assert!(html.contains("Commencer"));
        assert!(html.contains("+8% ce mois-ci"));
    }
}
