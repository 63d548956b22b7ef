use crate::catalog::{badges_earned, BADGES, CO2_SERIES, EXCHANGE_SERIES, IMPACT};
use crate::i18n::LanguageContext;

use super::{escape, fill, page_header};

const CHART_WIDTH: u32 = 480;
const CHART_HEIGHT: u32 = 240;

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().green_points.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().green_points;
    let earned = badges_earned();
    let remaining = BADGES.len() - earned;

    let stats = [
        (
            strings.total_co2,
            IMPACT.total_co2.to_string(),
            fill(strings.co2_month_note, "value", IMPACT.co2_this_month),
        ),
        (
            strings.green_points,
            IMPACT.green_points.to_string(),
            fill(
                strings.rank_note,
                "percent",
                &IMPACT.region_rank_percent.to_string(),
            ),
        ),
        (
            strings.completed_deals,
            IMPACT.deals_completed.to_string(),
            fill(
                strings.deals_month_note,
                "count",
                &IMPACT.deals_this_month.to_string(),
            ),
        ),
        (
            strings.badges_earned,
            format!("{}/{}", earned, BADGES.len()),
            fill(strings.badges_remaining, "count", &remaining.to_string()),
        ),
    ];

    let stat_cards: String = stats
        .iter()
        .map(|(label, value, note)| {
            format!(
                r#"<div class="card stat"><p class="muted">{}</p><p class="stat-value">{}</p><p class="muted">{}</p></div>"#,
                escape(label),
                escape(value),
                note
            )
        })
        .collect();

    let badge_cards: String = BADGES
        .iter()
        .map(|badge| {
            let (class, marker) = if badge.earned {
                (
                    "card badge-card earned",
                    format!(r#"<span class="badge success">{}</span>"#, escape(strings.earned)),
                )
            } else {
                ("card badge-card", String::new())
            };
            format!(
                r#"<div class="{}"><span class="glyph">{}</span><h4>{}</h4><p class="muted">{}</p>{}</div>"#,
                class,
                badge.glyph,
                escape(badge.name),
                escape(badge.description),
                marker
            )
        })
        .collect();

    format!(
        r#"{header}
<div class="grid">{stats}</div>
<div class="grid">
<div class="card"><h3>{chart_co2}</h3>{line}</div>
<div class="card"><h3>{chart_resources}</h3>{bars}</div>
</div>
<div class="card"><h3>{badges_title}</h3><div class="grid">{badges}</div></div>"#,
        header = page_header(strings.title, strings.subtitle),
        stats = stat_cards,
        chart_co2 = escape(strings.chart_co2),
        line = line_chart(&CO2_SERIES),
        chart_resources = escape(strings.chart_resources),
        bars = bar_chart(),
        badges_title = escape(strings.badges_title),
        badges = badge_cards,
    )
}

/// Scale `value` against `max` onto the chart height, top-down.
fn scale_y(value: u32, max: u32) -> u32 {
    if max == 0 {
        return CHART_HEIGHT;
    }
    CHART_HEIGHT - value * CHART_HEIGHT / max
}

fn line_chart(series: &[(&str, u32)]) -> String {
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let step = CHART_WIDTH / series.len().max(1) as u32;

    let points: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(i, (_, value))| format!("{},{}", i as u32 * step + step / 2, scale_y(*value, max)))
        .collect();
    let labels: String = series
        .iter()
        .enumerate()
        .map(|(i, (month, _))| {
            format!(
                r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                i as u32 * step + step / 2,
                CHART_HEIGHT + 16,
                escape(month)
            )
        })
        .collect();

    format!(
        r##"<svg class="chart" viewBox="0 0 {w} {h}" role="img"><polyline fill="none" stroke="#2aa36b" stroke-width="2" points="{points}"/>{labels}</svg>"##,
        w = CHART_WIDTH,
        h = CHART_HEIGHT + 24,
        points = points.join(" "),
        labels = labels,
    )
}

fn bar_chart() -> String {
    let max = EXCHANGE_SERIES.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let step = CHART_WIDTH / EXCHANGE_SERIES.len() as u32;
    let bar_width = step / 2;

    let bars: String = EXCHANGE_SERIES
        .iter()
        .enumerate()
        .map(|(i, (category, value))| {
            let x = i as u32 * step + step / 4;
            let y = scale_y(*value, max);
            format!(
                r#"<rect class="{color}" x="{x}" y="{y}" width="{bw}" height="{bh}"><title>{value}</title></rect><text x="{lx}" y="{ly}" text-anchor="middle">{label}</text>"#,
                color = category.color(),
                x = x,
                y = y,
                bw = bar_width,
                bh = CHART_HEIGHT - y,
                value = value,
                lx = x + bar_width / 2,
                ly = CHART_HEIGHT + 16,
                label = escape(category.short_label()),
            )
        })
        .collect();

    format!(
        r#"<svg class="chart" viewBox="0 0 {} {}" role="img">{}</svg>"#,
        CHART_WIDTH,
        CHART_HEIGHT + 24,
        bars
    )
}
