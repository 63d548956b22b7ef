use crate::catalog::{MatchProposal, MATCHES};
use crate::i18n::{LanguageContext, MatchingStrings};

use super::{badges, escape, fill, page_header};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().matching.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().matching;
    let cards: String = MATCHES
        .iter()
        .map(|proposal| match_card(ctx, proposal))
        .collect();

    format!(
        r#"{}<div class="matches">{}</div>"#,
        page_header(strings.title, strings.subtitle),
        cards
    )
}

fn party(name: &str, role: &str, class: &str) -> String {
    format!(
        r#"<div class="party {}"><span class="glyph">🏭</span><div><p>{}</p><p class="muted">{}</p></div></div>"#,
        class,
        escape(name),
        escape(role)
    )
}

/// Provider → optional intermediary → receiver.
fn chain(proposal: &MatchProposal, strings: &MatchingStrings) -> String {
    let mut parts = vec![party(proposal.provider, strings.provider, "provider")];
    if let Some(intermediary) = proposal.intermediary {
        parts.push(party(intermediary, strings.intermediary, "intermediary"));
    }
    parts.push(party(proposal.receiver, strings.receiver, "receiver"));
    parts.join(r#"<span class="arrow">→</span>"#)
}

fn match_card(ctx: &LanguageContext, proposal: &MatchProposal) -> String {
    let strings = &ctx.strings().matching;

    format!(
        r#"<article class="card match" id="match-{id}">
<div><span class="badge success">{score}</span>{tags}</div>
<h3>{heading}</h3>
<p class="muted">{description}</p>
<div class="chain">{chain}</div>
<p><span class="muted">📍 {distance}</span> <span class="success">{co2}</span></p>
<button class="button">{propose}</button>
<button class="button button-outline">{details}</button>
</article>"#,
        id = proposal.id,
        score = fill(strings.match_badge, "score", &proposal.compatibility.to_string()),
        tags = badges(proposal.tags, "badge"),
        heading = fill(strings.exchange, "resource", proposal.resource),
        description = escape(proposal.description),
        chain = chain(proposal, strings),
        distance = fill(strings.distance, "distance", proposal.distance),
        co2 = fill(strings.co2_saved, "value", proposal.co2_saved),
        propose = escape(strings.propose),
        details = escape(ctx.strings().common.view_details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_all_matches() {
        let html = render(&LanguageContext::default());

        assert_eq!(html.matches(r#"<article class="card match""#).count(), 3);
        assert!(html.contains("95% Match"));
        assert!(html.contains("Waste Heat Exchange"));
        assert!(html.contains("2.8t/month CO₂ saved"));
    }

    #[test]
    fn test_intermediary_only_when_present() {
        let html = render(&LanguageContext::default());

        assert_eq!(html.matches(r#"class="party intermediary""#).count(), 1);
        assert!(html.contains("TransitHub GmbH"));
    }

    #[test]
    fn test_chain_order() {
        let strings = &LanguageContext::default().strings().matching;
        let html = chain(&MATCHES[1], strings);

        let provider = html.find("GlassWorks Industries").unwrap();
        let intermediary = html.find("TransitHub GmbH").unwrap();
        let receiver = html.find("BuildMat Recycling").unwrap();
        assert!(provider < intermediary && intermediary < receiver);
        assert_eq!(html.matches('→').count(), 2);
    }
}
