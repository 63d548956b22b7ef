use crate::catalog::{IdeaPost, IDEAS};
use crate::i18n::LanguageContext;

use super::{badges, escape, fill, page_header};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().ideas.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().ideas;
    let posts: String = IDEAS.iter().map(|idea| idea_card(ctx, idea)).collect();

    format!(
        r#"{}<button class="button">💡 {}</button><div class="ideas">{}</div>"#,
        page_header(strings.title, strings.subtitle),
        escape(strings.post_idea),
        posts
    )
}

fn idea_card(ctx: &LanguageContext, idea: &IdeaPost) -> String {
    let strings = &ctx.strings().ideas;

    format!(
        r#"<article class="card idea" id="idea-{id}">
<div class="votes"><button class="button button-outline">▲</button><strong>{votes}</strong><span class="muted">{votes_label}</span></div>
<div>
<h3>{title}</h3>
<p class="muted">{author} • {company} • {date}</p>
<p>{description}</p>
<div>{tags}</div>
<p class="muted">💬 {comments}</p>
</div>
</article>"#,
        id = idea.id,
        votes = idea.votes,
        votes_label = escape(strings.votes),
        title = escape(idea.title),
        author = escape(idea.author),
        company = escape(idea.company),
        date = escape(idea.date),
        description = escape(idea.description),
        tags = badges(idea.tags, "badge badge-secondary"),
        comments = fill(strings.comments, "count", &idea.comments.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_lists_ideas_with_votes() {
        let html = render(&LanguageContext::default());

        assert_eq!(html.matches(r#"<article class="card idea""#).count(), 4);
        assert!(html.contains("<strong>42</strong>"));
        assert!(html.contains("15 comments"));
        assert!(html.contains("Klaus Müller"));
    }

    #[test]
    fn test_ideas_translated_chrome() {
        let html = render(&LanguageContext::new(Language::FRENCH));
        assert!(!html.contains("Post New Idea"));
        // Sample content stays as written.
        assert!(html.contains("Regional Heat Network Integration"));
    }
}
