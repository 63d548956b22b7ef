use crate::catalog::{SuccessStory, STORIES};
use crate::i18n::{LanguageContext, StoriesStrings};

use super::{badges, escape, page_header};

pub fn title(ctx: &LanguageContext) -> &'static str {
    ctx.strings().stories.title
}

pub fn render(ctx: &LanguageContext) -> String {
    let strings = &ctx.strings().stories;
    let stories: String = STORIES.iter().map(|story| story_card(strings, story)).collect();

    format!(
        r#"{}<div class="stories">{}</div>"#,
        page_header(strings.title, strings.subtitle),
        stories
    )
}

fn story_card(strings: &StoriesStrings, story: &SuccessStory) -> String {
    let impact = [
        (strings.co2_saved, story.impact.co2),
        (strings.distance, story.impact.distance),
        (strings.materials, story.impact.materials),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="card stat"><p class="muted">{}</p><p class="stat-value">{}</p></div>"#,
            escape(label),
            escape(value)
        )
    })
    .collect::<String>();

    format!(
        r#"<article class="card story" id="story-{id}">
<h3>{title}</h3>
<p class="muted">{company} • 📍 {location} • {date}</p>
<p>{description}</p>
<div class="grid">{impact}</div>
<div>{tags}</div>
</article>"#,
        id = story.id,
        title = escape(story.title),
        company = escape(story.company),
        location = escape(story.location),
        date = escape(story.date),
        description = escape(story.description),
        impact = impact,
        tags = badges(story.tags, "badge"),
    )
}
