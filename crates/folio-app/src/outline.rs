//! Plain-text page outline printed after a run.

use std::fmt::Write;

use folio_config::schema::RevealConfig;
use folio_content::{Content, Page};
use folio_renderer::Stagger;

/// Delay before the first skill bar starts filling, seconds.
const SKILL_BAR_BASE_DELAY: f32 = 0.8;

pub fn render(content: &Content, page: &Page, reveal: &RevealConfig) -> String {
    let mut out = String::new();
    let title = if content.meta.title.is_empty() {
        "(untitled)"
    } else {
        content.meta.title.as_str()
    };
    let _ = writeln!(out, "{title}");
    if !content.profile.role.is_empty() {
        let _ = writeln!(out, "  {}", content.profile.role);
    }
    let _ = writeln!(out);

    for section in page.outline() {
        match &section.placeholder {
            Some(message) => {
                let _ = writeln!(out, "[{}] {}: {message}", section.id, section.title);
            }
            None => {
                let _ = writeln!(
                    out,
                    "[{}] {} ({} items)",
                    section.id, section.title, section.items
                );
            }
        }
    }

    let bars = page.skills.skills.items();
    if !bars.is_empty() {
        let stagger = Stagger::from_config(reveal, SKILL_BAR_BASE_DELAY);
        let _ = writeln!(out);
        for (i, bar) in bars.iter().enumerate() {
            let delay = stagger.item(i).delay;
            let _ = writeln!(out, "  {:<16} {:>3}%  +{delay:.1}s", bar.name, bar.level);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::Skill;

    #[test]
    fn empty_content_lists_placeholders() {
        let content = Content::default();
        let page = Page::build(&content, true);
        let text = render(&content, &page, &RevealConfig::default());
        assert!(text.starts_with("(untitled)"));
        assert!(text.contains("[projects] Projects: No projects available at the moment."));
    }

    #[test]
    fn skill_bars_are_staggered() {
        let content = Content {
            skills: vec![
                Skill {
                    name: "Python".into(),
                    level: 95,
                    ..Default::default()
                },
                Skill {
                    name: "Docker".into(),
                    level: 92,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let page = Page::build(&content, false);
        let text = render(&content, &page, &RevealConfig::default());
        assert!(text.contains("[skills] Skills (2 items)"));
        assert!(text.contains("95%  +0.8s"));
        assert!(text.contains("92%  +0.9s"));
    }
}
