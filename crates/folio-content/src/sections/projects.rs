//! Projects: published datasets and models with download and row counts.

use serde::Serialize;

use super::SectionBody;
use crate::records::{Content, Project};

pub const NO_PROJECTS: &str = "No projects available at the moment.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub huggingface: String,
    pub demo: String,
    pub downloads: String,
    pub rows: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech.clone(),
            huggingface: project.huggingface.clone(),
            demo: project.demo.clone(),
            downloads: group_thousands(project.downloads),
            rows: group_thousands(project.rows),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsSection {
    pub cards: SectionBody<ProjectCard>,
    pub total_downloads: u64,
}

impl ProjectsSection {
    pub fn build(content: &Content) -> Self {
        let cards = content.projects.iter().map(ProjectCard::from).collect();
        Self {
            cards: SectionBody::from_items(cards, NO_PROJECTS),
            total_downloads: content.projects.iter().map(|p| p.downloads).sum(),
        }
    }
}

/// Format with comma thousands separators: `1785725` becomes `1,785,725`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(30), "30");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(1785725), "1,785,725");
        assert_eq!(group_thousands(63002273), "63,002,273");
    }

    #[test]
    fn cards_format_counts() {
        let content = Content {
            projects: vec![Project {
                title: "Chemistry".into(),
                downloads: 88,
                rows: 63002273,
                ..Default::default()
            }],
            ..Default::default()
        };
        let section = ProjectsSection::build(&content);
        let card = &section.cards.items()[0];
        assert_eq!(card.rows, "63,002,273");
        assert_eq!(card.downloads, "88");
        assert_eq!(section.total_downloads, 88);
    }

    #[test]
    fn no_projects_placeholder() {
        let section = ProjectsSection::build(&Content::default());
        assert_eq!(section.cards.placeholder(), Some(NO_PROJECTS));
    }
}
