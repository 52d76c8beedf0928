//! Section view-models.
//!
//! Each section is built from the loaded content. A section whose source
//! list is empty renders a placeholder message instead of items; that is
//! the only way a section can "fail".

mod about;
mod blog;
mod contact;
mod projects;
mod skills;

pub use about::*;
pub use blog::*;
pub use contact::*;
pub use projects::*;
pub use skills::*;

use serde::Serialize;

use crate::records::Content;

/// Items to render, or the message shown in their place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SectionBody<T> {
    Items(Vec<T>),
    Placeholder(String),
}

impl<T> SectionBody<T> {
    pub fn from_items(items: Vec<T>, placeholder: &str) -> Self {
        if items.is_empty() {
            SectionBody::Placeholder(placeholder.to_string())
        } else {
            SectionBody::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            SectionBody::Items(items) => items,
            SectionBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            SectionBody::Items(_) => None,
            SectionBody::Placeholder(message) => Some(message),
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// One line of the page outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub items: usize,
    pub placeholder: Option<String>,
}

impl SectionSummary {
    fn of<T>(id: &'static str, title: &'static str, body: &SectionBody<T>) -> Self {
        Self {
            id,
            title,
            items: body.len(),
            placeholder: body.placeholder().map(str::to_string),
        }
    }
}

/// Every section of the page, in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub about: AboutSection,
    pub skills: SkillsShowcase,
    pub projects: ProjectsSection,
    pub blog: BlogSection,
    pub contact: ContactSection,
}

impl Page {
    pub fn build(content: &Content, show_certifications: bool) -> Self {
        Self {
            about: AboutSection::build(content),
            skills: SkillsShowcase::build(content, show_certifications),
            projects: ProjectsSection::build(content),
            blog: BlogSection::build(content),
            contact: ContactSection::build(content),
        }
    }

    pub fn outline(&self) -> Vec<SectionSummary> {
        let mut lines = vec![
            SectionSummary::of("about", "About", &self.about.details),
            SectionSummary::of("skills", "Skills", &self.skills.skills),
        ];
        if let Some(certs) = &self.skills.certifications {
            lines.push(SectionSummary::of("certifications", "Certifications", certs));
        }
        lines.extend([
            SectionSummary::of("projects", "Projects", &self.projects.cards),
            SectionSummary::of("blog", "Blog", &self.blog.posts),
            SectionSummary::of("contact", "Contact", &self.contact.links),
        ]);
        lines
    }
}
