//! Skills showcase: headline skill bars, stats, and optional certifications.

use serde::Serialize;

use super::SectionBody;
use crate::records::{Achievement, Certification, Content, Skill, SkillCategory, Stat};

pub const NO_SKILLS: &str = "No skills listed yet.";
pub const NO_CERTIFICATIONS: &str = "No certifications yet.";

/// A single animated proficiency bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Target fill, percent.
    pub level: u8,
    pub certified: bool,
}

impl From<&Skill> for SkillBar {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            icon: skill.icon.clone(),
            description: skill.description.clone(),
            level: skill.level.min(100),
            certified: skill.certified,
        }
    }
}

/// Certifications, categorised skills and achievements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationsBlock {
    pub certifications: Vec<Certification>,
    pub categories: Vec<SkillCategory>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsShowcase {
    pub skills: SectionBody<SkillBar>,
    pub stats: Vec<Stat>,
    /// `None` when the certifications block is switched off.
    pub certifications: Option<SectionBody<CertificationsBlock>>,
}

impl SkillsShowcase {
    pub fn build(content: &Content, show_certifications: bool) -> Self {
        let bars = content.skills.iter().map(SkillBar::from).collect();
        let certifications = show_certifications.then(|| {
            let block = CertificationsBlock {
                certifications: content.certifications.clone(),
                categories: content.skill_categories.clone(),
                achievements: content.achievements.clone(),
            };
            let has_any = !block.certifications.is_empty()
                || !block.categories.is_empty()
                || !block.achievements.is_empty();
            let items = if has_any { vec![block] } else { Vec::new() };
            SectionBody::from_items(items, NO_CERTIFICATIONS)
        });

        Self {
            skills: SectionBody::from_items(bars, NO_SKILLS),
            stats: content.stats.clone(),
            certifications,
        }
    }

    /// Number of certified skills across all categories.
    pub fn certified_count(&self) -> usize {
        self.certifications
            .as_ref()
            .and_then(|body| body.items().first())
            .map(|block| {
                block
                    .categories
                    .iter()
                    .flat_map(|c| &c.skills)
                    .filter(|s| s.certified)
                    .count()
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Content {
        Content {
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
            skill_categories: vec![SkillCategory {
                title: "Cloud".into(),
                skills: vec![
                    Skill {
                        name: "AWS".into(),
                        certified: true,
                        ..Default::default()
                    },
                    Skill {
                        name: "Azure".into(),
                        ..Default::default()
                    },
                ],
            }],
            certifications: vec![Certification {
                title: "CS50x".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn bars_follow_content_order() {
        let showcase = SkillsShowcase::build(&content(), true);
        let names: Vec<_> = showcase.skills.items().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Python", "Docker"]);
        assert_eq!(showcase.skills.items()[0].level, 95);
    }

    #[test]
    fn certifications_block_is_optional() {
        let with = SkillsShowcase::build(&content(), true);
        let without = SkillsShowcase::build(&content(), false);
        assert!(with.certifications.is_some());
        assert!(without.certifications.is_none());
        assert_eq!(with.skills, without.skills);
    }

    #[test]
    fn counts_certified_skills() {
        assert_eq!(SkillsShowcase::build(&content(), true).certified_count(), 1);
        assert_eq!(SkillsShowcase::build(&content(), false).certified_count(), 0);
    }

    #[test]
    fn empty_content_shows_placeholders() {
        let showcase = SkillsShowcase::build(&Content::default(), true);
        assert_eq!(showcase.skills.placeholder(), Some(NO_SKILLS));
        assert_eq!(
            showcase.certifications.and_then(|c| c.placeholder().map(str::to_string)),
            Some(NO_CERTIFICATIONS.to_string())
        );
    }
}
