//! Content records shown on the page.
//!
//! Every field has a serde default so a content file only needs the
//! sections it actually fills in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Site metadata for the document head.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
}

/// Hero section identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub icon: String,
    pub description: String,
    pub certified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    /// Year or free-form date as displayed.
    pub date: String,
    pub level: String,
    pub icon: String,
}

/// Headline number such as "6+ Months Experience".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub metric: String,
    pub icon: String,
}

/// A published dataset or model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub huggingface: String,
    pub demo: String,
    pub downloads: u64,
    pub rows: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interest {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub category: String,
    pub slug: String,
    #[serde(default)]
    pub featured: bool,
}

/// Root of a content file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub meta: PageMeta,
    pub profile: Profile,
    /// Headline skills shown as bars in the showcase.
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    pub skill_categories: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub social: Vec<SocialLink>,
    pub details: Vec<PersonalDetail>,
    pub interests: Vec<Interest>,
    pub philosophy: Vec<String>,
}
