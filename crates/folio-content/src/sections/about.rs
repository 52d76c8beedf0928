//! About: personal details, interests and philosophy.

use serde::Serialize;

use super::SectionBody;
use crate::records::{Content, Interest, PersonalDetail, Profile};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSection {
    pub profile: Profile,
    pub details: SectionBody<PersonalDetail>,
    pub interests: Vec<Interest>,
    pub philosophy: Vec<String>,
}

impl AboutSection {
    pub fn build(content: &Content) -> Self {
        Self {
            profile: content.profile.clone(),
            details: SectionBody::from_items(content.details.clone(), "No details available."),
            interests: content.interests.clone(),
            philosophy: content.philosophy.clone(),
        }
    }
}
