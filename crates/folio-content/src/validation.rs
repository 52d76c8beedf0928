//! Content validation.
//!
//! Collects every problem and reports them together, the same way the
//! config validator does.

use std::collections::HashSet;

use folio_common::ContentError;

use crate::records::{Content, Skill};

pub fn validate(content: &Content) -> Result<(), ContentError> {
    let mut errors = Vec::new();

    validate_skills("skills", &content.skills, &mut errors);
    for (i, category) in content.skill_categories.iter().enumerate() {
        require(&category.title, &format!("skill_categories[{i}].title"), &mut errors);
        validate_skills(
            &format!("skill_categories[{i}].skills"),
            &category.skills,
            &mut errors,
        );
    }

    for (i, cert) in content.certifications.iter().enumerate() {
        require(&cert.title, &format!("certifications[{i}].title"), &mut errors);
    }

    for (i, project) in content.projects.iter().enumerate() {
        require(&project.title, &format!("projects[{i}].title"), &mut errors);
    }

    let mut slugs = HashSet::new();
    for (i, post) in content.posts.iter().enumerate() {
        require(&post.title, &format!("posts[{i}].title"), &mut errors);
        require(&post.slug, &format!("posts[{i}].slug"), &mut errors);
        if !post.slug.is_empty() && !slugs.insert(post.slug.as_str()) {
            errors.push(format!("posts[{i}].slug: duplicate slug {:?}", post.slug));
        }
    }

    for (i, link) in content.social.iter().enumerate() {
        require(&link.name, &format!("social[{i}].name"), &mut errors);
        require(&link.url, &format!("social[{i}].url"), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ContentError::ValidationError(errors.join("; ")))
    }
}

fn validate_skills(prefix: &str, skills: &[Skill], errors: &mut Vec<String>) {
    for (i, skill) in skills.iter().enumerate() {
        require(&skill.name, &format!("{prefix}[{i}].name"), errors);
        if skill.level > 100 {
            errors.push(format!(
                "{prefix}[{i}].level: must be at most 100, got {}",
                skill.level
            ));
        }
    }
}

fn require(value: &str, field: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: must not be empty"));
    }
}
