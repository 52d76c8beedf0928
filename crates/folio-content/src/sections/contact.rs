//! Contact: social links and a local-only contact form.
//!
//! The form keeps its state in memory. Submitting it logs the message and
//! returns a snapshot; nothing leaves the process.

use std::fmt;
use std::str::FromStr;

use folio_common::ContentError;
use serde::Serialize;
use tracing::{info, warn};

use super::SectionBody;
use crate::records::{Content, SocialLink};

pub const NO_LINKS: &str = "No contact links yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSection {
    pub links: SectionBody<SocialLink>,
    pub email: String,
}

impl ContactSection {
    pub fn build(content: &Content) -> Self {
        Self {
            links: SectionBody::from_items(content.social.clone(), NO_LINKS),
            email: content.profile.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "subject" => Ok(FormField::Subject),
            "message" => Ok(FormField::Message),
            other => Err(ContentError::UnknownField(other.to_string())),
        }
    }
}

/// What a submission logs: field sizes only, never the visitor's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionLog {
    pub name_len: usize,
    pub email_len: usize,
    pub subject_len: usize,
    pub message_len: usize,
}

/// In-memory contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field by its input name.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), ContentError> {
        let field: FormField = field.parse()?;
        *self.slot(field) = value.into();
        Ok(())
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Log the submission locally and return a snapshot of it.
    pub fn submit(&self) -> ContactForm {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(FormField::as_str).collect();
            warn!(missing = ?names, "contact form submitted with blank fields");
        }
        let log = self.log_fields();
        info!(
            name_len = log.name_len,
            email_len = log.email_len,
            subject_len = log.subject_len,
            message_len = log.message_len,
            "contact form submitted"
        );
        self.clone()
    }

    pub fn log_fields(&self) -> SubmissionLog {
        SubmissionLog {
            name_len: self.name.len(),
            email_len: self.email.len(),
            subject_len: self.subject.len(),
            message_len: self.message.len(),
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }
}
