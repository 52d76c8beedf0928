//! Portfolio page content: records, loading, validation and section
//! view-models.
//!
//! Content lives in a TOML file and is injected into the section builders;
//! nothing here is hard-coded.

pub mod loader;
pub mod records;
pub mod sections;
pub mod validation;

pub use loader::{load_from_path, parse_content};
pub use records::*;
pub use sections::{ContactForm, FormField, Page, SectionBody, SectionSummary};
