#![allow(dead_code)]

//! Document assembly: projects a `NormalizedRecord` into the ordered section
//! tree that both HTML projections consume.
//!
//! # Emission rules
//! - Fixed section order: Header, Summary, Skills, Experience.
//! - Sections are never dropped: an empty collection renders its fallback
//!   line, not nothing.
//! - Contact sub-items are the only conditionally-emitted elements. Their
//!   visibility predicate (underlying field non-empty) is evaluated exactly
//!   once, here; invisible items do not exist in the tree at all.
//! - Every section and every experience block is an atomic pagination unit.
//!
//! Assembly is pure and deterministic: the same normalized record always
//! produces a structurally identical tree.

use serde::{Deserialize, Serialize};

use crate::normalize::{display_url, NormalizedPersonalInformation, NormalizedRecord};

/// Fallback line shown when the skills sequence is empty.
pub const SKILLS_FALLBACK: &str = "No skills listed";
/// Fallback line shown when the experience sequence is empty.
pub const EXPERIENCE_FALLBACK: &str = "No experience listed";

// ────────────────────────────────────────────────────────────────────────────
// Document tree types
// ────────────────────────────────────────────────────────────────────────────

/// The assembled document: an ordered, structurally fixed sequence of
/// sections. Ephemeral; recomputed wholesale on every record submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub sections: Vec<Section>,
}

impl RenderedDocument {
    /// Looks up a section by identifier. The four sections always exist.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Stable identifier for each of the four document sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Summary,
    Skills,
    Experience,
}

impl SectionId {
    /// The printed section heading. The header has none: it renders the
    /// person's name as its own heading.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            SectionId::Header => None,
            SectionId::Summary => Some("SUMMARY"),
            SectionId::Skills => Some("SKILLS"),
            SectionId::Experience => Some("EXPERIENCE"),
        }
    }

    /// Lower-case identifier used for HTML element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Summary => "summary",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
        }
    }
}

/// One structurally fixed region of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: Option<String>,
    /// Atomic pagination unit: the print projection must keep this section
    /// on a single page.
    pub atomic: bool,
    pub content: SectionContent,
}

/// Section content. `Fallback` is what an empty collection assembles to, so
/// emptiness is decided once here rather than re-checked at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionContent {
    Header(HeaderContent),
    Paragraph { text: String },
    Badges { items: Vec<Badge> },
    Entries { items: Vec<ExperienceBlock> },
    Fallback { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderContent {
    pub full_name: String,
    pub location: String,
    /// Only the contact items whose visibility predicate passed. Fixed order:
    /// email, phone, GitHub, LinkedIn.
    pub contacts: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    /// Display value: link kinds carry the protocol-stripped form.
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    GitHub,
    LinkedIn,
}

impl ContactKind {
    /// Short label rendered in front of the contact value.
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::GitHub => "GitHub",
            ContactKind::LinkedIn => "LinkedIn",
        }
    }

    /// Link kinds get the `display_url` transform and sit on the second
    /// header contact row.
    pub fn is_link(self) -> bool {
        matches!(self, ContactKind::GitHub | ContactKind::LinkedIn)
    }
}

/// One skill badge. The label is preformatted as "{title} ({level})".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
}

/// One experience entry: four stacked display lines, an atomic pagination
/// unit of its own. Empty subfields stay empty; no placeholder injection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    pub job_title: String,
    /// Composed second line: "{company} | {location}".
    pub company_line: String,
    pub duration: String,
    pub responsibility: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Projects the normalized record into the four-section document tree.
pub fn assemble(normalized: &NormalizedRecord) -> RenderedDocument {
    RenderedDocument {
        sections: vec![
            header_section(&normalized.personal_information),
            summary_section(&normalized.summary),
            skills_section(normalized),
            experience_section(normalized),
        ],
    }
}

fn section(id: SectionId, content: SectionContent) -> Section {
    Section {
        id,
        title: id.heading().map(str::to_string),
        atomic: true,
        content,
    }
}

fn header_section(personal: &NormalizedPersonalInformation) -> Section {
    section(
        SectionId::Header,
        SectionContent::Header(HeaderContent {
            full_name: personal.full_name.clone(),
            location: personal.location.clone(),
            contacts: contact_items(personal),
        }),
    )
}

fn summary_section(summary: &str) -> Section {
    section(
        SectionId::Summary,
        SectionContent::Paragraph {
            text: summary.to_string(),
        },
    )
}

fn skills_section(normalized: &NormalizedRecord) -> Section {
    let content = if normalized.skills.is_empty() {
        SectionContent::Fallback {
            text: SKILLS_FALLBACK.to_string(),
        }
    } else {
        SectionContent::Badges {
            items: normalized
                .skills
                .iter()
                .map(|skill| Badge {
                    label: format!("{} ({})", skill.title, skill.level),
                })
                .collect(),
        }
    };
    section(SectionId::Skills, content)
}

fn experience_section(normalized: &NormalizedRecord) -> Section {
    let content = if normalized.experience.is_empty() {
        SectionContent::Fallback {
            text: EXPERIENCE_FALLBACK.to_string(),
        }
    } else {
        SectionContent::Entries {
            items: normalized
                .experience
                .iter()
                .map(|entry| ExperienceBlock {
                    job_title: entry.job_title.clone(),
                    company_line: format!("{} | {}", entry.company, entry.location),
                    duration: entry.duration.clone(),
                    responsibility: entry.responsibility.clone(),
                })
                .collect(),
        }
    };
    section(SectionId::Experience, content)
}

/// Evaluates the visibility predicate for each optional contact element.
/// The predicate looks at the underlying normalized field; the display
/// transform applies afterwards, so a link field is judged before stripping.
fn contact_items(personal: &NormalizedPersonalInformation) -> Vec<ContactItem> {
    let candidates = [
        (ContactKind::Email, &personal.email),
        (ContactKind::Phone, &personal.phone_number),
        (ContactKind::GitHub, &personal.git_hub),
        (ContactKind::LinkedIn, &personal.linked_in),
    ];

    candidates
        .into_iter()
        .filter(|(_, field)| !field.is_empty())
        .map(|(kind, field)| ContactItem {
            kind,
            value: if kind.is_link() {
                display_url(field).to_string()
            } else {
                field.clone()
            },
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
