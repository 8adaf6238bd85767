//! Wire model of the resume record supplied by the generation/editing
//! collaborator.
//!
//! Every field is optional: absent, JSON `null`, and `""` all mean "unset".
//! No schema enforcement happens here beyond shape tolerance; resolving unset
//! fields to renderable values is the normalizer's job.

use serde::{Deserialize, Serialize};

/// Artifact title used when the record carries no usable full name.
/// Note: this is distinct from the display placeholder ("Your Name"), which
/// never leaks into the exported file name.
pub const DEFAULT_ARTIFACT_TITLE: &str = "Resume";

/// The raw resume record, exactly as the caller submits it.
/// Immutable during a render cycle; rendering never writes back into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_information: Option<PersonalInformation>,
    pub summary: Option<String>,
    pub skills: Option<Vec<SkillEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInformation {
    pub full_name: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub git_hub: Option<String>,
    pub linked_in: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub title: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub responsibility: Option<String>,
}

impl ResumeRecord {
    /// Title of the exported artifact: the full name when one is set,
    /// otherwise the generic fallback.
    pub fn artifact_title(&self) -> String {
        self.personal_information
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ARTIFACT_TITLE)
            .to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
