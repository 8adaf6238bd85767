//! Total normalization of submitted resume records: maps a partially-filled
//! `ResumeRecord` to a `NormalizedRecord` with deterministic defaults.
//!
//! # Normalization rules
//! - `fullName` unset → "Your Name"; `location` unset → "Your Location"
//! - contact fields unset → "" (omission from display is the renderer's call)
//! - `summary` unset → "Brief summary about yourself."
//! - `skills` / `experience` absent → empty sequence; item subfields get no
//!   per-field placeholder and render as empty text
//!
//! "Unset" means absent, `null`, or the empty string, and nothing else:
//! whitespace-only values are set and pass through untouched. Normalization
//! never fails, never logs, and never mutates its input.

use serde::{Deserialize, Serialize};

use crate::models::record::{ExperienceEntry, PersonalInformation, ResumeRecord, SkillEntry};

/// Display placeholder for an unset full name.
pub const FULL_NAME_PLACEHOLDER: &str = "Your Name";
/// Display placeholder for an unset location.
pub const LOCATION_PLACEHOLDER: &str = "Your Location";
/// Display placeholder for an unset summary paragraph.
pub const SUMMARY_PLACEHOLDER: &str = "Brief summary about yourself.";

// ────────────────────────────────────────────────────────────────────────────
// Normalized types
// ────────────────────────────────────────────────────────────────────────────

/// Fully-populated record: every scalar is a non-null string, every sequence
/// is present. Downstream code needs no null checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub personal_information: NormalizedPersonalInformation,
    pub summary: String,
    pub skills: Vec<NormalizedSkill>,
    pub experience: Vec<NormalizedExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPersonalInformation {
    pub full_name: String,
    pub location: String,
    /// Contact fields: empty string when unset, never a placeholder.
    pub email: String,
    pub phone_number: String,
    pub git_hub: String,
    pub linked_in: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSkill {
    pub title: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedExperience {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub responsibility: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Resolves every field of the record to a safe, renderable value.
/// Total function: any input produces a complete `NormalizedRecord`.
pub fn normalize(record: &ResumeRecord) -> NormalizedRecord {
    let personal = record.personal_information.as_ref();

    NormalizedRecord {
        personal_information: normalize_personal(personal),
        summary: text_or(record.summary.as_ref(), SUMMARY_PLACEHOLDER),
        skills: record
            .skills
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_skill)
            .collect(),
        experience: record
            .experience
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_experience)
            .collect(),
    }
}

fn normalize_personal(personal: Option<&PersonalInformation>) -> NormalizedPersonalInformation {
    // A missing personalInformation object behaves exactly like one with all
    // fields unset.
    let empty = PersonalInformation::default();
    let p = personal.unwrap_or(&empty);

    NormalizedPersonalInformation {
        full_name: text_or(p.full_name.as_ref(), FULL_NAME_PLACEHOLDER),
        location: text_or(p.location.as_ref(), LOCATION_PLACEHOLDER),
        email: text_or_empty(p.email.as_ref()),
        phone_number: text_or_empty(p.phone_number.as_ref()),
        git_hub: text_or_empty(p.git_hub.as_ref()),
        linked_in: text_or_empty(p.linked_in.as_ref()),
    }
}

fn normalize_skill(skill: &SkillEntry) -> NormalizedSkill {
    NormalizedSkill {
        title: text_or_empty(skill.title.as_ref()),
        level: text_or_empty(skill.level.as_ref()),
    }
}

fn normalize_experience(entry: &ExperienceEntry) -> NormalizedExperience {
    NormalizedExperience {
        job_title: text_or_empty(entry.job_title.as_ref()),
        company: text_or_empty(entry.company.as_ref()),
        location: text_or_empty(entry.location.as_ref()),
        duration: text_or_empty(entry.duration.as_ref()),
        responsibility: text_or_empty(entry.responsibility.as_ref()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Display transforms
// ────────────────────────────────────────────────────────────────────────────

/// Strips one leading "https://" for display. Presentation-only: the stored
/// normalized value keeps its protocol prefix.
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// The value itself when set (non-empty), otherwise the fallback.
fn text_or(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

/// The value itself when set, otherwise the empty string.
fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_json(json: &str) -> NormalizedRecord {
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        normalize(&record)
    }

    // ── placeholders ────────────────────────────────────────────────────────

    #[test]
    fn test_empty_record_resolves_every_scalar() {
        let normalized = normalize(&ResumeRecord::default());
        let p = &normalized.personal_information;
        assert_eq!(p.full_name, FULL_NAME_PLACEHOLDER);
        assert_eq!(p.location, LOCATION_PLACEHOLDER);
        assert_eq!(p.email, "");
        assert_eq!(p.phone_number, "");
        assert_eq!(p.git_hub, "");
        assert_eq!(p.linked_in, "");
        assert_eq!(normalized.summary, SUMMARY_PLACEHOLDER);
        assert!(normalized.skills.is_empty());
        assert!(normalized.experience.is_empty());
    }

    #[test]
    fn test_empty_string_counts_as_unset() {
        let normalized = normalize_json(
            r#"{"personalInformation": {"fullName": "", "email": ""}, "summary": ""}"#,
        );
        assert_eq!(normalized.personal_information.full_name, FULL_NAME_PLACEHOLDER);
        assert_eq!(normalized.personal_information.email, "");
        assert_eq!(normalized.summary, SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_whitespace_only_is_set_and_untrimmed() {
        let normalized = normalize_json(r#"{"personalInformation": {"fullName": "  "}}"#);
        assert_eq!(
            normalized.personal_information.full_name, "  ",
            "whitespace-only values must pass through without placeholder or trim"
        );
    }

    #[test]
    fn test_set_values_pass_through() {
        let normalized = normalize_json(
            r#"{
                "personalInformation": {"fullName": "Jane Doe", "email": "jane@x.com"},
                "summary": "Engineer."
            }"#,
        );
        assert_eq!(normalized.personal_information.full_name, "Jane Doe");
        assert_eq!(normalized.personal_information.email, "jane@x.com");
        assert_eq!(normalized.summary, "Engineer.");
    }

    // ── sequences ───────────────────────────────────────────────────────────

    #[test]
    fn test_missing_sequences_become_empty() {
        let normalized = normalize_json(r#"{"skills": null}"#);
        assert!(normalized.skills.is_empty());
        assert!(normalized.experience.is_empty());
    }

    #[test]
    fn test_sequence_order_is_preserved() {
        let normalized = normalize_json(
            r#"{"skills": [
                {"title": "Go", "level": "Expert"},
                {"title": "Rust", "level": "Advanced"},
                {"title": "SQL", "level": "Intermediate"}
            ]}"#,
        );
        let titles: Vec<&str> = normalized.skills.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Go", "Rust", "SQL"], "input order, no sorting");
    }

    #[test]
    fn test_item_subfields_get_no_placeholder() {
        let normalized = normalize_json(r#"{"experience": [{"jobTitle": "Engineer"}]}"#);
        let entry = &normalized.experience[0];
        assert_eq!(entry.job_title, "Engineer");
        assert_eq!(entry.company, "");
        assert_eq!(entry.location, "");
        assert_eq!(entry.duration, "");
        assert_eq!(entry.responsibility, "");
    }

    // ── purity ──────────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_is_deterministic_and_does_not_mutate() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"personalInformation": {"gitHub": "https://github.com/j"}}"#)
                .unwrap();
        let first = normalize(&record);
        let second = normalize(&record);
        assert_eq!(first, second);
        // The transform for display never writes back into the record.
        assert_eq!(
            record.personal_information.unwrap().git_hub.as_deref(),
            Some("https://github.com/j")
        );
    }

    // ── display_url ─────────────────────────────────────────────────────────

    #[test]
    fn test_display_url_strips_leading_https_prefix() {
        assert_eq!(display_url("https://github.com/jane"), "github.com/jane");
        assert_eq!(
            display_url("https://linkedin.com/in/jane"),
            "linkedin.com/in/jane"
        );
    }

    #[test]
    fn test_display_url_leaves_other_values_alone() {
        assert_eq!(display_url("github.com/jane"), "github.com/jane");
        assert_eq!(display_url("http://github.com/jane"), "http://github.com/jane");
        assert_eq!(display_url(""), "");
    }
}
