//! HTML projection of the assembled document tree.
//!
//! Two modes share one markup skeleton:
//! - `Screen`: the interactive view. Carries the screen theme, the export
//!   control, and the print override layer wrapped inertly in `@media print`
//!   so a manual browser print behaves like an export.
//! - `Export`: the print-isolated snapshot handed to the print pipeline.
//!   The override layer applies unconditionally, and interactive-only
//!   elements are omitted entirely rather than hidden.
//!
//! The projection is pure: same tree, mode, and title always produce
//! byte-identical output. All record-derived text is escaped by maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::document::assemble::{
    ContactItem, HeaderContent, RenderedDocument, Section, SectionContent, SectionId,
};

/// Projection mode: interactive view or print-isolated export snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Screen,
    Export,
}

// ────────────────────────────────────────────────────────────────────────────
// Stylesheets
// ────────────────────────────────────────────────────────────────────────────

/// Layout shared by both modes.
const BASE_STYLE: &str = "\
* { box-sizing: border-box; }\n\
body { margin: 0; font-family: Arial, 'Helvetica Neue', sans-serif; color: #1f2937; }\n\
.resume-container { max-width: 52rem; margin: 0 auto; padding: 2rem; background: #fff; }\n\
.doc-section { margin-top: 1.5rem; }\n\
.full-name { font-size: 1.875rem; font-weight: 700; color: #111827; text-align: center; margin: 0; }\n\
.location { font-size: 1.125rem; color: #4b5563; text-align: center; margin: 0.25rem 0 0; }\n\
.contact-row { display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-top: 0.5rem; color: #374151; }\n\
.contact-label { color: #6b7280; font-weight: 600; margin-right: 0.25rem; }\n\
.section-heading { font-size: 1.25rem; font-weight: 600; color: #111827; border-bottom: 2px solid #d1d5db; padding-bottom: 0.25rem; margin: 0 0 0.5rem; }\n\
.section-divider { border: none; border-top: 1px solid #666; margin: 1.5rem 0; }\n\
.summary-text, .responsibility { color: #374151; line-height: 1.625; margin: 0; }\n\
.badge-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 0.5rem; }\n\
.badge-outline { border: 1px solid #6b7280; background: transparent; color: #374151; border-radius: 0.125rem; padding: 0.5rem 0.75rem; text-align: center; }\n\
.fallback-line { color: #6b7280; margin: 0; }\n\
.experience-block { margin-bottom: 1rem; }\n\
.job-title { font-size: 1.125rem; font-weight: 700; color: #111827; margin: 0; }\n\
.company-line { color: #4b5563; font-weight: 500; margin: 0; }\n\
.duration { color: #6b7280; font-size: 0.875rem; margin: 0 0 0.5rem; }\n\
";

/// Screen theme: page background, card shadow, export control styling.
const SCREEN_STYLE: &str = "\
body { background: #e5e7eb; padding: 2rem 1rem; }\n\
.resume-container { box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); border-radius: 0.5rem; }\n\
.export-control { display: flex; justify-content: center; margin-bottom: 1rem; }\n\
.btn-export { background: #2563eb; color: #fff; border: none; border-radius: 0.375rem; padding: 0.5rem 1.25rem; font-size: 1rem; cursor: pointer; }\n\
.btn-export:hover { background: #1d4ed8; }\n\
";

/// The print override layer. One constant feeds both modes: inert inside
/// `@media print` on screen, forced in the export snapshot. Forces a white
/// background, hides interactive-only elements, converts outline badges to
/// solid printer-safe strokes, and enforces atomic-block pagination.
const PRINT_OVERRIDES: &str = "\
body { background: #fff !important; padding: 0 !important; -webkit-print-color-adjust: exact; }\n\
.resume-container { box-shadow: none !important; border: none !important; border-radius: 0 !important; padding: 0 !important; margin: 0 !important; }\n\
.badge-outline { border: 1px solid #000 !important; background: transparent !important; color: #000 !important; }\n\
.section-divider { border-top: 1px solid #666; }\n\
.print-hidden { display: none !important; }\n\
.break-inside-avoid { break-inside: avoid; page-break-inside: avoid; }\n\
";

fn stylesheet(mode: RenderMode) -> String {
    match mode {
        RenderMode::Screen => {
            format!("{BASE_STYLE}{SCREEN_STYLE}@media print {{\n{PRINT_OVERRIDES}}}\n")
        }
        RenderMode::Export => format!("{BASE_STYLE}{PRINT_OVERRIDES}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

/// Renders the document tree as a complete HTML page. `title` becomes the
/// page title, which the print pipeline carries into the PDF metadata.
pub fn render_html(document: &RenderedDocument, mode: RenderMode, title: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(stylesheet(mode))) }
            }
            body {
                div class="resume-container" {
                    @if mode == RenderMode::Screen {
                        (export_control())
                    }
                    @for section in &document.sections {
                        (render_section(section))
                        // Dividers follow the header and summary only.
                        @if matches!(section.id, SectionId::Header | SectionId::Summary) {
                            hr class="section-divider";
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

/// The export trigger control. Interactive-only: present in screen mode,
/// absent from the export snapshot.
fn export_control() -> Markup {
    html! {
        div class="print-hidden export-control" {
            form method="post" action="/api/v1/export" {
                button type="submit" class="btn-export" { "Download PDF" }
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    let atomic_class = if section.atomic {
        " break-inside-avoid"
    } else {
        ""
    };
    html! {
        section id=(section.id.as_str()) class={"doc-section" (atomic_class)} {
            @if let Some(title) = &section.title {
                h2 class="section-heading" { (title) }
            }
            @match &section.content {
                SectionContent::Header(header) => {
                    (render_header(header))
                },
                SectionContent::Paragraph { text } => {
                    p class="summary-text" { (text) }
                },
                SectionContent::Badges { items } => {
                    div class="badge-grid" {
                        @for badge in items {
                            div class="badge-outline" { (badge.label) }
                        }
                    }
                },
                SectionContent::Entries { items } => {
                    @for block in items {
                        // Each entry is its own atomic pagination unit.
                        div class="experience-block break-inside-avoid" {
                            h3 class="job-title" { (block.job_title) }
                            p class="company-line" { (block.company_line) }
                            p class="duration" { (block.duration) }
                            p class="responsibility" { (block.responsibility) }
                        }
                    }
                },
                SectionContent::Fallback { text } => {
                    p class="fallback-line" { (text) }
                },
            }
        }
    }
}

fn render_header(header: &HeaderContent) -> Markup {
    let (plain, links): (Vec<&ContactItem>, Vec<&ContactItem>) =
        header.contacts.iter().partition(|c| !c.kind.is_link());
    html! {
        h1 class="full-name" { (header.full_name) }
        p class="location" { (header.location) }
        @if !plain.is_empty() {
            div class="contact-row" {
                @for item in plain { (render_contact(item)) }
            }
        }
        @if !links.is_empty() {
            div class="contact-row" {
                @for item in links { (render_contact(item)) }
            }
        }
    }
}

fn render_contact(item: &ContactItem) -> Markup {
    html! {
        span class="contact-item" {
            span class="contact-label" { (item.kind.label()) }
            (item.value)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
