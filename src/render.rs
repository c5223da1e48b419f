//! Read-only projection of a report into ordered, labeled sections.

use crate::labels::Labels;
use crate::models::{AnalysisReport, IssueDetail, ReportStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Banner(ReportStatus),
    Bullets(Vec<String>),
    Numbered(Vec<String>),
    Table {
        columns: [&'static str; 4],
        rows: Vec<[String; 4]>,
    },
    Paragraph(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: SectionBody,
}

fn detail_row(detail: &IssueDetail) -> [String; 4] {
    [
        detail.problem.clone(),
        detail.part.clone(),
        detail.cause.clone(),
        detail.effect.clone(),
    ]
}

/// Sections to display for a report, in display order. Empty parts are left out.
pub fn sections(report: &AnalysisReport, labels: &Labels) -> Vec<Section> {
    let banner = match report.status {
        ReportStatus::Ok => labels.safe_banner,
        ReportStatus::Warning => labels.review_banner,
    };
    let mut out = vec![Section {
        heading: banner,
        body: SectionBody::Banner(report.status),
    }];

    if !report.issues.is_empty() {
        out.push(Section {
            heading: labels.issues,
            body: SectionBody::Bullets(report.issues.clone()),
        });
    }

    if !report.details.is_empty() {
        out.push(Section {
            heading: labels.details,
            body: SectionBody::Table {
                columns: [labels.problem, labels.part, labels.cause, labels.effect],
                rows: report.details.iter().map(detail_row).collect(),
            },
        });
    }

    if let Some(suggestion) = &report.suggestion {
        out.push(Section {
            heading: labels.suggestion,
            body: SectionBody::Paragraph(suggestion.clone()),
        });
    }

    let lists = [
        (labels.solutions, &report.solutions, false),
        (labels.checklist, &report.checklist, false),
        (labels.next_steps, &report.next_steps, true),
    ];
    for (heading, items, numbered) in lists {
        if items.is_empty() {
            continue;
        }
        let body = if numbered {
            SectionBody::Numbered(items.clone())
        } else {
            SectionBody::Bullets(items.clone())
        };
        out.push(Section { heading, body });
    }

    out
}

/// Sections labeled in the report's own language, whatever the panel shows now
pub fn report_sections(report: &AnalysisReport) -> Vec<Section> {
    sections(report, Labels::for_locale(report.locale))
}

/// Plain-text rendering used by the command line
pub fn to_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    for section in report_sections(report) {
        match &section.body {
            SectionBody::Banner(_) => out.push_str(&format!("{}\n", section.heading)),
            SectionBody::Paragraph(text) => {
                out.push_str(&format!("\n{} {text}\n", section.heading));
            }
            SectionBody::Bullets(items) => {
                out.push_str(&format!("\n{}\n", section.heading));
                for item in items {
                    out.push_str(&format!("  - {item}\n"));
                }
            }
            SectionBody::Numbered(items) => {
                out.push_str(&format!("\n{}\n", section.heading));
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("  {}. {item}\n", i + 1));
                }
            }
            SectionBody::Table { columns, rows } => {
                out.push_str(&format!("\n{}\n", section.heading));
                for (i, row) in rows.iter().enumerate() {
                    out.push_str(&format!("  {}.\n", i + 1));
                    for (column, value) in columns.iter().zip(row) {
                        out.push_str(&format!("     {column}: {value}\n"));
                    }
                }
            }
        }
    }

    out
}
