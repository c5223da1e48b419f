mod common;

use common::*;
use imgcheck::Labels;
use imgcheck::render::{self, SectionBody};

#[test]
fn test_minimal_report_sections() {
    let report = AnalysisReport::canned(Profile::new(Locale::En, DetailLevel::Minimal));
    let sections = render::sections(&report, Labels::for_locale(Locale::En));

    let headings: Vec<_> = sections.iter().map(|s| s.heading).collect();
    assert_eq!(headings, ["⚠️ Review Required", "Issues", "Suggestion:"]);
    assert_eq!(sections[0].body, SectionBody::Banner(ReportStatus::Warning));
    assert_eq!(
        sections[1].body,
        SectionBody::Bullets(ENGLISH_ISSUES.iter().map(|s| s.to_string()).collect())
    );
}

#[test]
fn test_detailed_report_sections_keep_order() {
    let report = AnalysisReport::canned(Profile::new(Locale::Bn, DetailLevel::Detailed));
    let labels = Labels::for_locale(Locale::Bn);
    let sections = render::sections(&report, labels);

    let headings: Vec<_> = sections.iter().map(|s| s.heading).collect();
    assert_eq!(
        headings,
        [
            labels.review_banner,
            labels.issues,
            labels.details,
            labels.solutions,
            labels.checklist,
            labels.next_steps,
        ]
    );

    let SectionBody::Table { columns, rows } = &sections[2].body else {
        panic!("details should render as a table");
    };
    assert_eq!(columns[0], labels.problem);
    assert_eq!(rows.len(), report.details.len());
    assert_eq!(rows[0][0], report.details[0].problem);
    assert_eq!(rows[1][3], report.details[1].effect);

    let SectionBody::Numbered(steps) = &sections[5].body else {
        panic!("next steps should be numbered");
    };
    assert_eq!(steps, &report.next_steps);
}

#[test]
fn test_ok_status_renders_safe_banner() {
    let mut report = AnalysisReport::canned(Profile::default());
    report.status = ReportStatus::Ok;
    report.issues.clear();
    report.suggestion = None;

    let text = render::to_text(&report);
    assert_eq!(text, "✅ Safe to Publish\n");
}

#[test]
fn test_text_output_for_minimal_report() {
    let report = AnalysisReport::canned(Profile::for_locale(Locale::En));
    let expected = format!(
        "⚠️ Review Required\n\nIssues\n  - {}\n  - {}\n\nSuggestion: {}\n",
        ENGLISH_ISSUES[0], ENGLISH_ISSUES[1], ENGLISH_SUGGESTION
    );
    assert_eq!(render::to_text(&report), expected);
}

#[test]
fn test_every_profile_has_content() {
    for locale in Locale::ALL {
        for detail in [DetailLevel::Minimal, DetailLevel::Detailed] {
            let report = AnalysisReport::canned(Profile::new(locale, detail));
            assert_eq!(report.locale, locale);
            assert_eq!(report.detail, detail);
            assert!(!report.issues.is_empty());
            match detail {
                DetailLevel::Minimal => {
                    assert!(report.suggestion.is_some());
                    assert!(report.details.is_empty());
                }
                DetailLevel::Detailed => {
                    assert!(report.suggestion.is_none());
                    assert!(!report.details.is_empty());
                    assert!(!report.checklist.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_report_json_shape() -> anyhow::Result<()> {
    let report = AnalysisReport::canned(Profile::for_locale(Locale::En));
    let value = serde_json::to_value(&report)?;

    assert_eq!(value["status"], "warning");
    assert_eq!(value["locale"], "en");
    assert_eq!(value["issues"][0], ENGLISH_ISSUES[0]);
    assert!(value.get("details").is_none());

    let back: AnalysisReport = serde_json::from_value(value)?;
    assert_eq!(back, report);
    Ok(())
}

#[test]
fn test_report_keeps_its_own_language_after_locale_switch() {
    // A Bengali report stays labeled in Bengali even when the panel shows English
    let report = AnalysisReport::canned(Profile::for_locale(Locale::Bn));
    let bengali = Labels::for_locale(Locale::Bn);
    let sections = render::report_sections(&report);

    assert_eq!(sections[0].heading, bengali.review_banner);
    assert_eq!(sections[1].heading, bengali.issues);
    assert_ne!(sections[1].heading, Labels::for_locale(Locale::En).issues);
    let SectionBody::Table { columns, .. } = &sections[2].body else {
        panic!("details should render as a table");
    };
    assert_eq!(columns[0], bengali.problem);
    assert_eq!(render::report_sections(&report), render::sections(&report, bengali));
}

#[test]
fn test_every_visible_string_is_translated() {
    let english = Labels::for_locale(Locale::En);
    let bengali = Labels::for_locale(Locale::Bn);

    assert_eq!(english.step_titles(), ["1. Image", "2. Check", "3. Report"]);
    assert_eq!(english.image_filter, "Images");
    for (en, bn) in english.step_titles().into_iter().zip(bengali.step_titles()) {
        assert!(!bn.is_empty());
        assert_ne!(en, bn);
        assert!(!bn.chars().any(|c| c.is_ascii_alphabetic()), "untranslated step {bn}");
    }
    assert_ne!(bengali.image_filter, english.image_filter);
    assert!(!bengali.image_filter.chars().any(|c| c.is_ascii_alphabetic()));
}
