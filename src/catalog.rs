//! Canned report content, one template per locale.

use crate::models::{AnalysisReport, DetailLevel, IssueDetail, Locale, ReportStatus};

pub struct DetailRow {
    pub problem: &'static str,
    pub part: &'static str,
    pub cause: &'static str,
    pub effect: &'static str,
}

/// Everything a locale can say about an image; the detail level decides
/// which parts end up in the report
pub struct ReportTemplate {
    pub locale: Locale,
    pub status: ReportStatus,
    pub minimal_issues: &'static [&'static str],
    pub suggestion: &'static str,
    pub detailed_issues: &'static [&'static str],
    pub details: &'static [DetailRow],
    pub solutions: &'static [&'static str],
    pub checklist: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

impl ReportTemplate {
    pub fn build(&self, detail: DetailLevel) -> AnalysisReport {
        match detail {
            DetailLevel::Minimal => AnalysisReport {
                locale: self.locale,
                detail,
                status: self.status,
                issues: owned(self.minimal_issues),
                suggestion: Some(self.suggestion.to_string()),
                details: Vec::new(),
                solutions: Vec::new(),
                checklist: Vec::new(),
                next_steps: Vec::new(),
            },
            DetailLevel::Detailed => AnalysisReport {
                locale: self.locale,
                detail,
                status: self.status,
                issues: owned(self.detailed_issues),
                suggestion: None,
                details: self
                    .details
                    .iter()
                    .map(|row| IssueDetail {
                        problem: row.problem.to_string(),
                        part: row.part.to_string(),
                        cause: row.cause.to_string(),
                        effect: row.effect.to_string(),
                    })
                    .collect(),
                solutions: owned(self.solutions),
                checklist: owned(self.checklist),
                next_steps: owned(self.next_steps),
            },
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn template(locale: Locale) -> &'static ReportTemplate {
    match locale {
        Locale::En => &ENGLISH,
        Locale::Bn => &BENGALI,
    }
}

static ENGLISH: ReportTemplate = ReportTemplate {
    locale: Locale::En,
    status: ReportStatus::Warning,
    minimal_issues: &[
        "Contains partial nudity (suggest blurring)",
        "Caption includes hate-related term (‘xxx’) — replace or remove",
    ],
    suggestion: "Blur the middle part and rephrase text to avoid hate speech.",
    detailed_issues: &[
        "The image contains partial nudity",
        "The caption uses a hate-related term (‘xxx’)",
    ],
    details: &[
        DetailRow {
            problem: "Partial nudity",
            part: "Middle of the image",
            cause: "Uncovered body area is visible",
            effect: "Breaks community guidelines; the post may be removed",
        },
        DetailRow {
            problem: "Hate speech",
            part: "Caption / text in the image",
            cause: "Offensive word aimed at a specific group",
            effect: "Risk of the account being restricted or banned",
        },
    ],
    solutions: &[
        "Blur or crop the middle part of the image",
        "Remove the hate-related word and rewrite the caption in neutral language",
    ],
    checklist: &[
        "Are sensitive areas covered?",
        "Is the caption free of offensive words?",
        "Does the image follow the platform's guidelines?",
    ],
    next_steps: &[
        "Upload the corrected image again",
        "Press \"Check Content\" once more",
        "Publish if everything looks fine",
    ],
};

static BENGALI: ReportTemplate = ReportTemplate {
    locale: Locale::Bn,
    status: ReportStatus::Warning,
    minimal_issues: &[
        "আংশিক নগ্নতা রয়েছে (ব্লার করার পরামর্শ)",
        "ক্যাপশনে ঘৃণাসূচক শব্দ (‘xxx’) আছে — বদলান বা সরান",
    ],
    suggestion: "মাঝের অংশ ব্লার করুন এবং ঘৃণাসূচক ভাষা এড়াতে লেখাটি নতুন করে লিখুন।",
    detailed_issues: &[
        "ছবিতে আংশিক নগ্নতা রয়েছে",
        "ক্যাপশনে ঘৃণাসূচক শব্দ (‘xxx’) ব্যবহার করা হয়েছে",
    ],
    details: &[
        DetailRow {
            problem: "আংশিক নগ্নতা",
            part: "ছবির মাঝের অংশ",
            cause: "শরীরের অনাবৃত অংশ দৃশ্যমান",
            effect: "কমিউনিটি নীতিমালা লঙ্ঘন; পোস্ট সরিয়ে ফেলা হতে পারে",
        },
        DetailRow {
            problem: "ঘৃণাসূচক ভাষা",
            part: "ক্যাপশন / ছবির লেখা",
            cause: "নির্দিষ্ট গোষ্ঠীকে লক্ষ্য করে আপত্তিকর শব্দ",
            effect: "অ্যাকাউন্ট সীমিত বা নিষিদ্ধ হওয়ার ঝুঁকি",
        },
    ],
    solutions: &[
        "ছবির মাঝের অংশ ব্লার করুন বা ক্রপ করুন",
        "ক্যাপশন থেকে ঘৃণাসূচক শব্দটি সরিয়ে নিরপেক্ষ ভাষায় লিখুন",
    ],
    checklist: &[
        "সংবেদনশীল অংশ ঢেকে দেওয়া হয়েছে কি?",
        "ক্যাপশনে কোনো আপত্তিকর শব্দ নেই তো?",
        "ছবিটি প্ল্যাটফর্মের নীতিমালা মেনে চলে কি?",
    ],
    next_steps: &[
        "সংশোধিত ছবিটি আবার আপলোড করুন",
        "আবার \"কনটেন্ট যাচাই করুন\" চাপুন",
        "সব ঠিক থাকলে প্রকাশ করুন",
    ],
};
