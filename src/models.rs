use serde::{Deserialize, Serialize};

use crate::catalog;

/// Language used for labels and report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "english")]
    En,
    #[serde(alias = "bengali")]
    Bn,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bn];

    /// Detail level the panel historically used for this language
    pub fn default_detail(self) -> DetailLevel {
        match self {
            Locale::En => DetailLevel::Minimal,
            Locale::Bn => DetailLevel::Detailed,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "English"),
            Locale::Bn => write!(f, "বাংলা"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Minimal,
    Detailed,
}

/// Locale plus detail level; selects exactly one canned report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub locale: Locale,
    pub detail: DetailLevel,
}

impl Profile {
    pub fn new(locale: Locale, detail: DetailLevel) -> Self {
        Self { locale, detail }
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self::new(locale, locale.default_detail())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Warning,
}

/// One row of the detailed findings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDetail {
    pub problem: String,
    pub part: String,
    pub cause: String,
    pub effect: String,
}

/// Moderation report shown to the user.
///
/// Minimal reports carry `issues` and `suggestion`; detailed reports carry
/// `issues` plus the structured sections. Lists keep the order they were
/// produced in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub locale: Locale,
    pub detail: DetailLevel,
    pub status: ReportStatus,
    pub issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<IssueDetail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

impl AnalysisReport {
    /// The fixed report for a profile
    pub fn canned(profile: Profile) -> Self {
        catalog::template(profile.locale).build(profile.detail)
    }

    pub fn profile(&self) -> Profile {
        Profile::new(self.locale, self.detail)
    }

    pub fn is_ok(&self) -> bool {
        self.status == ReportStatus::Ok
    }
}
