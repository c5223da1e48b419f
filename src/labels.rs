use crate::models::Locale;

/// User-visible strings for one locale
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub choose_image: &'static str,
    pub image_filter: &'static str,
    pub step_image: &'static str,
    pub step_check: &'static str,
    pub step_report: &'static str,
    pub check: &'static str,
    pub analyzing: &'static str,
    pub safe_banner: &'static str,
    pub review_banner: &'static str,
    pub issues: &'static str,
    pub details: &'static str,
    pub problem: &'static str,
    pub part: &'static str,
    pub cause: &'static str,
    pub effect: &'static str,
    pub suggestion: &'static str,
    pub solutions: &'static str,
    pub checklist: &'static str,
    pub next_steps: &'static str,
    pub analysis_failed: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Bn => &BENGALI,
        }
    }

    /// Titles of the progress strip, in order
    pub fn step_titles(&self) -> [&'static str; 3] {
        [self.step_image, self.step_check, self.step_report]
    }
}

static ENGLISH: Labels = Labels {
    title: "🛡️ AI Image Content Checker",
    placeholder: "Upload an image to check content",
    choose_image: "Choose Image",
    image_filter: "Images",
    step_image: "1. Image",
    step_check: "2. Check",
    step_report: "3. Report",
    check: "Check Content",
    analyzing: "Analyzing...",
    safe_banner: "✅ Safe to Publish",
    review_banner: "⚠️ Review Required",
    issues: "Issues",
    details: "Details",
    problem: "Problem",
    part: "Part",
    cause: "Cause",
    effect: "Effect",
    suggestion: "Suggestion:",
    solutions: "Solutions",
    checklist: "Checklist",
    next_steps: "Next Steps",
    analysis_failed: "Analysis failed",
};

static BENGALI: Labels = Labels {
    title: "🛡️ এআই ছবি কনটেন্ট যাচাইকারী",
    placeholder: "কনটেন্ট যাচাই করতে একটি ছবি আপলোড করুন",
    choose_image: "ছবি বাছাই করুন",
    image_filter: "ছবি",
    step_image: "১. ছবি",
    step_check: "২. যাচাই",
    step_report: "৩. রিপোর্ট",
    check: "কনটেন্ট যাচাই করুন",
    analyzing: "বিশ্লেষণ চলছে...",
    safe_banner: "✅ প্রকাশের জন্য নিরাপদ",
    review_banner: "⚠️ পর্যালোচনা প্রয়োজন",
    issues: "সমস্যা",
    details: "বিস্তারিত",
    problem: "সমস্যা",
    part: "অংশ",
    cause: "কারণ",
    effect: "প্রভাব",
    suggestion: "পরামর্শ:",
    solutions: "সমাধান",
    checklist: "চেকলিস্ট",
    next_steps: "পরবর্তী পদক্ষেপ",
    analysis_failed: "বিশ্লেষণ ব্যর্থ হয়েছে",
};
