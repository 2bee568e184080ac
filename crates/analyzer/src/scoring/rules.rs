//! The six scoring rules. Each is independent, never fails, and returns
//! its points plus any feedback strings; [`crate::scoring::analyze_resume`]
//! sums them in a fixed order. The thresholds and magic numbers here are
//! contractual (callers display them as a stable rubric), so do not tune
//! them.

use crate::scoring::matching::{
    contains_stem, contains_word, count_date_tokens, count_grammar_flags,
    has_quantified_achievement,
};
use crate::scoring::skills::{SOFT_SKILLS_LOWER, TECH_SKILLS_LOWER};

pub(crate) const SECTION_COMPLETENESS_MAX: u32 = 25;
pub(crate) const KEYWORD_RELEVANCE_MAX: u32 = 30;
pub(crate) const ATS_COMPLIANCE_MAX: u32 = 20;

/// One rule's contribution: points scored plus the recommendations it
/// emits. A rule contributes zero or more feedback strings, never
/// reordered or deduplicated downstream.
#[derive(Debug, Default)]
pub(crate) struct RuleOutcome {
    pub score: u32,
    pub feedback: Vec<String>,
}

/// Lower-cased text and word count, computed once per analysis and shared
/// by every rule. No state survives the call that built it.
#[derive(Debug)]
pub(crate) struct NormalizedResume {
    pub lower: String,
    pub word_count: usize,
}

impl NormalizedResume {
    pub fn new(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            word_count: text.split_whitespace().count(),
        }
    }
}

const CONTACT_MARKERS: &[&str] = &["email", "phone", "linkedin", "github"];

/// Section stems paired with the feedback emitted when the section is
/// missing. A stem matches any word starting with it, so "project" covers
/// "Projects".
const SECTIONS: &[(&str, &str)] = &[
    ("education", "Include education section"),
    ("experience", "Add work experience section"),
    ("project", "Include a projects section to showcase your work"),
    ("skill", "Add a dedicated skills section"),
];

/// Rule 1: section completeness, 5 points per present section (max 25).
/// Contact info is a plain substring test for any of the contact markers.
pub(crate) fn section_completeness(resume: &NormalizedResume) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    if CONTACT_MARKERS.iter().any(|m| resume.lower.contains(m)) {
        outcome.score += 5;
    } else {
        outcome
            .feedback
            .push("Add clear contact information section".to_string());
    }

    for (stem, missing_feedback) in SECTIONS {
        if contains_stem(&resume.lower, stem) {
            outcome.score += 5;
        } else {
            outcome.feedback.push((*missing_feedback).to_string());
        }
    }

    outcome
}

/// Rule 2: keyword relevance against the fixed skill lexicons (max 30).
/// The score is a threshold function of the combined match percentage.
pub(crate) fn keyword_relevance(resume: &NormalizedResume) -> RuleOutcome {
    let tech_found = TECH_SKILLS_LOWER
        .iter()
        .filter(|skill| contains_word(&resume.lower, skill.as_str()))
        .count();
    let soft_found = SOFT_SKILLS_LOWER
        .iter()
        .filter(|skill| contains_word(&resume.lower, skill.as_str()))
        .count();

    let total_terms = TECH_SKILLS_LOWER.len() + SOFT_SKILLS_LOWER.len();
    let match_percentage = (tech_found + soft_found) as f64 / total_terms as f64 * 100.0;

    let score = if match_percentage > 80.0 {
        30
    } else if match_percentage > 60.0 {
        25
    } else if match_percentage > 40.0 {
        20
    } else {
        10
    };

    let mut feedback = Vec::new();
    if tech_found < 5 {
        feedback.push("Add more technical skills like Python, SQL, React, or Node.js".to_string());
    }
    if soft_found < 3 {
        feedback.push("Include soft skills like communication and leadership".to_string());
    }

    RuleOutcome { score, feedback }
}

const FORMATTING_ARTIFACTS: &[&str] = &["table", "chart", "image"];
const CANONICAL_HEADERS: &[&str] = &["education", "experience", "skills", "projects", "summary"];

/// Rule 3: ATS parse-friendliness proxies, four independent 5-point
/// checks (max 20). The fourth check passes unconditionally: format
/// acceptability is validated at upload, before scoring.
pub(crate) fn ats_compliance(resume: &NormalizedResume) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    // Artifacts left behind by table/image heavy layouts.
    if !FORMATTING_ARTIFACTS.iter().any(|w| resume.lower.contains(w)) {
        outcome.score += 5;
    } else {
        outcome
            .feedback
            .push("Avoid complex tables and images for better ATS compatibility".to_string());
    }

    // A canonical section header at the start of a line.
    if resume
        .lower
        .lines()
        .any(|line| CANONICAL_HEADERS.iter().any(|h| line.starts_with(h)))
    {
        outcome.score += 5;
    } else {
        outcome
            .feedback
            .push("Use clear section headers and simple formatting".to_string());
    }

    // Two or more date tokens as a proxy for a chronological listing.
    if count_date_tokens(&resume.lower) >= 2 {
        outcome.score += 5;
    } else {
        outcome
            .feedback
            .push("Organize experience in reverse chronological order".to_string());
    }

    outcome.score += 5;

    outcome
}

/// Rule 4: quantified achievements, all-or-nothing 10 points.
pub(crate) fn quantified_achievements(resume: &NormalizedResume) -> RuleOutcome {
    if has_quantified_achievement(&resume.lower) {
        RuleOutcome {
            score: 10,
            feedback: vec![],
        }
    } else {
        RuleOutcome {
            score: 0,
            feedback: vec![
                r#"Add quantifiable achievements (e.g., "Improved performance by 30%")"#
                    .to_string(),
            ],
        }
    }
}

/// Rule 5: grammar quality via proxy-error counting (max 10).
pub(crate) fn grammar_quality(resume: &NormalizedResume) -> RuleOutcome {
    let flags = count_grammar_flags(&resume.lower);

    let score = if flags <= 2 {
        10
    } else if flags <= 5 {
        5
    } else {
        2
    };

    let mut feedback = Vec::new();
    if flags > 2 {
        feedback.push("Review grammar and formatting for professional presentation".to_string());
    }

    RuleOutcome { score, feedback }
}

/// Rule 6: resume length by whitespace-delimited word count (max 5).
pub(crate) fn resume_length(resume: &NormalizedResume) -> RuleOutcome {
    let words = resume.word_count;
    let mut feedback = Vec::new();

    let score = if (400..=800).contains(&words) {
        5
    } else if words > 1000 {
        feedback.push("Resume is too long - aim for 1-2 pages (400-800 words)".to_string());
        2
    } else if words < 300 {
        feedback.push("Resume is too short - add more details about your experience".to_string());
        1
    } else {
        3
    };

    RuleOutcome { score, feedback }
}
