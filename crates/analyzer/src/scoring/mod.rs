//! Resume scoring: maps extracted text to a deterministic 0-100 score.
//!
//! Six independent rules contribute fixed-weight sub-scores (sections 25,
//! keywords 30, ATS 20, achievements 10, grammar 10, length 5) that sum to
//! the overall value. Scoring is a pure function of the input text; it
//! never fails, and empty input lands every rule at its floor.

mod matching;
mod rules;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::scoring::rules::{
    ats_compliance, grammar_quality, keyword_relevance, quantified_achievements, resume_length,
    section_completeness, NormalizedResume, ATS_COMPLIANCE_MAX, KEYWORD_RELEVANCE_MAX,
    SECTION_COMPLETENESS_MAX,
};

/// The six weighted sub-scores. Invariant: each stays within its declared
/// maximum and their sum equals the overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub section_completeness: u32,
    pub keyword_relevance: u32,
    pub ats_compliance: u32,
    pub quantified_achievements: u32,
    pub grammar_quality: u32,
    pub resume_length: u32,
}

/// A display gauge rescaled to a 0-100 percentage of its rule's maximum
/// weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscore {
    pub name: String,
    pub score: u32,
}

/// Full scoring result: overall value, per-rule breakdown, display gauges,
/// and the ordered feedback list. Immutable value object with no lifecycle
/// beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeScore {
    pub overall_score: u32,
    pub breakdown: ScoreBreakdown,
    pub subscores: Vec<Subscore>,
    pub feedback: Vec<String>,
}

/// Scores resume text against the six-rule rubric.
///
/// Matching runs on the lower-cased text; the word count for the length
/// rule is taken on the original text split on whitespace runs. Feedback
/// preserves rule evaluation order: sections, keywords, ATS, achievements,
/// grammar, length.
pub fn analyze_resume(text: &str) -> ResumeScore {
    let resume = NormalizedResume::new(text);

    let sections = section_completeness(&resume);
    let keywords = keyword_relevance(&resume);
    let ats = ats_compliance(&resume);
    let achievements = quantified_achievements(&resume);
    let grammar = grammar_quality(&resume);
    let length = resume_length(&resume);

    let breakdown = ScoreBreakdown {
        section_completeness: sections.score,
        keyword_relevance: keywords.score,
        ats_compliance: ats.score,
        quantified_achievements: achievements.score,
        grammar_quality: grammar.score,
        resume_length: length.score,
    };

    // Integral by construction; kept as a plain sum for contract stability.
    let overall_score = breakdown.section_completeness
        + breakdown.keyword_relevance
        + breakdown.ats_compliance
        + breakdown.quantified_achievements
        + breakdown.grammar_quality
        + breakdown.resume_length;

    let subscores = vec![
        Subscore {
            name: "ATS Friendly".to_string(),
            score: rescale(breakdown.ats_compliance, ATS_COMPLIANCE_MAX),
        },
        Subscore {
            name: "Keywords Match".to_string(),
            score: rescale(breakdown.keyword_relevance, KEYWORD_RELEVANCE_MAX),
        },
        Subscore {
            name: "Section Coverage".to_string(),
            score: rescale(breakdown.section_completeness, SECTION_COMPLETENESS_MAX),
        },
    ];

    let feedback = [sections, keywords, ats, achievements, grammar, length]
        .into_iter()
        .flat_map(|outcome| outcome.feedback)
        .collect();

    ResumeScore {
        overall_score,
        breakdown,
        subscores,
        feedback,
    }
}

/// Rescales a raw sub-score to a 0-100 percentage of its maximum weight,
/// rounded to the nearest integer.
fn rescale(score: u32, max: u32) -> u32 {
    (score as f64 / max as f64 * 100.0).round() as u32
}
