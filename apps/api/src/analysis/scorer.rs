//! Match Scorer — compares job-description keywords against resume keywords
//! and assembles the full analysis result.
//!
//! Pure and synchronous: iteration follows the JD map's insertion order and
//! both sorts are stable, so equal inputs always produce identical output.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analysis::ats::{calculate_ats_score, AtsScore};
use crate::analysis::dictionaries::are_synonyms;
use crate::analysis::extractor::{KeywordCategory, KeywordMap};
use crate::analysis::suggestions::{improvement_suggestions, keyword_suggestions, Suggestion};
use crate::models::resume::ResumeDocument;

/// Heuristic scoring constants. Changing any of these changes every persisted
/// score, so treat them as frozen defaults.
const EXACT_WEIGHT: f64 = 10.0;
const PARTIAL_WEIGHT: f64 = 5.0;
const SYNONYM_CONFIDENCE: f64 = 0.8;
const SUBSTRING_CONFIDENCE: f64 = 0.6;
const SUBSTRING_MIN_KEYWORD_CHARS: usize = 6;
const EXPERIENCE_BONUS: f64 = 5.0;
const EDUCATION_BONUS: f64 = 3.0;
const CRITICAL_IMPORTANCE_FLOOR: f64 = 1.5;
const CRITICAL_MISSING_PENALTY: f64 = 5.0;
const MATCHED_KEYWORDS_CAP: usize = 20;
const MISSING_KEYWORDS_CAP: usize = 15;
const SUGGESTIONS_CAP: usize = 10;

/// One JD keyword found in the resume, exactly or partially.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedKeyword {
    pub keyword: String,
    pub category: KeywordCategory,
    pub jd_count: u32,
    pub resume_count: u32,
    pub importance: f64,
    pub score: f64,
    /// The resume keyword that satisfied a partial match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<bool>,
}

/// One JD keyword with no exact or partial counterpart in the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyword {
    pub keyword: String,
    pub category: KeywordCategory,
    pub importance: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatchSummary {
    pub total: usize,
    pub matched: usize,
    pub missing: usize,
    pub percentage: u32,
}

/// Diagnostic totals behind the headline score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub total_possible_score: f64,
    pub earned_score: f64,
    pub bonus_applied: f64,
    pub critical_missing: usize,
}

/// Top-level analysis output, serialized verbatim to clients and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32,
    pub ats_score: AtsScore,
    pub keyword_match: KeywordMatchSummary,
    pub matched_keywords: Vec<MatchedKeyword>,
    pub missing_keywords: Vec<MissingKeyword>,
    pub suggestions: Vec<Suggestion>,
    pub details: ScoreDetails,
}

struct PartialMatchHit {
    keyword: String,
    count: u32,
    confidence: f64,
}

/// Finds a reduced-confidence counterpart for a JD keyword among the resume
/// keywords: synonym groups first (0.8), then substring containment in either
/// direction (0.6) for keywords longer than 6 chars. First match wins in
/// resume insertion order.
fn find_partial_match(jd_keyword: &str, resume_keywords: &KeywordMap) -> Option<PartialMatchHit> {
    for entry in resume_keywords.iter() {
        if are_synonyms(jd_keyword, &entry.keyword) {
            return Some(PartialMatchHit {
                keyword: entry.keyword.clone(),
                count: entry.count,
                confidence: SYNONYM_CONFIDENCE,
            });
        }
    }

    if jd_keyword.chars().count() > SUBSTRING_MIN_KEYWORD_CHARS {
        for entry in resume_keywords.iter() {
            if entry.keyword.contains(jd_keyword) || jd_keyword.contains(&entry.keyword) {
                return Some(PartialMatchHit {
                    keyword: entry.keyword.clone(),
                    count: entry.count,
                    confidence: SUBSTRING_CONFIDENCE,
                });
            }
        }
    }

    None
}

/// Scores a JD keyword map against a resume keyword map and assembles the
/// complete result, including ATS heuristics computed from the resume alone.
pub fn calculate_match_score(
    jd_keywords: &KeywordMap,
    resume_keywords: &KeywordMap,
    resume: &ResumeDocument,
) -> AnalysisResult {
    let mut max_possible_score = 0.0_f64;
    let mut total_score = 0.0_f64;
    let mut matched: Vec<MatchedKeyword> = Vec::new();
    let mut missing: Vec<MissingKeyword> = Vec::new();

    for jd_entry in jd_keywords.iter() {
        max_possible_score += jd_entry.importance * EXACT_WEIGHT;

        if let Some(resume_entry) = resume_keywords.get(&jd_entry.keyword) {
            let score =
                jd_entry.count.min(resume_entry.count) as f64 * jd_entry.importance * EXACT_WEIGHT;
            total_score += score;
            matched.push(MatchedKeyword {
                keyword: jd_entry.keyword.clone(),
                category: jd_entry.category,
                jd_count: jd_entry.count,
                resume_count: resume_entry.count,
                importance: jd_entry.importance,
                score,
                matched_as: None,
                partial: None,
            });
        } else if let Some(hit) = find_partial_match(&jd_entry.keyword, resume_keywords) {
            let score = hit.confidence * jd_entry.importance * PARTIAL_WEIGHT;
            total_score += score;
            matched.push(MatchedKeyword {
                keyword: jd_entry.keyword.clone(),
                category: jd_entry.category,
                jd_count: jd_entry.count,
                resume_count: hit.count,
                importance: jd_entry.importance,
                score,
                matched_as: Some(hit.keyword),
                partial: Some(true),
            });
        } else {
            missing.push(MissingKeyword {
                keyword: jd_entry.keyword.clone(),
                category: jd_entry.category,
                importance: jd_entry.importance,
                suggestions: keyword_suggestions(&jd_entry.keyword, jd_entry.category),
            });
        }
    }

    let raw_score = if max_possible_score > 0.0 {
        total_score / max_possible_score * 100.0
    } else {
        0.0
    };

    let mut bonus = 0.0;
    if !resume.experience.is_empty() {
        bonus += EXPERIENCE_BONUS;
    }
    if !resume.education.is_empty() {
        bonus += EDUCATION_BONUS;
    }

    let critical_missing = missing
        .iter()
        .filter(|m| m.importance > CRITICAL_IMPORTANCE_FLOOR)
        .count();
    let penalty = critical_missing as f64 * CRITICAL_MISSING_PENALTY;

    let final_score = (raw_score + bonus - penalty).clamp(0.0, 100.0).round() as u32;

    let total = jd_keywords.len();
    let keyword_match = KeywordMatchSummary {
        total,
        matched: matched.len(),
        missing: missing.len(),
        percentage: if total > 0 {
            (matched.len() as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        },
    };

    matched.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matched.truncate(MATCHED_KEYWORDS_CAP);
    missing.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });
    missing.truncate(MISSING_KEYWORDS_CAP);

    let mut suggestions = improvement_suggestions(&missing);
    suggestions.truncate(SUGGESTIONS_CAP);

    let ats_score = calculate_ats_score(resume);

    AnalysisResult {
        score: final_score,
        ats_score,
        keyword_match,
        matched_keywords: matched,
        missing_keywords: missing,
        suggestions,
        details: ScoreDetails {
            total_possible_score: max_possible_score,
            earned_score: total_score,
            bonus_applied: final_score as f64 - raw_score,
            critical_missing,
        },
    }
}
