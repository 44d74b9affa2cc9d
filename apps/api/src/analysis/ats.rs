//! ATS Heuristic Checker — structural resume checks, independent of any job
//! description.
//!
//! Starts at 100 and deducts per finding. Every deduction is applied even when
//! the issue list is already full; only the reported list is capped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

const MAX_REPORTED_ISSUES: usize = 10;
const MIN_BULLETS_PER_ROLE: usize = 2;
const MIN_BULLET_WORDS: usize = 12;
const MAX_BULLET_WORDS: usize = 25;
const MIN_CORE_SKILLS: usize = 5;

const DATE_FORMAT_PENALTY: i64 = 5;
const BULLET_COUNT_PENALTY: i64 = 5;
const BULLET_LENGTH_PENALTY: i64 = 2;
const CORE_SKILLS_PENALTY: i64 = 10;
const EMAIL_PENALTY: i64 = 15;
const LOCATION_PENALTY: i64 = 5;

static START_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{4}$").unwrap()
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScore {
    pub score: u32,
    pub issues: Vec<String>,
}

/// Scores the resume's machine-readability: date formats, bullet shape, skill
/// list size, and contact completeness.
pub fn calculate_ats_score(resume: &ResumeDocument) -> AtsScore {
    let mut score: i64 = 100;
    let mut issues: Vec<String> = Vec::new();

    for (position, exp) in resume.experience.iter().enumerate() {
        let label = exp
            .company
            .as_deref()
            .or(exp.role.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("entry {}", position + 1));

        let start_ok = exp
            .start
            .as_deref()
            .map(|s| START_DATE_RE.is_match(s))
            .unwrap_or(false);
        if !start_ok {
            score -= DATE_FORMAT_PENALTY;
            issues.push(format!(
                "Experience at {label}: use the \"Jan 2024\" start date format"
            ));
        }

        if exp.bullets.len() < MIN_BULLETS_PER_ROLE {
            score -= BULLET_COUNT_PENALTY;
            issues.push(format!(
                "Experience at {label}: add at least {MIN_BULLETS_PER_ROLE} bullet points"
            ));
        }

        for bullet in &exp.bullets {
            let words = bullet.split_whitespace().count();
            if !(MIN_BULLET_WORDS..=MAX_BULLET_WORDS).contains(&words) {
                score -= BULLET_LENGTH_PENALTY;
                issues.push(format!(
                    "Experience at {label}: bullet \"{}\" should be {MIN_BULLET_WORDS}-{MAX_BULLET_WORDS} words",
                    preview(bullet)
                ));
            }
        }
    }

    let core_skills = resume.skills.as_ref().map(|s| s.core.len()).unwrap_or(0);
    if core_skills < MIN_CORE_SKILLS {
        score -= CORE_SKILLS_PENALTY;
        issues.push(format!(
            "List at least {MIN_CORE_SKILLS} core skills so parsers can build a skill profile"
        ));
    }

    let email_ok = resume
        .profile
        .as_ref()
        .and_then(|p| p.email.as_deref())
        .map(|e| e.contains('@'))
        .unwrap_or(false);
    if !email_ok {
        score -= EMAIL_PENALTY;
        issues.push("Add a valid email address to your contact details".to_string());
    }

    let has_location = resume
        .profile
        .as_ref()
        .and_then(|p| p.location.as_deref())
        .map(|l| !l.trim().is_empty())
        .unwrap_or(false);
    if !has_location {
        score -= LOCATION_PENALTY;
        issues.push("Add a location to your contact details".to_string());
    }

    issues.truncate(MAX_REPORTED_ISSUES);

    AtsScore {
        score: score.max(0) as u32,
        issues,
    }
}

/// First 30 chars of a bullet, for issue messages.
fn preview(bullet: &str) -> &str {
    match bullet.char_indices().nth(30) {
        Some((idx, _)) => &bullet[..idx],
        None => bullet,
    }
}
