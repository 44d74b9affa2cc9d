//! Suggestion generators — turn missing keywords into actionable advice.
//!
//! Per-keyword suggestions ride along on each `MissingKeyword`; aggregate
//! suggestions group the missing list by category into at most one entry per
//! category, with role and discovered phrases merged into a single
//! experience-language suggestion.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::KeywordCategory;
use crate::analysis::scorer::MissingKeyword;

const TECHNICAL_NAME_CAP: usize = 5;
const EXPERIENCE_NAME_CAP: usize = 4;
const SOFT_NAME_CAP: usize = 3;
const EDUCATION_NAME_CAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One aggregate improvement suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub keywords: Vec<String>,
}

/// Short, category-specific advice for one missing keyword.
pub fn keyword_suggestions(keyword: &str, category: KeywordCategory) -> Vec<String> {
    match category {
        KeywordCategory::Technical => vec![
            format!("Add \"{keyword}\" to your skills section"),
            format!("Mention {keyword} in a project or experience bullet"),
        ],
        KeywordCategory::Soft => vec![format!(
            "Demonstrate {keyword} through concrete examples in your experience bullets"
        )],
        KeywordCategory::Role => vec![format!(
            "Include \"{keyword}\" in your headline or summary"
        )],
        KeywordCategory::Education => vec![format!(
            "Add {keyword} to your education or certifications section"
        )],
        KeywordCategory::Phrase => vec![format!(
            "Consider working \"{keyword}\" into your summary or experience"
        )],
    }
}

/// Aggregates missing keywords into at most one suggestion per category, in
/// fixed order: technical, role+phrase (merged), soft, education. Categories
/// with nothing missing are omitted.
pub fn improvement_suggestions(missing: &[MissingKeyword]) -> Vec<Suggestion> {
    let technical = names_in(missing, |c| c == KeywordCategory::Technical, TECHNICAL_NAME_CAP);
    let experience = names_in(
        missing,
        |c| matches!(c, KeywordCategory::Role | KeywordCategory::Phrase),
        EXPERIENCE_NAME_CAP,
    );
    let soft = names_in(missing, |c| c == KeywordCategory::Soft, SOFT_NAME_CAP);
    let education = names_in(missing, |c| c == KeywordCategory::Education, EDUCATION_NAME_CAP);

    let mut suggestions = Vec::new();

    if !technical.is_empty() {
        suggestions.push(Suggestion {
            kind: "technical_skills".to_string(),
            title: "Add Missing Technical Skills".to_string(),
            description: format!(
                "The posting emphasizes technical skills your resume does not mention: {}. \
                 Add the ones you genuinely have to your skills section.",
                technical.join(", ")
            ),
            priority: Priority::High,
            keywords: technical,
        });
    }

    if !experience.is_empty() {
        suggestions.push(Suggestion {
            kind: "experience_language".to_string(),
            title: "Strengthen Experience Descriptions".to_string(),
            description: format!(
                "The posting repeats terms like {}. Echo the ones that describe your actual \
                 work in your experience bullets.",
                experience.join(", ")
            ),
            priority: Priority::Medium,
            keywords: experience,
        });
    }

    if !soft.is_empty() {
        suggestions.push(Suggestion {
            kind: "soft_skills".to_string(),
            title: "Show Soft Skills in Action".to_string(),
            description: format!(
                "Back up {} with concrete situations in your bullets instead of listing them.",
                soft.join(", ")
            ),
            priority: Priority::Medium,
            keywords: soft,
        });
    }

    if !education.is_empty() {
        suggestions.push(Suggestion {
            kind: "education".to_string(),
            title: "Highlight Education and Certifications".to_string(),
            description: format!(
                "The posting asks for {}. List matching credentials if you hold them.",
                education.join(", ")
            ),
            priority: Priority::Low,
            keywords: education,
        });
    }

    suggestions
}

fn names_in(
    missing: &[MissingKeyword],
    predicate: impl Fn(KeywordCategory) -> bool,
    cap: usize,
) -> Vec<String> {
    missing
        .iter()
        .filter(|m| predicate(m.category))
        .take(cap)
        .map(|m| m.keyword.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(keyword: &str, category: KeywordCategory) -> MissingKeyword {
        MissingKeyword {
            keyword: keyword.to_string(),
            category,
            importance: 1.0,
            suggestions: keyword_suggestions(keyword, category),
        }
    }

    #[test]
    fn test_technical_keyword_gets_two_suggestions() {
        let s = keyword_suggestions("docker", KeywordCategory::Technical);
        assert_eq!(s.len(), 2);
        assert!(s[0].contains("docker"));
        assert!(s[0].contains("skills section"));
    }

    #[test]
    fn test_other_categories_get_one_suggestion() {
        for category in [
            KeywordCategory::Soft,
            KeywordCategory::Role,
            KeywordCategory::Education,
            KeywordCategory::Phrase,
        ] {
            let s = keyword_suggestions("term", category);
            assert_eq!(s.len(), 1, "{category:?}");
            assert!(s[0].contains("term"));
        }
    }

    #[test]
    fn test_aggregate_order_is_technical_experience_soft_education() {
        let all = vec![
            missing("bachelor", KeywordCategory::Education),
            missing("communication", KeywordCategory::Soft),
            missing("architect", KeywordCategory::Role),
            missing("docker", KeywordCategory::Technical),
        ];
        let suggestions = improvement_suggestions(&all);
        let kinds: Vec<&str> = suggestions.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "technical_skills",
                "experience_language",
                "soft_skills",
                "education"
            ]
        );
    }

    #[test]
    fn test_role_and_phrase_merge_into_one_suggestion() {
        let all = vec![
            missing("architect", KeywordCategory::Role),
            missing("distributed systems", KeywordCategory::Phrase),
        ];
        let suggestions = improvement_suggestions(&all);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Strengthen Experience Descriptions");
        assert_eq!(
            suggestions[0].keywords,
            vec!["architect", "distributed systems"]
        );
        assert!(suggestions[0].description.contains("architect"));
        assert!(suggestions[0].description.contains("distributed systems"));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let all = vec![missing("docker", KeywordCategory::Technical)];
        let suggestions = improvement_suggestions(&all);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, "technical_skills");
        assert_eq!(suggestions[0].priority, Priority::High);
    }

    #[test]
    fn test_technical_description_names_at_most_five_keywords() {
        let all: Vec<MissingKeyword> = (0..8)
            .map(|i| missing(&format!("tool{i}"), KeywordCategory::Technical))
            .collect();
        let suggestions = improvement_suggestions(&all);
        assert_eq!(suggestions[0].keywords.len(), 5);
        assert!(suggestions[0].description.contains("tool4"));
        assert!(!suggestions[0].description.contains("tool5"));
    }

    #[test]
    fn test_no_missing_keywords_yields_no_suggestions() {
        assert!(improvement_suggestions(&[]).is_empty());
    }

    #[test]
    fn test_suggestion_serializes_with_type_key_and_lowercase_priority() {
        let all = vec![missing("docker", KeywordCategory::Technical)];
        let json = serde_json::to_value(improvement_suggestions(&all)).unwrap();
        assert_eq!(json[0]["type"], "technical_skills");
        assert_eq!(json[0]["priority"], "high");
    }
}
