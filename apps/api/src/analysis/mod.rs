// JD Score analysis pipeline.
// Implements: keyword extraction, resume flattening, match scoring,
// suggestion generation, ATS heuristics. Pure and synchronous — handlers call
// `analyze` once per request and persist the result verbatim.

pub mod ats;
pub mod dictionaries;
pub mod extractor;
pub mod flatten;
pub mod handlers;
pub mod scorer;
pub mod suggestions;

use crate::models::resume::ResumeDocument;

use extractor::extract_keywords;
use flatten::extract_resume_text;
use scorer::{calculate_match_score, AnalysisResult};

/// Runs the full analysis for one job-description / resume pair.
pub fn analyze(jd_text: &str, resume: &ResumeDocument) -> AnalysisResult {
    let jd_keywords = extract_keywords(jd_text);
    let resume_text = extract_resume_text(resume);
    let resume_keywords = extract_keywords(&resume_text);
    calculate_match_score(&jd_keywords, &resume_keywords, resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::KeywordCategory;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, Profile, ResumeDocument, SkillGroups,
    };

    fn resume_with_core_skills(skills: &[&str]) -> ResumeDocument {
        ResumeDocument {
            profile: Some(Profile {
                email: Some("a@example.com".to_string()),
                location: Some("Berlin".to_string()),
                ..Profile::default()
            }),
            experience: vec![ExperienceEntry {
                role: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
                start: Some("Jan 2020".to_string()),
                ..ExperienceEntry::default()
            }],
            education: vec![EducationEntry {
                degree: Some("BSc".to_string()),
                ..EducationEntry::default()
            }],
            skills: Some(SkillGroups {
                core: skills.iter().map(|s| s.to_string()).collect(),
                ..SkillGroups::default()
            }),
            ..ResumeDocument::default()
        }
    }

    #[test]
    fn test_missing_must_have_skill_is_flagged_as_critical() {
        let jd = "Looking for a Python developer with AWS and Docker experience. \
                  Must have strong communication skills.";
        let resume = resume_with_core_skills(&["Python", "AWS"]);
        let result = analyze(jd, &resume);

        let matched: Vec<&str> = result
            .matched_keywords
            .iter()
            .map(|m| m.keyword.as_str())
            .collect();
        assert!(matched.contains(&"python"));
        assert!(matched.contains(&"aws"));

        let docker = result
            .missing_keywords
            .iter()
            .find(|m| m.keyword == "docker")
            .expect("docker reported missing");
        assert_eq!(docker.category, KeywordCategory::Technical);
        assert!(
            docker.importance > 1.5,
            "must-have boost makes docker critical, got {}",
            docker.importance
        );
    }

    #[test]
    fn test_synonym_bridges_jd_shorthand_to_resume_skill() {
        let jd = "We run everything on k8s.";
        let resume = resume_with_core_skills(&["Kubernetes"]);
        let result = analyze(jd, &resume);

        let hit = result
            .matched_keywords
            .iter()
            .find(|m| m.keyword == "k8s")
            .expect("k8s matched through synonym");
        assert_eq!(hit.matched_as.as_deref(), Some("kubernetes"));
        assert_eq!(hit.partial, Some(true));
    }

    #[test]
    fn test_empty_jd_yields_bonus_only_score() {
        let resume = resume_with_core_skills(&["Python"]);
        let result = analyze("", &resume);

        assert_eq!(result.keyword_match.total, 0);
        assert_eq!(result.keyword_match.percentage, 0);
        assert_eq!(result.score, 8, "experience +5 and education +3");
    }

    #[test]
    fn test_empty_jd_and_empty_resume_scores_zero() {
        let result = analyze("", &ResumeDocument::default());
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_conservation_before_caps() {
        let jd = "Python, Docker, Kubernetes, Terraform, communication, leadership, \
                  bachelor degree. Senior engineer role.";
        let result = analyze(jd, &resume_with_core_skills(&["Python"]));
        assert_eq!(
            result.keyword_match.matched + result.keyword_match.missing,
            result.keyword_match.total
        );
    }

    #[test]
    fn test_output_caps_hold_for_keyword_heavy_jd() {
        let jd = "Requirements: python java javascript typescript rust golang ruby php \
                  swift kotlin scala sql html css react angular vue django flask spring \
                  rails laravel aws azure gcp docker kubernetes terraform ansible jenkins \
                  git linux postgresql mysql mongodb redis kafka graphql grpc microservices";
        let result = analyze(jd, &ResumeDocument::default());
        assert!(result.matched_keywords.len() <= 20);
        assert!(result.missing_keywords.len() <= 15);
        assert!(result.suggestions.len() <= 10);
        assert!(result.ats_score.issues.len() <= 10);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_adding_missing_keyword_does_not_decrease_score() {
        let jd = "Looking for a Python developer with Docker experience.";
        let without = analyze(jd, &resume_with_core_skills(&["Python"]));
        let with = analyze(jd, &resume_with_core_skills(&["Python", "Docker"]));
        assert!(
            with.score >= without.score,
            "adding docker dropped the score: {} -> {}",
            without.score,
            with.score
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let jd = "Senior Rust engineer. Kubernetes required, strong communication, \
                  Requirements: distributed systems, PostgreSQL.";
        let resume = resume_with_core_skills(&["Rust", "PostgreSQL", "Communication"]);
        let a = serde_json::to_string(&analyze(jd, &resume)).unwrap();
        let b = serde_json::to_string(&analyze(jd, &resume)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let inputs = [
            "",
            "a",
            "Must have everything required essential",
            "REQUIREMENTS:\nPython required\nDocker required\nKubernetes required",
        ];
        for jd in inputs {
            let result = analyze(jd, &ResumeDocument::default());
            assert!(result.score <= 100, "jd: {jd}");
            assert!(result.ats_score.score <= 100, "jd: {jd}");
        }
    }
}
