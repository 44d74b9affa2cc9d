//! Resume Text Flattener — linearizes a structured resume into plain text for
//! the keyword extractor.
//!
//! Field selection and order are part of the scoring contract: dropping a
//! field here silently changes which keywords the extractor can see. Absent
//! fields and groups are skipped, never replaced with placeholders.

use crate::models::resume::ResumeDocument;

/// Flattens a resume to a single space-joined string: summary, experience
/// (role, company, bullets, technologies), projects (name, role, bullets,
/// technologies), education (degree, school, details), skills groups, extras.
pub fn extract_resume_text(resume: &ResumeDocument) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(summary) = resume.summary.as_deref() {
        parts.push(summary);
    }

    for exp in &resume.experience {
        if let Some(role) = exp.role.as_deref() {
            parts.push(role);
        }
        if let Some(company) = exp.company.as_deref() {
            parts.push(company);
        }
        parts.extend(exp.bullets.iter().map(String::as_str));
        parts.extend(exp.technologies.iter().map(String::as_str));
    }

    for project in &resume.projects {
        if let Some(name) = project.name.as_deref() {
            parts.push(name);
        }
        if let Some(role) = project.role.as_deref() {
            parts.push(role);
        }
        parts.extend(project.bullets.iter().map(String::as_str));
        parts.extend(project.technologies.iter().map(String::as_str));
    }

    for edu in &resume.education {
        if let Some(degree) = edu.degree.as_deref() {
            parts.push(degree);
        }
        if let Some(school) = edu.school.as_deref() {
            parts.push(school);
        }
        if let Some(details) = edu.details.as_deref() {
            parts.push(details);
        }
    }

    if let Some(skills) = &resume.skills {
        parts.extend(skills.core.iter().map(String::as_str));
        parts.extend(skills.tools.iter().map(String::as_str));
        parts.extend(skills.soft.iter().map(String::as_str));
    }

    if let Some(extras) = &resume.extras {
        parts.extend(extras.certifications.iter().map(String::as_str));
        parts.extend(extras.awards.iter().map(String::as_str));
        parts.extend(extras.languages.iter().map(String::as_str));
    }

    parts.join(" ")
}
