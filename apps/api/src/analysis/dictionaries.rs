//! Static term dictionaries and the synonym table for keyword extraction.
//!
//! Read-only process-wide constants. The four category lists are disjoint by
//! construction, so a hit's category is simply the list it came from.

/// Technical skills: languages, frameworks, infrastructure, data tooling.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "rails",
    "laravel",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "k8s",
    "terraform",
    "ansible",
    "jenkins",
    "git",
    "linux",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "graphql",
    "rest api",
    "grpc",
    "microservices",
    "ci/cd",
    "machine learning",
    "data analysis",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "spark",
    "hadoop",
    "tableau",
    "excel",
    "salesforce",
    "sap",
    "jira",
];

/// Soft skills and working-style terms.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "collaboration",
    "problem solving",
    "adaptability",
    "creativity",
    "critical thinking",
    "time management",
    "attention to detail",
    "mentoring",
    "negotiation",
    "presentation",
    "stakeholder management",
    "conflict resolution",
    "decision making",
    "initiative",
    "accountability",
];

/// Role and seniority terms that typically appear in titles and headlines.
pub const ROLE_TERMS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "analyst",
    "architect",
    "consultant",
    "designer",
    "administrator",
    "recruiter",
    "senior",
    "junior",
    "principal",
    "lead",
    "specialist",
    "coordinator",
    "product manager",
    "project manager",
    "scrum master",
];

/// Education and certification terms.
pub const EDUCATION_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "mba",
    "degree",
    "diploma",
    "certification",
    "certified",
    "bootcamp",
    "pmp",
    "cpa",
    "shrm",
    "cissp",
    "comptia",
];

/// Equivalence groups consulted before substring matching during partial-match
/// detection. Lookup is bidirectional within a group.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &["javascript", "js", "ecmascript"],
    &["typescript", "ts"],
    &["kubernetes", "k8s"],
    &["postgresql", "postgres"],
    &["amazon web services", "aws"],
    &["google cloud", "google cloud platform", "gcp"],
    &["machine learning", "ml"],
    &["artificial intelligence", "ai"],
    &["continuous integration", "ci/cd"],
    &["user experience", "ux"],
    &["user interface", "ui"],
    &["node.js", "nodejs", "node"],
    &["react", "reactjs", "react.js"],
    &["vue", "vuejs", "vue.js"],
    &["golang", "go"],
];

/// True when `a` and `b` (lower-case) belong to the same synonym group.
pub fn are_synonyms(a: &str, b: &str) -> bool {
    a != b
        && SYNONYM_GROUPS
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
}
