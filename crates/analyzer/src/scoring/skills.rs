//! Static skill lexicons referenced by the keyword-relevance rule. The
//! lists are fixed configuration data: loaded once, never mutated at
//! runtime.

use once_cell::sync::Lazy;

/// In-demand technical skills matched against resume text.
pub const TECH_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "TypeScript",
    "Vue.js",
    "Angular",
    "Express",
    "PostgreSQL",
    "Redis",
    "Kubernetes",
    "Git",
    "REST API",
    "GraphQL",
    "Machine Learning",
    "TensorFlow",
    "Django",
    "Flask",
    "Spring Boot",
    "Java",
    "C++",
    "C#",
    ".NET",
    "PHP",
    "Laravel",
    "Ruby",
    "Rails",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "Azure",
    "GCP",
    "Jenkins",
    "Linux",
    "Bash",
    "HTML",
    "CSS",
    "Sass",
    "Webpack",
    "Figma",
];

/// Soft skills matched against resume text.
pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Leadership",
    "Problem Solving",
    "Team Collaboration",
    "Project Management",
    "Agile",
    "Scrum",
    "Critical Thinking",
    "Adaptability",
];

/// Lowered copies of the lists, built once. All matching runs on the
/// lower-cased resume text, so lowering the terms up front keeps the per
/// resume scan allocation-free.
pub(crate) static TECH_SKILLS_LOWER: Lazy<Vec<String>> =
    Lazy::new(|| TECH_SKILLS.iter().map(|s| s.to_lowercase()).collect());

pub(crate) static SOFT_SKILLS_LOWER: Lazy<Vec<String>> =
    Lazy::new(|| SOFT_SKILLS.iter().map(|s| s.to_lowercase()).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_sizes_are_stable() {
        // The relevance thresholds are percentages of the combined list
        // size, so shrinking or growing the lists shifts the rubric.
        assert_eq!(TECH_SKILLS.len(), 47);
        assert_eq!(SOFT_SKILLS.len(), 9);
    }

    #[test]
    fn test_lowered_lists_line_up_with_sources() {
        assert_eq!(TECH_SKILLS_LOWER.len(), TECH_SKILLS.len());
        assert_eq!(SOFT_SKILLS_LOWER.len(), SOFT_SKILLS.len());
        assert_eq!(TECH_SKILLS_LOWER[0], "javascript");
        assert_eq!(SOFT_SKILLS_LOWER[2], "problem solving");
    }
}
