//! Fixed vocabularies the extractor matches against.

const EDUCATION_LEVELS: &[&str] = &["专科", "本科", "硕士", "博士", "研究生"];

const SKILL_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "React",
    "Vue",
    "机器学习",
    "数据分析",
    "深度学习",
    "Docker",
    "Kubernetes",
];

pub const DEFAULT_TOP_SKILLS: usize = 5;

/// Read-only term lists injected into the extractor at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionVocabulary {
    pub education_levels: Vec<String>,
    pub skills: Vec<String>,
    /// How many vocabulary hits to keep per résumé.
    pub top_skills: usize,
}

impl Default for ExtractionVocabulary {
    fn default() -> Self {
        Self {
            education_levels: EDUCATION_LEVELS.iter().map(|s| s.to_string()).collect(),
            skills: SKILL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            top_skills: DEFAULT_TOP_SKILLS,
        }
    }
}

impl ExtractionVocabulary {
    pub fn with_top_skills(mut self, top_skills: usize) -> Self {
        self.top_skills = top_skills;
        self
    }

    /// Vocabulary skills contained in `text`, in vocabulary order.
    ///
    /// Containment is case-sensitive, so "JavaScript" also yields "Java".
    pub fn match_skills(&self, text: &str) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| text.contains(skill.as_str()))
            .take(self.top_skills)
            .cloned()
            .collect()
    }

    /// Regex alternation over the education levels, e.g. `(专科|本科|...)`.
    pub fn education_pattern(&self) -> String {
        let alternatives: Vec<String> = self
            .education_levels
            .iter()
            .map(|level| regex::escape(level))
            .collect();
        format!("({})", alternatives.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let vocab = ExtractionVocabulary::default();
        let skills = vocab.match_skills("熟悉Docker，掌握Python");
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_skill_match_is_case_sensitive() {
        let vocab = ExtractionVocabulary::default();
        assert!(vocab.match_skills("python docker").is_empty());
    }

    #[test]
    fn test_javascript_also_matches_java() {
        let vocab = ExtractionVocabulary::default();
        assert_eq!(vocab.match_skills("JavaScript"), vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_skills_truncated_to_top_n() {
        let vocab = ExtractionVocabulary::default();
        let text = "Python Java C++ JavaScript React Vue Docker";
        assert_eq!(vocab.match_skills(text).len(), 5);

        let vocab = vocab.with_top_skills(2);
        assert_eq!(vocab.match_skills(text), vec!["Python", "Java"]);
    }

    #[test]
    fn test_education_pattern_escapes_terms() {
        let vocab = ExtractionVocabulary {
            education_levels: vec!["B.Sc".to_string(), "本科".to_string()],
            ..Default::default()
        };
        assert_eq!(vocab.education_pattern(), r"(B\.Sc|本科)");
    }
}
