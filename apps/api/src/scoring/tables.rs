use std::collections::{HashMap, HashSet};

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("programming", &["Python", "Java", "C++", "JavaScript", "Go"]),
    (
        "data_science",
        &["Machine Learning", "Data Analysis", "AI", "Statistics"],
    ),
    ("cloud", &["Docker", "Kubernetes", "AWS", "Azure"]),
    ("web_frontend", &["React", "Vue", "Angular", "HTML", "CSS"]),
    ("web_backend", &["Node.js", "Django", "Flask", "Spring"]),
];

const EDUCATION_LEVEL_WEIGHTS: &[(&str, f64)] =
    &[("专科", 0.6), ("本科", 0.8), ("硕士", 0.9), ("博士", 1.0)];

const TOP_UNIVERSITIES: &[&str] = &[
    "清华大学",
    "北京大学",
    "浙江大学",
    "复旦大学",
    "中国科学技术大学",
    "上海交通大学",
    "沈阳航空航天大学",
];

/// Read-only lookup tables for the sub-score calculators.
#[derive(Debug, Clone)]
pub struct ScoringTables {
    /// Category name → member skills. Order is kept for reporting.
    pub skill_categories: Vec<(String, Vec<String>)>,
    pub education_level_weights: HashMap<String, f64>,
    /// Used when the level is missing or not in the table.
    pub default_education_weight: f64,
    pub top_universities: HashSet<String>,
    pub top_university_bonus: f64,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            skill_categories: SKILL_CATEGORIES
                .iter()
                .map(|(name, skills)| {
                    (
                        name.to_string(),
                        skills.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
            education_level_weights: EDUCATION_LEVEL_WEIGHTS
                .iter()
                .map(|(level, weight)| (level.to_string(), *weight))
                .collect(),
            default_education_weight: 0.8,
            top_universities: TOP_UNIVERSITIES.iter().map(|s| s.to_string()).collect(),
            top_university_bonus: 1.1,
        }
    }
}

/// Weights of the comprehensive résumé score: 0.4*skill + 0.3*experience + 0.3*education
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub skill_diversity: f64,
    pub experience_depth: f64,
    pub education_quality: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill_diversity: 0.4,
            experience_depth: 0.3,
            education_quality: 0.3,
        }
    }
}
