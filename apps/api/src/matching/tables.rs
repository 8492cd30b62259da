use std::collections::{HashMap, HashSet};

// Keys are lowercase; lookups lowercase the skill first.
const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("python", 1.5),
    ("java", 1.4),
    ("machine learning", 1.6),
    ("data analysis", 1.5),
    ("ai", 1.7),
    ("backend", 1.4),
    ("frontend", 1.3),
];

const ZH_STOPWORDS: &[&str] = &[
    "的", "了", "和", "是", "就", "都", "而", "及", "与", "很", "可以", "因为", "但是", "所以",
    "并", "或者",
];

const EN_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "down",
];

/// Read-only lookup tables for the job matcher.
#[derive(Debug, Clone)]
pub struct MatchingTables {
    pub skill_weights: HashMap<String, f64>,
    /// Weight of skills missing from `skill_weights`.
    pub default_skill_weight: f64,
    pub stopwords: HashSet<String>,
}

impl Default for MatchingTables {
    fn default() -> Self {
        Self {
            skill_weights: SKILL_WEIGHTS
                .iter()
                .map(|(skill, weight)| (skill.to_string(), *weight))
                .collect(),
            default_skill_weight: 1.0,
            stopwords: ZH_STOPWORDS
                .iter()
                .chain(EN_STOPWORDS)
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl MatchingTables {
    /// Case-insensitive weight lookup.
    pub fn skill_weight(&self, skill: &str) -> f64 {
        self.skill_weights
            .get(&normalize_skill(skill))
            .copied()
            .unwrap_or(self.default_skill_weight)
    }
}

/// Lowercased, trimmed form used as the weight-table key.
fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Weights of the comprehensive match score: 0.4*skill + 0.3*experience + 0.3*semantic
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub skill: f64,
    pub experience: f64,
    pub semantic: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            experience: 0.3,
            semantic: 0.3,
        }
    }
}
