use serde::{Deserialize, Serialize};

use crate::models::resume::BasicInfo;

/// Full analysis of one résumé record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub basic_info: BasicInfo,
    pub skill_analysis: SkillAnalysis,
    pub work_experience_analysis: WorkExperienceAnalysis,
    pub education_analysis: EducationAnalysis,
    /// Rounded to two decimals.
    pub comprehensive_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub total_skills: usize,
    pub top_skills: Vec<String>, // at most 5
    pub skill_diversity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceAnalysis {
    pub total_years: u32,
    pub companies: Vec<String>,
    pub experience_depth_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationAnalysis {
    pub education_level: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
    pub education_quality_score: f64,
}

/// Résumé-vs-job comparison. Every field lies in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub skill_match_score: f64,
    pub experience_match_score: f64,
    pub semantic_similarity: f64,
    pub comprehensive_match_score: f64,
}
