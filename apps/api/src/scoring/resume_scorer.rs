//! Résumé Scorer — combines the three sub-scores into one report.

use tracing::debug;

use crate::models::report::{EducationAnalysis, ScoreReport, SkillAnalysis, WorkExperienceAnalysis};
use crate::models::resume::StructuredResume;
use crate::scoring::calculators::{education_quality, experience_depth, skill_diversity};
use crate::scoring::tables::{ScoreWeights, ScoringTables};

/// Skills listed under `top_skills`.
const TOP_SKILLS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    tables: ScoringTables,
    weights: ScoreWeights,
}

impl ResumeScorer {
    pub fn new(tables: ScoringTables, weights: ScoreWeights) -> Self {
        Self { tables, weights }
    }

    /// Scores a record without modifying it. Always succeeds.
    pub fn score(&self, resume: &StructuredResume) -> ScoreReport {
        let skill_analysis = SkillAnalysis {
            total_skills: resume.skills.len(),
            top_skills: resume.skills.iter().take(TOP_SKILLS).cloned().collect(),
            skill_diversity_score: skill_diversity(&resume.skills, &self.tables),
        };

        let work = &resume.work_experience;
        let work_experience_analysis = WorkExperienceAnalysis {
            total_years: work.total_work_years,
            companies: work
                .work_experiences
                .iter()
                .map(|entry| entry.company.clone())
                .collect(),
            experience_depth_score: experience_depth(work),
        };

        let education = &resume.education_info;
        let education_analysis = EducationAnalysis {
            education_level: education.education_level.clone(),
            school: education.school.clone(),
            major: education.major.clone(),
            education_quality_score: education_quality(education, &self.tables),
        };

        let comprehensive_score = round2(
            (self.weights.skill_diversity * skill_analysis.skill_diversity_score
                + self.weights.experience_depth * work_experience_analysis.experience_depth_score
                + self.weights.education_quality * education_analysis.education_quality_score)
                .clamp(0.0, 1.0),
        );

        debug!(
            skill = skill_analysis.skill_diversity_score,
            experience = work_experience_analysis.experience_depth_score,
            education = education_analysis.education_quality_score,
            comprehensive = comprehensive_score,
            "scored resume"
        );

        ScoreReport {
            basic_info: resume.basic_info.clone(),
            skill_analysis,
            work_experience_analysis,
            education_analysis,
            comprehensive_score,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
