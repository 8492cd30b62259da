//! Sub-score calculators. Each is a total function of its input returning a
//! value in [0, 1]; missing data degrades to the documented default.

use std::collections::HashSet;

use crate::models::resume::{EducationInfo, WorkExperience};
use crate::scoring::tables::ScoringTables;

/// Years at which the years factor saturates.
const FULL_YEARS: f64 = 10.0;
/// Distinct employers at which company diversity saturates.
const FULL_COMPANIES: f64 = 3.0;

/// Share of skill categories with at least one listed skill.
pub fn skill_diversity(skills: &[String], tables: &ScoringTables) -> f64 {
    let total = tables.skill_categories.len();
    if total == 0 {
        return 0.0;
    }

    let covered = tables
        .skill_categories
        .iter()
        .filter(|(_, members)| skills.iter().any(|skill| members.contains(skill)))
        .count();

    (covered as f64 / total as f64).min(1.0)
}

/// 0.7 * years factor + 0.3 * company diversity.
pub fn experience_depth(work: &WorkExperience) -> f64 {
    let distinct_companies: HashSet<&str> = work
        .work_experiences
        .iter()
        .map(|entry| entry.company.as_str())
        .collect();

    let years_factor = (work.total_work_years as f64 / FULL_YEARS).min(1.0);
    let company_diversity = (distinct_companies.len() as f64 / FULL_COMPANIES).min(1.0);

    (0.7 * years_factor + 0.3 * company_diversity).clamp(0.0, 1.0)
}

/// Level weight, boosted for allow-listed schools, capped at 1.0.
pub fn education_quality(education: &EducationInfo, tables: &ScoringTables) -> f64 {
    let level_score = education
        .education_level
        .as_deref()
        .and_then(|level| tables.education_level_weights.get(level))
        .copied()
        .unwrap_or(tables.default_education_weight);

    let school_bonus = match education.school.as_deref() {
        Some(school) if tables.top_universities.contains(school) => tables.top_university_bonus,
        _ => 1.0,
    };

    (level_score * school_bonus).clamp(0.0, 1.0)
}
