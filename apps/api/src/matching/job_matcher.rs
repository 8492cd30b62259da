//! Job Matcher — compares a structured résumé against job requirements.
//!
//! Three sub-scores feed a weighted comprehensive match score:
//! 1. skill match: weighted share of required skills the résumé lists
//! 2. experience match: years against the job's minimum
//! 3. semantic similarity: two-document TF-IDF cosine of both texts

use std::collections::HashSet;

use tracing::debug;

use crate::matching::segmenter::Segmenter;
use crate::matching::similarity::tfidf_cosine;
use crate::matching::tables::{MatchWeights, MatchingTables};
use crate::models::job::JobRequirements;
use crate::models::report::MatchReport;
use crate::models::resume::StructuredResume;

#[derive(Debug, Clone)]
pub struct JobMatcher {
    tables: MatchingTables,
    weights: MatchWeights,
    segmenter: Segmenter,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(MatchingTables::default(), MatchWeights::default())
    }
}

impl JobMatcher {
    pub fn new(tables: MatchingTables, weights: MatchWeights) -> Self {
        let segmenter = Segmenter::new(tables.stopwords.clone());
        Self {
            tables,
            weights,
            segmenter,
        }
    }

    pub fn match_resume(&self, resume: &StructuredResume, job: &JobRequirements) -> MatchReport {
        let skill_match_score = self.skill_match(&resume.skills, &job.required_skills);
        let experience_match_score =
            experience_match(resume.work_experience.total_work_years, job.min_work_years);
        let semantic_similarity = self.semantic_similarity(resume, job);

        let comprehensive_match_score = (self.weights.skill * skill_match_score
            + self.weights.experience * experience_match_score
            + self.weights.semantic * semantic_similarity)
            .clamp(0.0, 1.0);

        debug!(
            skill = skill_match_score,
            experience = experience_match_score,
            semantic = semantic_similarity,
            comprehensive = comprehensive_match_score,
            "matched resume against job"
        );

        MatchReport {
            skill_match_score,
            experience_match_score,
            semantic_similarity,
            comprehensive_match_score,
        }
    }

    /// Σ weight(required ∩ résumé) / Σ weight(required).
    ///
    /// A required skill is held only when the résumé lists the exact same
    /// string; case is ignored for the weight lookup alone. The numerator
    /// counts each held skill once, the denominator counts every entry of
    /// `required_skills`, duplicates included. No required skills scores 0.0.
    pub fn skill_match(&self, resume_skills: &[String], required_skills: &[String]) -> f64 {
        if required_skills.is_empty() {
            return 0.0;
        }

        let held: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
        let required: HashSet<&str> = required_skills.iter().map(String::as_str).collect();

        let matched_weight: f64 = required
            .intersection(&held)
            .map(|skill| self.tables.skill_weight(skill))
            .sum();
        let total_weight: f64 = required_skills
            .iter()
            .map(|skill| self.tables.skill_weight(skill))
            .sum();

        if total_weight <= 0.0 {
            return 0.0;
        }
        (matched_weight / total_weight).clamp(0.0, 1.0)
    }

    pub fn semantic_similarity(&self, resume: &StructuredResume, job: &JobRequirements) -> f64 {
        let resume_terms = self.segmenter.tokenize(&resume.text_fragments().join(" "));
        let job_terms = self.segmenter.tokenize(&job.text_fragments().join(" "));
        tfidf_cosine(&resume_terms, &job_terms)
    }
}

/// 1.0 once the minimum is met, else the fraction of it covered.
/// A zero minimum is always met.
pub fn experience_match(resume_years: u32, min_years: u32) -> f64 {
    if min_years == 0 || resume_years >= min_years {
        1.0
    } else if resume_years > 0 {
        resume_years as f64 / min_years as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationInfo, WorkExperience};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn resume(skills: &[&str], years: u32) -> StructuredResume {
        StructuredResume {
            skills: strings(skills),
            work_experience: WorkExperience {
                total_work_years: years,
                work_experiences: vec![],
            },
            ..Default::default()
        }
    }

    fn job(skills: &[&str], min_years: u32, description: &str) -> JobRequirements {
        JobRequirements {
            required_skills: strings(skills),
            min_work_years: min_years,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_python_java_scenario() {
        let report = JobMatcher::default()
            .match_resume(&resume(&["Python"], 5), &job(&["Python", "Java"], 3, ""));

        assert_eq!(report.experience_match_score, 1.0);
        let expected = 1.5 / (1.5 + 1.4);
        assert!((report.skill_match_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_no_required_skills_and_no_minimum() {
        let matcher = JobMatcher::default();
        for candidate in [
            StructuredResume::default(),
            resume(&["Python", "Java"], 0),
            resume(&["Docker"], 12),
        ] {
            let report = matcher.match_resume(&candidate, &job(&[], 0, "后端开发"));
            assert_eq!(report.skill_match_score, 0.0);
            assert_eq!(report.experience_match_score, 1.0);
        }
    }

    #[test]
    fn test_skill_match_requires_exact_names() {
        let matcher = JobMatcher::default();
        assert_eq!(
            matcher.skill_match(&strings(&["python"]), &strings(&["Python"])),
            0.0
        );
        let score = matcher.skill_match(&strings(&["python", "Java"]), &strings(&["Python", "Java"]));
        assert!((score - 1.4 / 2.9).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_required_skills_weigh_each_time() {
        let score = JobMatcher::default().skill_match(
            &strings(&["Python"]),
            &strings(&["Python", "Python", "Java"]),
        );
        assert!((score - 1.5 / 4.4).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_weight_lookup_ignores_case() {
        let score = JobMatcher::default()
            .skill_match(&strings(&["MACHINE LEARNING"]), &strings(&["MACHINE LEARNING", "Rust"]));
        assert!((score - 1.6 / 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_unlisted_skills_weigh_one() {
        let score = JobMatcher::default()
            .skill_match(&strings(&["Rust"]), &strings(&["Rust", "Go"]));
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_blank_required_skill_still_counts() {
        let score = JobMatcher::default()
            .skill_match(&strings(&["Python"]), &strings(&["Python", ""]));
        assert!((score - 1.5 / 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_experience_match_branches() {
        assert_eq!(experience_match(5, 3), 1.0);
        assert_eq!(experience_match(3, 3), 1.0);
        assert!((experience_match(2, 4) - 0.5).abs() < 1e-9);
        assert_eq!(experience_match(0, 4), 0.0);
        assert_eq!(experience_match(0, 0), 1.0);
    }

    #[test]
    fn test_semantic_similarity_related_texts_score_higher() {
        let matcher = JobMatcher::default();
        let candidate = StructuredResume {
            skills: strings(&["Python", "Docker"]),
            education_info: EducationInfo {
                major: Some("计算机专业".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let related = job(&["Python"], 0, "Python backend developer with Docker");
        let unrelated = job(&["Excel"], 0, "accounting spreadsheets reporting");

        let related_score = matcher.semantic_similarity(&candidate, &related);
        let unrelated_score = matcher.semantic_similarity(&candidate, &unrelated);
        assert!(related_score > unrelated_score);
        assert!((0.0..=1.0).contains(&related_score));
        assert_eq!(unrelated_score, 0.0);
    }

    #[test]
    fn test_semantic_similarity_of_empty_sides_is_zero() {
        let score = JobMatcher::default()
            .semantic_similarity(&StructuredResume::default(), &JobRequirements::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_comprehensive_is_weighted_sum() {
        let report = JobMatcher::default()
            .match_resume(&resume(&["Python"], 1), &job(&["Python", "Java"], 2, ""));
        let expected = 0.4 * report.skill_match_score
            + 0.3 * report.experience_match_score
            + 0.3 * report.semantic_similarity;
        assert!((report.comprehensive_match_score - expected).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&report.comprehensive_match_score));
    }
}
