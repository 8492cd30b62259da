//! Entity Extractor — turns résumé text into a `StructuredResume`.
//!
//! Extraction is deterministic: the same text always yields the same record.
//! Nothing here fails on noisy input. A rule that does not match leaves its
//! field empty.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::extraction::cleaner::log_preview;
use crate::extraction::rules::{standard_rules, ExtractionRule, RuleField, RuleGroup};
use crate::extraction::vocabulary::ExtractionVocabulary;
use crate::models::resume::{BasicInfo, StructuredResume, WorkEntry};

pub struct EntityExtractor {
    rules: Vec<ExtractionRule>,
    vocabulary: ExtractionVocabulary,
}

impl EntityExtractor {
    /// Builds an extractor with the standard rule list over `vocabulary`.
    pub fn new(vocabulary: ExtractionVocabulary) -> Result<Self, regex::Error> {
        let rules = standard_rules(&vocabulary)?;
        Ok(Self::with_rules(rules, vocabulary))
    }

    pub fn with_rules(rules: Vec<ExtractionRule>, vocabulary: ExtractionVocabulary) -> Self {
        Self { rules, vocabulary }
    }

    /// Extracts a record from raw text. Empty text yields the default record.
    pub fn extract(&self, text: &str) -> StructuredResume {
        let mut resume = StructuredResume::default();
        if text.is_empty() {
            return resume;
        }

        let mut companies = Vec::new();
        let mut positions = Vec::new();
        let mut basic_info_failed = false;

        for rule in &self.rules {
            let values = match rule.apply(text) {
                Ok(values) => values,
                Err(e) => {
                    warn!(field = ?rule.field, error = %e, "extraction rule failed");
                    if rule.field.group() == RuleGroup::BasicInfo {
                        basic_info_failed = true;
                    }
                    continue;
                }
            };

            match rule.field {
                RuleField::Company => companies = values,
                RuleField::Position => positions = values,
                field => assign_first(&mut resume, field, values.into_iter().next()),
            }
        }

        if basic_info_failed {
            resume.basic_info = BasicInfo::default();
        }

        // Positional pairing: the i-th company goes with the i-th position.
        resume.work_experience.work_experiences = companies
            .into_iter()
            .zip(positions)
            .map(|(company, position)| WorkEntry { company, position })
            .collect();

        resume.skills = self.vocabulary.match_skills(text);

        debug!(
            preview = %log_preview(text, 40),
            skills = resume.skills.len(),
            work_entries = resume.work_experience.work_experiences.len(),
            "extracted resume"
        );
        resume
    }

    /// Extracts from untyped JSON input.
    ///
    /// - strings are extracted as text
    /// - objects are read as an (possibly partial) structured record and
    ///   pass through unchanged, so extraction is idempotent on its output
    /// - `null` is the empty record
    /// - anything else is coerced to its string form and extracted
    ///
    /// Fails only when an object carries a field of the wrong type.
    pub fn extract_value(&self, input: &Value) -> Result<StructuredResume, serde_json::Error> {
        match input {
            Value::String(text) => Ok(self.extract(text)),
            Value::Object(_) => StructuredResume::deserialize(input),
            Value::Null => Ok(StructuredResume::default()),
            other => Ok(self.extract(&other.to_string())),
        }
    }
}

fn assign_first(resume: &mut StructuredResume, field: RuleField, value: Option<String>) {
    match field {
        RuleField::Name => resume.basic_info.name = value,
        RuleField::Phone => resume.basic_info.phone = value,
        RuleField::Email => resume.basic_info.email = value,
        RuleField::EducationLevel => resume.education_info.education_level = value,
        RuleField::School => resume.education_info.school = value,
        RuleField::Major => resume.education_info.major = value,
        RuleField::TotalWorkYears => {
            resume.work_experience.total_work_years =
                value.and_then(|v| v.parse().ok()).unwrap_or(0)
        }
        RuleField::Company | RuleField::Position => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::cleaner::clean_text;
    use crate::extraction::rules::{verbatim, MatchMode, RuleError};
    use serde_json::json;

    const SAMPLE: &str = "张伟，电话13812345678，邮箱zhang@x.com，本科，清华大学，计算机专业，3年工作经验，阿里巴巴公司产品经理，掌握Python和机器学习";

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(ExtractionVocabulary::default()).unwrap()
    }

    #[test]
    fn test_sample_resume_fields() {
        let resume = extractor().extract(SAMPLE);

        assert_eq!(resume.basic_info.name.as_deref(), Some("张伟"));
        assert_eq!(resume.basic_info.phone.as_deref(), Some("13812345678"));
        assert_eq!(resume.basic_info.email.as_deref(), Some("zhang@x.com"));
        assert_eq!(resume.education_info.education_level.as_deref(), Some("本科"));
        assert_eq!(resume.education_info.school.as_deref(), Some("清华大学"));
        assert_eq!(resume.education_info.major.as_deref(), Some("计算机专业"));
        assert_eq!(resume.work_experience.total_work_years, 3);
        assert_eq!(resume.work_experience.work_experiences.len(), 1);
        assert_eq!(
            resume.work_experience.work_experiences[0].company,
            "阿里巴巴公司"
        );
        assert!(resume.skills.contains(&"Python".to_string()));
        assert!(resume.skills.contains(&"机器学习".to_string()));
    }

    #[test]
    fn test_empty_text_yields_default_record() {
        assert_eq!(extractor().extract(""), StructuredResume::default());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = extractor();
        assert_eq!(extractor.extract(SAMPLE), extractor.extract(SAMPLE));
    }

    #[test]
    fn test_extract_value_passes_structured_output_through() {
        let extractor = extractor();
        let first = extractor.extract(SAMPLE);
        let again = extractor
            .extract_value(&serde_json::to_value(&first).unwrap())
            .unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn test_extract_value_reads_string_as_text() {
        let resume = extractor().extract_value(&json!(SAMPLE)).unwrap();
        assert_eq!(resume.basic_info.name.as_deref(), Some("张伟"));
    }

    #[test]
    fn test_extract_value_coerces_numbers_to_text() {
        let resume = extractor().extract_value(&json!(13812345678u64)).unwrap();
        assert_eq!(resume.basic_info.phone.as_deref(), Some("13812345678"));
    }

    #[test]
    fn test_extract_value_null_is_empty_record() {
        let resume = extractor().extract_value(&Value::Null).unwrap();
        assert_eq!(resume, StructuredResume::default());
    }

    #[test]
    fn test_extract_value_rejects_wrong_field_types() {
        let result = extractor().extract_value(&json!({"skills": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn test_mismatched_counts_pair_up_to_shorter_list() {
        let text = "腾讯公司，华为集团，字节跳动企业，担任后端工程师";
        let resume = extractor().extract(text);
        let entries = &resume.work_experience.work_experiences;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "腾讯公司");
        assert_eq!(entries[0].position, "担任后端工程师");
    }

    #[test]
    fn test_cleaned_full_width_text_extracts() {
        let text = clean_text("电话１３８１２３４５６７８，１０年工作经验，Ｐｙｔｈｏｎ");
        let resume = extractor().extract(&text);

        assert_eq!(resume.basic_info.phone.as_deref(), Some("13812345678"));
        assert_eq!(resume.work_experience.total_work_years, 10);
        assert_eq!(resume.skills, vec!["Python"]);
    }

    #[test]
    fn test_noisy_input_does_not_fail() {
        let resume = extractor().extract("\u{0}\u{7}  \t\r\n@@@ 123");
        assert_eq!(resume.work_experience.total_work_years, 0);
        assert!(resume.skills.is_empty());
    }

    fn failing(field: RuleField, raw: &str) -> Result<String, RuleError> {
        Err(RuleError::Rejected {
            field,
            matched: raw.to_string(),
            reason: "test".to_string(),
        })
    }

    #[test]
    fn test_basic_info_failure_nulls_whole_group() {
        let vocabulary = ExtractionVocabulary::default();
        let mut rules = standard_rules(&vocabulary).unwrap();
        rules.retain(|r| r.field != RuleField::Email);
        rules.push(
            ExtractionRule::new(RuleField::Email, r"(\S+@\S+)", MatchMode::First, failing)
                .unwrap(),
        );
        let resume = EntityExtractor::with_rules(rules, vocabulary).extract(SAMPLE);

        assert_eq!(resume.basic_info, BasicInfo::default());
        // Other groups are unaffected.
        assert_eq!(resume.education_info.school.as_deref(), Some("清华大学"));
    }

    #[test]
    fn test_failure_outside_basic_info_only_drops_that_field() {
        let vocabulary = ExtractionVocabulary::default();
        let mut rules = standard_rules(&vocabulary).unwrap();
        rules.retain(|r| r.field != RuleField::Major);
        rules.push(
            ExtractionRule::new(RuleField::Major, r"(\S+专业)", MatchMode::First, failing)
                .unwrap(),
        );
        let resume = EntityExtractor::with_rules(rules, vocabulary).extract(SAMPLE);

        assert_eq!(resume.education_info.major, None);
        assert_eq!(resume.basic_info.name.as_deref(), Some("张伟"));
    }

    #[test]
    fn test_substituted_vocabulary() {
        let vocabulary = ExtractionVocabulary {
            education_levels: vec!["大专".to_string()],
            skills: vec!["Rust".to_string()],
            top_skills: 5,
        };
        let rules = vec![ExtractionRule::new(
            RuleField::EducationLevel,
            &vocabulary.education_pattern(),
            MatchMode::First,
            verbatim,
        )
        .unwrap()];
        let resume = EntityExtractor::with_rules(rules, vocabulary).extract("大专学历，熟悉Rust");

        assert_eq!(resume.education_info.education_level.as_deref(), Some("大专"));
        assert_eq!(resume.skills, vec!["Rust"]);
        assert_eq!(resume.basic_info.name, None);
    }
}
