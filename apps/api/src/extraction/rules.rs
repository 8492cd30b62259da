//! Pattern rules — an ordered list of `(field, pattern, postprocess)` triples.
//!
//! Every entity the extractor knows about is one `ExtractionRule`. Rules are
//! independent: one failing never blocks the others. Adding an entity type
//! means appending a rule here and a field assignment in the extractor.

use regex::Regex;
use thiserror::Error;

use crate::extraction::vocabulary::ExtractionVocabulary;

// 2–4 CJK ideographs. The range mirrors the common-use block.
const NAME_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]{2,4})";
const PHONE_PATTERN: &str = r"(1[3-9][0-9]{9})";
const EMAIL_PATTERN: &str = r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})";
const SCHOOL_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]+(?:大学|学院|学校))";
const MAJOR_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]+(?:专业|系))";
const WORK_YEARS_PATTERN: &str = r"([0-9]{1,2})年工作经验";
const COMPANY_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]+(?:公司|集团|企业))";
const POSITION_PATTERN: &str = r"([\x{4e00}-\x{9fa5}]+(?:工程师|经理|总监|专员))";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Name,
    Phone,
    Email,
    EducationLevel,
    School,
    Major,
    TotalWorkYears,
    Company,
    Position,
}

/// Fields that fail together. A failure inside `BasicInfo` nulls the whole
/// group; the other groups fail per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    BasicInfo,
    Education,
    WorkExperience,
}

impl RuleField {
    pub fn group(self) -> RuleGroup {
        match self {
            RuleField::Name | RuleField::Phone | RuleField::Email => RuleGroup::BasicInfo,
            RuleField::EducationLevel | RuleField::School | RuleField::Major => {
                RuleGroup::Education
            }
            RuleField::TotalWorkYears | RuleField::Company | RuleField::Position => {
                RuleGroup::WorkExperience
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// First match in the document, if any.
    First,
    /// Every non-overlapping match in document order.
    All,
}

#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("{field:?} rule rejected '{matched}': {reason}")]
    Rejected {
        field: RuleField,
        matched: String,
        reason: String,
    },
}

/// Turns a raw capture into the stored value.
pub type Postprocess = fn(RuleField, &str) -> Result<String, RuleError>;

pub struct ExtractionRule {
    pub field: RuleField,
    pattern: Regex,
    mode: MatchMode,
    postprocess: Postprocess,
}

impl ExtractionRule {
    pub fn new(
        field: RuleField,
        pattern: &str,
        mode: MatchMode,
        postprocess: Postprocess,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            field,
            pattern: Regex::new(pattern)?,
            mode,
            postprocess,
        })
    }

    /// Runs the rule over `text`. Uses capture group 1 when the pattern has
    /// one, otherwise the whole match. No match yields an empty vec.
    pub fn apply(&self, text: &str) -> Result<Vec<String>, RuleError> {
        let captures = self.pattern.captures_iter(text).filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str())
        });

        match self.mode {
            MatchMode::First => captures
                .take(1)
                .map(|raw| (self.postprocess)(self.field, raw))
                .collect(),
            MatchMode::All => captures
                .map(|raw| (self.postprocess)(self.field, raw))
                .collect(),
        }
    }
}

impl std::fmt::Debug for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionRule")
            .field("field", &self.field)
            .field("pattern", &self.pattern.as_str())
            .field("mode", &self.mode)
            .finish()
    }
}

/// Keeps the capture as-is.
pub fn verbatim(_field: RuleField, raw: &str) -> Result<String, RuleError> {
    Ok(raw.to_string())
}

/// Normalizes a year count ("03" → "3").
pub fn year_count(field: RuleField, raw: &str) -> Result<String, RuleError> {
    raw.parse::<u32>()
        .map(|years| years.to_string())
        .map_err(|e| RuleError::Rejected {
            field,
            matched: raw.to_string(),
            reason: e.to_string(),
        })
}

/// The standard rule list, in application order.
pub fn standard_rules(vocabulary: &ExtractionVocabulary) -> Result<Vec<ExtractionRule>, regex::Error> {
    let education_pattern = vocabulary.education_pattern();

    let table: [(RuleField, &str, MatchMode, Postprocess); 9] = [
        (RuleField::Name, NAME_PATTERN, MatchMode::First, verbatim),
        (RuleField::Phone, PHONE_PATTERN, MatchMode::First, verbatim),
        (RuleField::Email, EMAIL_PATTERN, MatchMode::First, verbatim),
        (
            RuleField::EducationLevel,
            education_pattern.as_str(),
            MatchMode::First,
            verbatim,
        ),
        (RuleField::School, SCHOOL_PATTERN, MatchMode::First, verbatim),
        (RuleField::Major, MAJOR_PATTERN, MatchMode::First, verbatim),
        (
            RuleField::TotalWorkYears,
            WORK_YEARS_PATTERN,
            MatchMode::First,
            year_count,
        ),
        (RuleField::Company, COMPANY_PATTERN, MatchMode::All, verbatim),
        (RuleField::Position, POSITION_PATTERN, MatchMode::All, verbatim),
    ];

    table
        .into_iter()
        .map(|(field, pattern, mode, postprocess)| {
            ExtractionRule::new(field, pattern, mode, postprocess)
        })
        .collect()
}
