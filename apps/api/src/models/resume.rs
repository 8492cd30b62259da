use serde::{Deserialize, Serialize};

/// Normalized record produced by entity extraction.
///
/// Every field defaults when missing so partially-filled JSON from callers
/// still deserializes. Absence is a valid terminal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    pub basic_info: BasicInfo,
    pub education_info: EducationInfo,
    pub work_experience: WorkExperience,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationInfo {
    pub education_level: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub total_work_years: u32,
    pub work_experiences: Vec<WorkEntry>,
}

/// One company/position pair. Pairing is positional, see the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
}

impl StructuredResume {
    /// Every string leaf of the record in field order, used as the résumé
    /// side of text similarity.
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut fragments = Vec::new();
        let BasicInfo { name, phone, email } = &self.basic_info;
        let EducationInfo {
            education_level,
            school,
            major,
        } = &self.education_info;

        for field in [name, phone, email, education_level, school, major] {
            if let Some(value) = field.as_deref() {
                fragments.push(value);
            }
        }
        for entry in &self.work_experience.work_experiences {
            fragments.push(entry.company.as_str());
            fragments.push(entry.position.as_str());
        }
        fragments.extend(self.skills.iter().map(String::as_str));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let resume: StructuredResume = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resume, StructuredResume::default());
    }

    #[test]
    fn test_partial_work_experience_defaults_missing_fields() {
        let resume: StructuredResume = serde_json::from_value(json!({
            "skills": ["Python"],
            "work_experience": {"total_work_years": 5}
        }))
        .unwrap();
        assert_eq!(resume.work_experience.total_work_years, 5);
        assert!(resume.work_experience.work_experiences.is_empty());
        assert_eq!(resume.basic_info.name, None);
    }

    #[test]
    fn test_negative_years_is_rejected() {
        let result: Result<StructuredResume, _> = serde_json::from_value(json!({
            "work_experience": {"total_work_years": -1}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_record_carries_all_top_level_keys() {
        let value = serde_json::to_value(StructuredResume::default()).unwrap();
        for key in ["basic_info", "education_info", "work_experience", "skills"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value["basic_info"]["name"].is_null());
    }

    #[test]
    fn test_text_fragments_skip_missing_fields() {
        let resume = StructuredResume {
            basic_info: BasicInfo {
                name: Some("张伟".to_string()),
                ..Default::default()
            },
            work_experience: WorkExperience {
                total_work_years: 2,
                work_experiences: vec![WorkEntry {
                    company: "腾讯公司".to_string(),
                    position: "后端工程师".to_string(),
                }],
            },
            skills: vec!["Java".to_string()],
            ..Default::default()
        };
        assert_eq!(
            resume.text_fragments(),
            vec!["张伟", "腾讯公司", "后端工程师", "Java"]
        );
    }
}
