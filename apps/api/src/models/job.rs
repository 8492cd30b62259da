use serde::{Deserialize, Serialize};

/// Requirements of a job posting, provided by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub min_work_years: u32,
    pub description: String,
}

impl JobRequirements {
    /// Wraps a free-text posting with no structured requirements.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Required skills followed by the description, used as the job side of
    /// text similarity.
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut fragments: Vec<&str> = self.required_skills.iter().map(String::as_str).collect();
        if !self.description.is_empty() {
            fragments.push(self.description.as_str());
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_required_skills_defaults_to_empty() {
        let job: JobRequirements =
            serde_json::from_value(json!({"min_work_years": 3})).unwrap();
        assert!(job.required_skills.is_empty());
        assert_eq!(job.min_work_years, 3);
        assert_eq!(job.description, "");
    }

    #[test]
    fn test_from_description_leaves_requirements_empty() {
        let job = JobRequirements::from_description("招聘后端工程师");
        assert!(job.required_skills.is_empty());
        assert_eq!(job.min_work_years, 0);
        assert_eq!(job.text_fragments(), vec!["招聘后端工程师"]);
    }
}
