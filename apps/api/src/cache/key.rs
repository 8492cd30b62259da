use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

/// Content-derived cache key.
///
/// The digest is SHA-256 over the compact JSON of the input with object keys
/// sorted at every level, so equal content gives equal keys regardless of
/// the key order the caller sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticKey {
    pub digest: String,
    /// Canonical form of the input, stored next to durable results.
    pub input: Value,
}

impl SemanticKey {
    pub fn derive(input: &Value) -> Self {
        let canonical = canonicalize(input);
        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        let digest = hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();

        Self {
            digest,
            input: canonical,
        }
    }

    /// Key of a résumé analysis: the résumé input alone.
    pub fn for_analysis(resume_info: &Value) -> Self {
        Self::derive(resume_info)
    }

    /// Key of a match: the `{resume_info, job_description}` pair.
    pub fn for_match(resume_info: &Value, job_description: &Value) -> Self {
        Self::derive(&json!({
            "resume_info": resume_info,
            "job_description": job_description,
        }))
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
