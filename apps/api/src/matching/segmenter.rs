//! Word segmentation for mixed Chinese/English text.

use std::collections::HashSet;

use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use regex::Regex;

// Dictionary load is the expensive part; the segmenter itself is immutable.
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

// Terms of two or more word characters.
static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\w+").unwrap());

#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    stopwords: HashSet<String>,
}

impl Segmenter {
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }

    /// Splits `text` into lowercase terms: jieba word boundaries (HMM on for
    /// unknown words), then terms of at least two word characters, minus
    /// stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for word in JIEBA.cut(text, true) {
            let lowered = word.to_lowercase();
            for term in TERM_RE.find_iter(&lowered) {
                let term = term.as_str();
                if !self.stopwords.contains(term) {
                    terms.push(term.to_string());
                }
            }
        }
        terms
    }
}
