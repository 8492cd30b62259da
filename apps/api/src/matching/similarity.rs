//! TF-IDF cosine similarity over a two-document corpus.
//!
//! The IDF is fitted on exactly the pair being compared, so the vectors are
//! only meaningful for that pair. This is a throwaway comparison, not an
//! index: nothing is retained between calls.

use std::collections::BTreeMap;

/// Cosine similarity of the TF-IDF vectors of `a` and `b`, in [0, 1].
///
/// Raw term counts, smoothed IDF `ln((1 + n) / (1 + df)) + 1` with n = 2,
/// L2-normalized rows. An empty side has no direction and scores 0.0.
pub fn tfidf_cosine(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(a);
    let counts_b = term_counts(b);

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, count_a) in &counts_a {
        let count_b = counts_b.get(term).copied().unwrap_or(0.0);
        let df = if count_b > 0.0 { 2.0 } else { 1.0 };
        let idf = smoothed_idf(df);
        let weight_a = count_a * idf;
        let weight_b = count_b * idf;
        dot += weight_a * weight_b;
        norm_a += weight_a * weight_a;
    }
    for (term, count_b) in &counts_b {
        let df = if counts_a.contains_key(term) { 2.0 } else { 1.0 };
        let weight_b = count_b * smoothed_idf(df);
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

fn term_counts(terms: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

fn smoothed_idf(df: f64) -> f64 {
    const DOCUMENTS: f64 = 2.0;
    ((1.0 + DOCUMENTS) / (1.0 + df)).ln() + 1.0
}
