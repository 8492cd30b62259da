// Résumé text → StructuredResume.
// PDF reading and cleanup feed the pattern-based extractor; vocabularies are
// injected so tests can swap them.

pub mod cleaner;
pub mod extractor;
pub mod pdf;
pub mod rules;
pub mod vocabulary;
