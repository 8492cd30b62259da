// Résumé scoring: sub-score calculators and the weighted comprehensive score.

pub mod calculators;
pub mod resume_scorer;
pub mod tables;
