// Résumé-vs-job matching: weighted skill overlap, experience threshold and
// text similarity.

pub mod job_matcher;
pub mod segmenter;
pub mod similarity;
pub mod tables;
