pub mod cache;
pub mod job;
pub mod report;
pub mod resume;
