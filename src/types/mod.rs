pub mod config;
pub mod listing;
pub mod report;
pub mod scoring;
