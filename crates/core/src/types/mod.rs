pub mod config;
pub mod manifest;
pub mod safe_batch;
