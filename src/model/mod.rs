pub mod classifiers;
pub mod config;
pub mod summary;
