//! Classifier, output and extraction tests

#[path = "../common/mod.rs"]
mod common;

mod database_tests;
mod extractor_tests;
