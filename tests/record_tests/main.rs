//! Record decoding tests

#[path = "../common/mod.rs"]
mod common;
