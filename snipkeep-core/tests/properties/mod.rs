//! Property-based tests for Snipkeep core library

mod extract_tests;
mod options_tests;
mod store_tests;
