//! LineReader tests.

mod lifecycle_tests;
mod number_tests;
