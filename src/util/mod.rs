//! Auxiliary path and test-fixture utilities
pub mod path_helpers;
pub mod test;
