//! Test support shared by unit tests and downstream suites (`testing` feature)

pub mod fixtures;
