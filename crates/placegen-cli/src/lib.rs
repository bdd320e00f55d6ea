//! Placeholder sprite CLI library.
//!
//! Holds the command behind the `generate-placeholder-sprites` binary so it
//! can be driven against a scratch directory in tests.

pub mod commands;
