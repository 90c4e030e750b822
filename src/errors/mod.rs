//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - The two lexical error kinds and the `Error` wrapper carrying their line
//! - Error names and suggestions used by diagnostic rendering
//! - The `ErrorReporter` seam the scanner reports through

pub mod errors;
