//! Library surface of the `ringmod` command-line tool.
//!
//! The binary itself only parses arguments and dispatches; the run
//! configuration and the pipeline live here so they can be exercised by
//! tests.

pub mod config;
pub mod pipeline;
