//! TUI unit tests module
//!
//! - editing_tests: cursor-aware input editing
//! - input_tests: key mapping and panel commands
//! - render_tests: drawing into a test backend

pub mod render_tests;
