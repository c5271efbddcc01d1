// src/reporting/mod.rs
//! Output rendering for scan and rewrite results.

pub mod console;
pub mod diff;
pub mod json;
pub mod rewrite;

pub use console::print_report;
pub use json::print_json;
pub use rewrite::print_rewrites;
