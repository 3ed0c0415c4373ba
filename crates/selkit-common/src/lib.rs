//! Common utilities for the selkit workspace.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for
//!   surprising-but-legal builder usage

pub mod warning;
