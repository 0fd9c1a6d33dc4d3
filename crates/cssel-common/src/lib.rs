//! Common utilities for the cssel selector parser.
//!
//! This crate provides shared infrastructure used by the parser and the CLI:
//! - **Warning System** - colored terminal output for lenient parses

pub mod warning;
