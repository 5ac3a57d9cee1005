//! CLI integration tests for a4code.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, words, quote)
//! - Stdin/stdout handling
//! - Configuration discovery
//! - Exit codes

mod common;
mod quote;
mod render;
mod words;
