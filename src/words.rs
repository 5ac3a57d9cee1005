//! Word extraction for the full-text search index.
//!
//! Markup is first converted in [`Mode::WordsOnly`], which drops every tag
//! and blanks out the HTML-special characters. The remaining text is split
//! into words that are lowercased and de-duplicated before being recorded
//! against the post, comment or article they came from.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::transpiler::{Mode, Transpiler};

/// Split text into runs of letters, digits, apostrophes and hyphens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\'' || ch == '-'
}

/// The distinct lowercase words of a piece of markup, sorted.
pub fn index_words(markup: &str, config: Option<&Config>) -> Vec<String> {
    let mut transpiler = match config {
        Some(config) => Transpiler::with_config(Mode::WordsOnly, config),
        None => Transpiler::new(Mode::WordsOnly),
    };
    transpiler.set_input(markup);
    transpiler.process();

    let words: BTreeSet<String> = split_words(transpiler.output())
        .into_iter()
        .map(str::to_lowercase)
        .collect();
    log::debug!("Extracted {} distinct words", words.len());
    words.into_iter().collect()
}
