//! Single-pass conversion of a4code markup.
//!
//! The converter walks the input once. An unescaped `[` hands over to the
//! command dispatcher, which may emit an opening tag and push the text to
//! write at the matching `]`. Closers still pending at end of input are
//! flushed in LIFO order, so unterminated markup never leaves a tag open.
//!
//! Conversion never fails: unknown commands, stray brackets and truncated
//! arguments all degrade to best-effort output.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::{Config, Extensions};

mod commands;
mod cursor;
mod escape;
mod tokens;
mod verbatim;

pub use commands::Command;
pub use escape::escape;

pub(crate) use cursor::Cursor;
pub(crate) use tokens::{read_argument, read_token};

use escape::is_escapable;

/// The output dialect of a conversion.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Inline HTML for direct display in a page
    #[default]
    RenderHtml,
    /// Commands are recognized but produce no tags
    TableOfContents,
    /// HTML with plain newlines instead of `<br />`, for syndication feeds
    StripTags,
    /// Plain words for the search indexer; all markup is suppressed
    WordsOnly,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::RenderHtml,
        Mode::TableOfContents,
        Mode::StripTags,
        Mode::WordsOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::RenderHtml => "render-html",
            Mode::TableOfContents => "table-of-contents",
            Mode::StripTags => "strip-tags",
            Mode::WordsOnly => "words-only",
        }
    }

    /// Whether recognized commands produce tags in this mode.
    pub fn emits_markup(self) -> bool {
        matches!(self, Mode::RenderHtml | Mode::StripTags)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown mode '{}', expected one of: render-html, table-of-contents, strip-tags, words-only",
                    s
                )
            })
    }
}

/// A reusable conversion session.
///
/// ```no_run
/// use a4code::{Mode, Transpiler};
///
/// let mut t = Transpiler::new(Mode::RenderHtml);
/// t.set_input("[b bold]");
/// t.process();
/// assert_eq!(t.output(), "<strong>bold</strong>");
/// ```
#[derive(Debug, Clone)]
pub struct Transpiler {
    mode: Mode,
    extensions: Extensions,
    sanitize_links: bool,
    input: String,
    output: String,
}

impl Transpiler {
    /// A session using the classic command set.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            extensions: Extensions::default(),
            sanitize_links: false,
            input: String::new(),
            output: String::new(),
        }
    }

    pub fn with_config(mode: Mode, config: &Config) -> Self {
        Self {
            extensions: config.extensions,
            sanitize_links: config.sanitize_links,
            ..Self::new(mode)
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Load the text to convert, discarding any previous input and output.
    pub fn set_input(&mut self, text: &str) {
        self.reset();
        self.input.push_str(text);
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Convert the loaded input. The input is consumed.
    pub fn process(&mut self) {
        let input = std::mem::take(&mut self.input);
        let converter = Converter::new(&input, self.mode, self.extensions, self.sanitize_links);
        self.output.push_str(&converter.run());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// Convert `input` with the classic command set.
pub fn convert(input: &str, mode: Mode) -> String {
    Converter::new(input, mode, Extensions::default(), false).run()
}

/// State of one conversion: the cursor, the growing output and the closers
/// of commands whose `]` has not been seen yet.
struct Converter<'a> {
    cursor: Cursor<'a>,
    out: String,
    closers: Vec<&'static str>,
    mode: Mode,
    extensions: Extensions,
    sanitize_links: bool,
}

impl<'a> Converter<'a> {
    fn new(input: &'a str, mode: Mode, extensions: Extensions, sanitize_links: bool) -> Self {
        Self {
            cursor: Cursor::new(input),
            out: String::with_capacity(input.len()),
            closers: Vec::new(),
            mode,
            extensions,
            sanitize_links,
        }
    }

    fn run(mut self) -> String {
        log::trace!(
            "Converting {} bytes in {} mode",
            self.cursor.rest().len(),
            self.mode
        );

        while let Some(ch) = self.cursor.bump() {
            match ch {
                '[' => self.dispatch(),
                ']' => match self.closers.pop() {
                    Some(closer) => self.out.push_str(closer),
                    None => log::trace!("Ignoring stray ']' at byte {}", self.cursor.position()),
                },
                '\\' => self.backslash(),
                _ => match escape(ch, self.mode) {
                    Some(escaped) => self.out.push_str(escaped),
                    None => self.out.push(ch),
                },
            }
        }

        if !self.closers.is_empty() {
            log::debug!("Closing {} unterminated command(s)", self.closers.len());
        }
        while let Some(closer) = self.closers.pop() {
            self.out.push_str(closer);
        }
        self.out
    }

    fn backslash(&mut self) {
        match self.cursor.bump() {
            Some(next) if is_escapable(next) => self.out.push(next),
            Some(next) => {
                self.out.push('\\');
                match escape(next, self.mode) {
                    Some(escaped) => self.out.push_str(escaped),
                    None => self.out.push(next),
                }
            }
            None => self.out.push('\\'),
        }
    }
}
