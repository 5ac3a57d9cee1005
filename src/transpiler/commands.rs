//! Bracket commands and their dispatch.
//!
//! A command is the bare token right after an unescaped `[`. Paired commands
//! open a tag immediately and defer their closer until the matching `]`;
//! argument commands (links, images, code) read their raw argument up to the
//! next `]` and emit everything at once.

use super::escape::escape;
use super::tokens::{read_argument, read_token};
use super::verbatim::copy_until;
use super::{Converter, Mode};
use crate::config::Extensions;

const QUOTE_OPEN: &str = "<blockquote class=\"a4code-quote\">";
const QUOTE_OF_CLOSE: &str = "</div></blockquote>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    Superscript,
    Subscript,
    Spoiler,
    Quote,
    QuoteOf,
    Indent,
    HorizontalRule,
    Link,
    Image,
    Code,
    Unrecognized(String),
}

impl Command {
    /// Resolve a command name. Names match case-insensitively; commands whose
    /// extension is disabled are unrecognized.
    pub fn parse(name: &str, extensions: &Extensions) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "*" | "b" | "bold" => Self::Bold,
            "/" | "i" | "italic" => Self::Italic,
            "_" | "u" | "underline" => Self::Underline,
            "^" | "p" | "power" | "sup" if extensions.superscript => Self::Superscript,
            "." | "s" | "sub" if extensions.subscript => Self::Subscript,
            "spoiler" | "sp" if extensions.spoilers => Self::Spoiler,
            "quote" | "q" if extensions.quotes => Self::Quote,
            "quoteof" if extensions.quotes => Self::QuoteOf,
            "indent" if extensions.indent => Self::Indent,
            "hr" if extensions.horizontal_rules => Self::HorizontalRule,
            "a" | "link" | "url" if extensions.links => Self::Link,
            "img" | "image" if extensions.images => Self::Image,
            "code" if extensions.code => Self::Code,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Open and close tags for commands that wrap the text up to their `]`.
    fn tags(&self) -> Option<(&'static str, &'static str)> {
        let pair = match self {
            Self::Bold => ("<strong>", "</strong>"),
            Self::Italic => ("<i>", "</i>"),
            Self::Underline => ("<u>", "</u>"),
            Self::Superscript => ("<sup>", "</sup>"),
            Self::Subscript => ("<sub>", "</sub>"),
            Self::Spoiler => ("<span class=\"spoiler\">", "</span>"),
            Self::Quote => (QUOTE_OPEN, "</blockquote>"),
            Self::Indent => ("<div class=\"a4code-indent\">", "</div>"),
            _ => return None,
        };
        Some(pair)
    }
}

impl Converter<'_> {
    /// Handle the text following an unescaped `[`.
    pub(super) fn dispatch(&mut self) {
        let name = read_token(&mut self.cursor);
        let command = Command::parse(&name, &self.extensions);
        log::debug!(
            "Command {:?} at byte {} ({:?} mode)",
            command,
            self.cursor.position(),
            self.mode
        );

        // Recognized commands are consumed without a stack entry here.
        if self.mode == Mode::TableOfContents && command.is_recognized() {
            return;
        }

        match command {
            Command::Unrecognized(_) => self.closers.push(""),
            Command::HorizontalRule => {
                if self.mode.emits_markup() {
                    self.out.push_str("<hr />");
                }
                self.closers.push("");
            }
            Command::QuoteOf => self.open_quote_of(),
            Command::Link => self.link(),
            Command::Image => self.image(),
            Command::Code => self.code(),
            paired => {
                if let Some((open, close)) = paired.tags() {
                    self.open(open, close);
                }
            }
        }
    }

    fn open(&mut self, open: &'static str, close: &'static str) {
        if self.mode.emits_markup() {
            self.out.push_str(open);
            self.closers.push(close);
        } else {
            self.closers.push("");
        }
    }

    fn open_quote_of(&mut self) {
        let name = read_argument(&mut self.cursor);
        if !self.mode.emits_markup() {
            self.closers.push("");
            return;
        }
        self.out
            .push_str("<blockquote class=\"a4code-quoteof\"><div class=\"quote-header\">Quote of ");
        push_escaped(&mut self.out, &name, self.mode);
        self.out.push_str(":</div><div class=\"quote-body\">");
        self.closers.push(QUOTE_OF_CLOSE);
    }

    fn link(&mut self) {
        let raw = self.raw_argument();
        let (target, label) = split_argument(&raw);
        let text = if label.is_empty() { target } else { label };

        if !self.mode.emits_markup() {
            self.out.push_str(text);
            return;
        }
        let text = if self.mode == Mode::RenderHtml {
            text.replace('\n', "<br />\n")
        } else {
            text.to_string()
        };
        if self.sanitize_links && !is_safe_url(target) {
            log::warn!("Not linking unsafe target {target:?}");
            self.out.push_str(&text);
            return;
        }

        let href = self.attribute(target);
        self.out.push_str("<a href=\"");
        self.out.push_str(&href);
        self.out.push_str("\" target=\"_blank\">");
        self.out.push_str(&text);
        self.out.push_str("</a>");
    }

    fn image(&mut self) {
        let raw = self.raw_argument();
        let (source, _) = split_argument(&raw);

        if !self.mode.emits_markup() || source.is_empty() {
            return;
        }
        if self.sanitize_links && !is_safe_url(source) {
            log::warn!("Dropping image with unsafe source {source:?}");
            return;
        }

        let src = self.attribute(source);
        self.out.push_str("<img class=\"a4code-image\" src=\"");
        self.out.push_str(&src);
        self.out.push_str("\" />");
    }

    fn code(&mut self) {
        if !self.mode.emits_markup() {
            copy_until(&mut self.cursor, &mut self.out, "]", self.mode);
            return;
        }
        self.out.push_str("<code class=\"a4code-code\">");
        copy_until(&mut self.cursor, &mut self.out, "]", self.mode);
        self.out.push_str("</code>");
    }

    /// Copy a link or image argument. Newlines stay plain so the target can
    /// be split off on whitespace.
    fn raw_argument(&mut self) -> String {
        let mode = match self.mode {
            Mode::RenderHtml => Mode::StripTags,
            other => other,
        };
        let mut raw = String::new();
        copy_until(&mut self.cursor, &mut raw, "]", mode);
        raw
    }

    /// Attribute values only get quotes escaped when links are sanitized;
    /// otherwise the target is written exactly as copied.
    fn attribute(&self, value: &str) -> String {
        if self.sanitize_links {
            value.replace('"', "&quot;")
        } else {
            value.to_string()
        }
    }
}

/// Split a raw argument into its first word and the remainder.
fn split_argument(raw: &str) -> (&str, &str) {
    let raw = raw.trim();
    match raw.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (raw, ""),
    }
}

fn is_safe_url(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

fn push_escaped(out: &mut String, text: &str, mode: Mode) {
    for ch in text.chars() {
        match escape(ch, mode) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Flavor;

    #[test]
    fn classic_recognizes_only_emphasis() {
        let ext = Extensions::for_flavor(Flavor::Classic);
        assert_eq!(Command::parse("b", &ext), Command::Bold);
        assert_eq!(Command::parse("BOLD", &ext), Command::Bold);
        assert_eq!(Command::parse("/", &ext), Command::Italic);
        assert_eq!(Command::parse("Underline", &ext), Command::Underline);
        assert_eq!(
            Command::parse("link", &ext),
            Command::Unrecognized("link".to_string())
        );
        assert_eq!(
            Command::parse("quoteof", &ext),
            Command::Unrecognized("quoteof".to_string())
        );
    }

    #[test]
    fn extended_recognizes_everything() {
        let ext = Extensions::for_flavor(Flavor::Extended);
        assert_eq!(Command::parse("^", &ext), Command::Superscript);
        assert_eq!(Command::parse("sub", &ext), Command::Subscript);
        assert_eq!(Command::parse("sp", &ext), Command::Spoiler);
        assert_eq!(Command::parse("q", &ext), Command::Quote);
        assert_eq!(Command::parse("quoteof", &ext), Command::QuoteOf);
        assert_eq!(Command::parse("indent", &ext), Command::Indent);
        assert_eq!(Command::parse("hr", &ext), Command::HorizontalRule);
        assert_eq!(Command::parse("URL", &ext), Command::Link);
        assert_eq!(Command::parse("img", &ext), Command::Image);
        assert_eq!(Command::parse("code", &ext), Command::Code);
        assert!(!Command::parse("table", &ext).is_recognized());
    }

    #[test]
    fn disabled_extension_is_unrecognized() {
        let mut ext = Extensions::for_flavor(Flavor::Extended);
        ext.links = false;
        assert!(!Command::parse("link", &ext).is_recognized());
        assert!(Command::parse("img", &ext).is_recognized());
    }

    #[test]
    fn split_argument_on_first_whitespace() {
        assert_eq!(split_argument("http://x example text"), ("http://x", "example text"));
        assert_eq!(split_argument("http://x"), ("http://x", ""));
        assert_eq!(split_argument("  http://x   label "), ("http://x", "label"));
        assert_eq!(split_argument(""), ("", ""));
    }

    #[test]
    fn safe_urls() {
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("HTTPS://example.com/a"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("/relative/path"));
        assert!(!is_safe_url("http://"));
    }
}
