//! Reply quoting: wrap another user's text in `[quoteof "name" ...]` markup.
//!
//! In paragraph mode each blank-line separated block is quoted on its own,
//! and blocks that are nothing but a quote of a quote are dropped.

use crate::transpiler::{Cursor, read_argument, read_token};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteOptions {
    /// Quote each paragraph separately
    pub paragraphs: bool,
    /// Trim surrounding whitespace from the quoted text
    pub trim: bool,
}

/// Wrap `text` in quote markup attributed to `username`.
///
/// ```rust
/// use a4code::{QuoteOptions, quote_text};
///
/// let reply = quote_text("bob", "hello", QuoteOptions::default());
/// assert_eq!(reply, "[quoteof \"bob\" hello]\n");
/// ```
pub fn quote_text(username: &str, text: &str, options: QuoteOptions) -> String {
    if options.paragraphs {
        quote_paragraphs(username, text, options.trim)
    } else {
        quote_of(username, text, options.trim)
    }
}

fn quote_of(username: &str, text: &str, trim: bool) -> String {
    let text = if trim { text.trim() } else { text };
    format!("[quoteof \"{}\" {}]\n", escape_username(username), text)
}

fn escape_username(username: &str) -> String {
    let mut escaped = String::with_capacity(username.len());
    for ch in username.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Split on blank lines outside brackets and quote each kept block.
///
/// Within a block, runs of newlines collapse to one. `\[` and `\]` become
/// plain brackets that do not count towards nesting; other backslashes are
/// dropped.
fn quote_paragraphs(username: &str, text: &str, trim: bool) -> String {
    let text = if trim { text.trim() } else { text };
    let mut quoted = String::new();
    let mut block = String::new();
    let mut depth: i32 = 0;
    let mut newlines = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => {
                if depth <= 0 && newlines == 1 {
                    if keep_block(&block) {
                        quoted.push_str(&quote_of(username, &block, trim));
                        quoted.push_str("\n\n\n");
                    }
                    block.clear();
                }
                newlines += 1;
                continue;
            }
            '\r' => continue,
            _ => {}
        }

        if newlines != 0 {
            if !block.is_empty() {
                block.push('\n');
            }
            newlines = 0;
        }

        match ch {
            '[' => {
                depth += 1;
                block.push(ch);
            }
            ']' => {
                depth -= 1;
                block.push(ch);
            }
            '\\' => {
                if let Some(&(bracket @ ('[' | ']'))) = chars.peek() {
                    block.push(bracket);
                    chars.next();
                }
            }
            _ => block.push(ch),
        }
    }

    if keep_block(&block) {
        quoted.push_str(&quote_of(username, &block, trim));
    }
    log::debug!("Quoted {} bytes for {username:?}", text.len());
    quoted
}

/// Blank blocks and blocks that only quote other quotes are left out.
fn keep_block(block: &str) -> bool {
    let block = block.trim();
    if block.is_empty() {
        return false;
    }
    match quote_of_body(block) {
        Some(body) => !only_quotes(body),
        None => true,
    }
}

/// The body of a block that is exactly one `[quoteof ...]` command.
fn quote_of_body(block: &str) -> Option<&str> {
    if !starts_with_quote_of(block) || !closes_at_end(block) {
        return None;
    }
    let mut cursor = Cursor::new(&block[1..]);
    if !read_token(&mut cursor).eq_ignore_ascii_case("quoteof") {
        return None;
    }
    read_argument(&mut cursor);
    cursor.rest().strip_suffix(']')
}

fn starts_with_quote_of(s: &str) -> bool {
    s.get(..8)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("[quoteof"))
}

/// Whether the bracket opened by the first character closes on the last one.
fn closes_at_end(s: &str) -> bool {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == s.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// True when `body` holds at least one `[quoteof ...]` and nothing else but
/// whitespace.
fn only_quotes(body: &str) -> bool {
    let mut depth = 0usize;
    let mut quotes = 0;
    let mut chars = body.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
                if depth == 0 {
                    return false;
                }
            }
            '[' => {
                if depth == 0 {
                    if !starts_with_quote_of(&body[i..]) {
                        return false;
                    }
                    quotes += 1;
                }
                depth += 1;
            }
            ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => return false,
            _ => {}
        }
    }

    quotes > 0
}
