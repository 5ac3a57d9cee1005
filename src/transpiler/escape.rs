//! Character escaping for the output dialects.
//!
//! Only four characters are special: `&`, `<`, `>` and newline. Everything
//! else is written through by the caller unchanged.

use super::Mode;

const LINE_BREAK: &str = "<br />\n";

/// Characters that lose their markup meaning when preceded by a backslash.
const ESCAPABLE: [char; 8] = [' ', '[', ']', '=', '\\', '*', '/', '_'];

/// Map a special character to its representation in `mode`.
///
/// Returns `None` for characters the escaper does not handle.
pub fn escape(ch: char, mode: Mode) -> Option<&'static str> {
    if !is_special(ch) {
        return None;
    }
    if mode == Mode::WordsOnly {
        return Some(" ");
    }
    let escaped = match ch {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        _ => match mode {
            Mode::StripTags => "\n",
            _ => LINE_BREAK,
        },
    };
    Some(escaped)
}

pub fn is_special(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '\n')
}

/// Whether a backslash in front of `ch` is consumed as an escape.
///
/// A backslash before any other character is kept literally.
pub fn is_escapable(ch: char) -> bool {
    ESCAPABLE.contains(&ch)
}
