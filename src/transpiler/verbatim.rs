//! Verbatim copying of raw command arguments such as link targets.
//!
//! Inside a raw argument brackets carry no meaning, so `[link a[1]]` copies
//! `a[1` and stops at the first `]`.

use super::Mode;
use super::cursor::Cursor;
use super::escape::escape;

/// Copy characters from `cursor` into `out` until the text just written ends
/// with `terminator` (compared case-insensitively).
///
/// The terminator is consumed from the input but trimmed from `out`. Returns
/// `false` when the input ran out first; whatever was copied stays in `out`.
pub fn copy_until(cursor: &mut Cursor, out: &mut String, terminator: &str, mode: Mode) -> bool {
    while let Some(ch) = cursor.bump() {
        match ch {
            '\\' => match cursor.bump() {
                Some(next) => push_raw(out, next, mode),
                None => out.push('\\'),
            },
            '<' | '>' | '&' | '\n' => push_raw(out, ch, mode),
            _ => {
                out.push(ch);
                if trim_suffix_ignore_case(out, terminator) {
                    return true;
                }
            }
        }
    }

    log::debug!("Raw argument ran to end of input looking for {terminator:?}");
    false
}

/// Write `ch` as-is unless it is special, which is always escaped.
fn push_raw(out: &mut String, ch: char, mode: Mode) {
    match ch {
        '<' | '>' | '&' | '\n' => out.push_str(escape(ch, mode).unwrap_or(" ")),
        _ => out.push(ch),
    }
}

fn trim_suffix_ignore_case(out: &mut String, suffix: &str) -> bool {
    let Some(start) = out.len().checked_sub(suffix.len()) else {
        return false;
    };
    if !out.is_char_boundary(start) || !out[start..].eq_ignore_ascii_case(suffix) {
        return false;
    }
    out.truncate(start);
    true
}
