//! Reading of bare tokens: command names and simple command arguments.

use super::cursor::Cursor;
use super::escape::is_escapable;

/// Read the longest run of characters up to the first unescaped delimiter.
///
/// The delimiter is consumed along with the token, except for `]`, which is
/// left in the input so the scan loop can close the command on it.
pub fn read_token(cursor: &mut Cursor) -> String {
    let mut token = String::new();

    while let Some(ch) = cursor.peek() {
        match ch {
            ']' => break,
            '[' | '\n' | ' ' | '\r' | '=' => {
                cursor.bump();
                break;
            }
            '\\' => {
                cursor.bump();
                match cursor.bump() {
                    Some(next) if is_escapable(next) => token.push(next),
                    Some(next) => {
                        token.push('\\');
                        token.push(next);
                    }
                    None => token.push('\\'),
                }
            }
            _ => {
                token.push(ch);
                cursor.bump();
            }
        }
    }

    token
}

/// Read a command argument that may be wrapped in double quotes.
///
/// A quoted argument runs to the closing unescaped `"`; inside it `\"` and
/// `\\` stand for themselves and one following space is consumed. Anything
/// else is read as a bare token.
pub fn read_argument(cursor: &mut Cursor) -> String {
    if cursor.peek() != Some('"') {
        return read_token(cursor);
    }
    cursor.bump();

    let mut arg = String::new();
    while let Some(ch) = cursor.bump() {
        match ch {
            '"' => {
                if cursor.peek() == Some(' ') {
                    cursor.bump();
                }
                return arg;
            }
            '\\' => match cursor.bump() {
                Some(next @ ('"' | '\\')) => arg.push(next),
                Some(next) => {
                    arg.push('\\');
                    arg.push(next);
                }
                None => arg.push('\\'),
            },
            _ => arg.push(ch),
        }
    }

    log::debug!("Quoted argument ran to end of input");
    arg
}
