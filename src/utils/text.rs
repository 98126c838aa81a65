//! Cleaning remote text before it reaches the terminal
//!
//! Repository names, descriptions and tags come from the network. Escape
//! sequences embedded in them could move the cursor or recolour the screen,
//! so everything shown in a card or printed by a command passes through
//! [`sanitize_line`].

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strip ANSI CSI/OSC sequences and control characters, folding line breaks and
/// tabs into single spaces so the result fits on one row.
///
/// # Examples
///
/// ```
/// use github_topics::utils::text::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mfast\x1b[0m\nparser"), "fast parser");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pending_space = false;

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                // CSI: ESC [ params final-byte
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() || next == '~' {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... BEL | ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }

        if ch.is_control() {
            continue;
        }

        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }

    out
}

/// Cut to at most `max` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
