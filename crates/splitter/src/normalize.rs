//! Text normalization that never corrupts structural delimiters.
//!
//! Cleans raw extracted text (unicode composition, control characters,
//! whitespace runs) while keeping the newline structure the downstream
//! separators depend on. Idempotent: normalizing twice equals
//! normalizing once.

use unicode_normalization::UnicodeNormalization;

/// Control characters removed outright: C0 except tab/newline, plus DEL.
/// CR is not in the ranges; a CRLF ending loses its CR to line trimming.
fn is_stripped_control(c: char) -> bool {
    matches!(c,
        '\u{0000}'..='\u{0008}'
        | '\u{000B}'
        | '\u{000C}'
        | '\u{000E}'..='\u{001F}'
        | '\u{007F}')
}

/// Normalize raw extracted text.
///
/// Steps, in order:
/// 1. Canonical composition (NFC), never NFKC: compatibility folding
///    rewrites full-width punctuation, and those characters are
///    meaningful separators downstream.
/// 2. Strip control characters, keeping tab and newline.
/// 3. Collapse each run of spaces/tabs to a single space.
/// 4. Trim every line, then cap blank-line runs at one (at most two
///    consecutive newlines survive). Trimming runs first so that
///    whitespace-only lines cannot recreate longer newline runs.
///
/// Total over all strings; the empty string maps to itself.
pub fn normalize(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.nfc() {
        if !is_stripped_control(ch) {
            cleaned.push(ch);
        }
    }

    let mut collapsed = String::with_capacity(cleaned.len());
    let mut in_gap = false;
    for ch in cleaned.chars() {
        if ch == ' ' || ch == '\t' {
            if !in_gap {
                collapsed.push(' ');
            }
            in_gap = true;
        } else {
            collapsed.push(ch);
            in_gap = false;
        }
    }

    let mut out = String::with_capacity(collapsed.len());
    let mut saw_blank = false;
    for line in collapsed.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            saw_blank = true;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if saw_blank { "\n\n" } else { "\n" });
        }
        out.push_str(line);
        saw_blank = false;
    }
    out
}
