//! Literal-separator splitting with character-offset tracking.

use crate::types::Span;

/// Split `text` on every literal, non-overlapping occurrence of
/// `separator`, returning trimmed, non-empty spans in order.
///
/// Offsets are character positions in `text` and point at the trimmed
/// extent, so `text[span.char_start..span.char_end] == span.content`
/// exactly (in characters). Pieces that trim to nothing are dropped.
/// A separator that never occurs yields the whole text as one span.
///
/// The caller guarantees a non-empty separator; configuration
/// validation rejects the empty string before any splitting runs.
pub(crate) fn split_spans(text: &str, separator: &str) -> Vec<Span> {
    debug_assert!(!separator.is_empty(), "separator validated upstream");

    let chars: Vec<char> = text.chars().collect();
    let sep: Vec<char> = separator.chars().collect();

    // Character ranges of the raw pieces between separator occurrences.
    let mut pieces: Vec<(usize, usize)> = Vec::new();
    let mut piece_start = 0usize;
    let mut i = 0usize;
    while i + sep.len() <= chars.len() {
        if chars[i..i + sep.len()] == sep[..] {
            pieces.push((piece_start, i));
            i += sep.len();
            piece_start = i;
        } else {
            i += 1;
        }
    }
    pieces.push((piece_start, chars.len()));

    pieces
        .into_iter()
        .filter_map(|(start, end)| trim_range(&chars, start, end))
        .collect()
}

/// Shrink a character range past surrounding whitespace; `None` when
/// nothing is left.
fn trim_range(chars: &[char], mut start: usize, mut end: usize) -> Option<Span> {
    while start < end && chars[start].is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if start == end {
        return None;
    }
    Some(Span {
        content: chars[start..end].iter().collect(),
        char_start: start,
        char_end: end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| s.content.as_str()).collect()
    }

    #[test]
    fn splits_on_literal_separator() {
        let spans = split_spans("a\n\nb\n\nc", "\n\n");
        assert_eq!(contents(&spans), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_separator_yields_whole_text() {
        let spans = split_spans("no separators here", "\n\n");
        assert_eq!(contents(&spans), vec!["no separators here"]);
        assert_eq!(spans[0].char_start, 0);
        assert_eq!(spans[0].char_end, 18);
    }

    #[test]
    fn drops_pieces_that_trim_to_nothing() {
        let spans = split_spans("a\n\n   \n\nb", "\n\n");
        assert_eq!(contents(&spans), vec!["a", "b"]);
    }

    #[test]
    fn offsets_point_at_trimmed_extent() {
        let text = "  alpha  \n\n  beta  ";
        let spans = split_spans(text, "\n\n");
        let chars: Vec<char> = text.chars().collect();
        for span in &spans {
            let slice: String = chars[span.char_start..span.char_end].iter().collect();
            assert_eq!(slice, span.content);
        }
        assert_eq!(spans[0].char_start, 2);
        assert_eq!(spans[0].char_end, 7);
    }

    #[test]
    fn offsets_are_character_counts_for_multibyte_text() {
        let text = "第一章\n\n第二章";
        let spans = split_spans(text, "\n\n");
        assert_eq!(spans[0].char_start, 0);
        assert_eq!(spans[0].char_end, 3);
        assert_eq!(spans[1].char_start, 5);
        assert_eq!(spans[1].char_end, 8);
    }

    #[test]
    fn non_overlapping_matching() {
        // "aaa" split on "aa" matches once at the front; the trailing
        // "a" is its own piece.
        let spans = split_spans("aaa", "aa");
        assert_eq!(contents(&spans), vec!["a"]);
    }

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(split_spans("", "\n").is_empty());
        assert!(split_spans("   ", "\n").is_empty());
    }

    #[test]
    fn multichar_unicode_separator() {
        let spans = split_spans("one。two。three", "。");
        assert_eq!(contents(&spans), vec!["one", "two", "three"]);
        assert_eq!(spans[1].char_start, 4);
        assert_eq!(spans[1].char_end, 7);
    }
}
