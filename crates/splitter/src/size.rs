//! Size-constrained fallback chunking.
//!
//! Knows nothing about separators: this only exists to bound
//! worst-case span size when the chosen separator produces an
//! oversized unit (one huge paragraph with no internal newlines).
//! Window arithmetic is in characters, never bytes, so multi-byte text
//! cannot split mid-char.

use crate::types::Span;

/// Enforce `max_size` on each span.
///
/// Spans at or under the limit pass through untouched. An oversized
/// span is re-chunked by sliding a window of width `max_size` advanced
/// by `max_size - overlap`; the final window is truncated to the span's
/// natural end, never padded. Windows are emitted verbatim, so adjacent
/// windows share exactly `overlap` characters; a window that is all
/// whitespace is dropped.
///
/// The caller guarantees `max_size > 0` and `overlap < max_size`
/// (configuration validation, never mid-chunk).
pub(crate) fn constrain(spans: Vec<Span>, max_size: usize, overlap: usize) -> Vec<Span> {
    debug_assert!(max_size > 0, "max_size validated upstream");
    debug_assert!(overlap < max_size, "overlap validated upstream");
    let step = max_size - overlap;

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.char_end - span.char_start <= max_size {
            out.push(span);
            continue;
        }

        let chars: Vec<char> = span.content.chars().collect();
        let mut start = 0usize;
        loop {
            let end = (start + max_size).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            if !window.trim().is_empty() {
                out.push(Span {
                    content: window,
                    char_start: span.char_start + start,
                    char_end: span.char_start + end,
                });
            }
            if end == chars.len() {
                break;
            }
            start += step;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(content: &str, char_start: usize) -> Span {
        Span {
            char_end: char_start + content.chars().count(),
            content: content.to_string(),
            char_start,
        }
    }

    #[test]
    fn small_spans_pass_through() {
        let input = vec![span("abc", 0), span("defgh", 5)];
        let out = constrain(input.clone(), 10, 2);
        assert_eq!(out, input);
    }

    #[test]
    fn exact_size_passes_through() {
        let out = constrain(vec![span("0123456789", 0)], 10, 2);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content, "0123456789");
    }

    #[test]
    fn oversized_span_windows_with_overlap() {
        let out = constrain(vec![span("0123456789ABCDEFGHIJ", 0)], 10, 2);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].content, "0123456789");
        assert_eq!(out[1].content, "89ABCDEFGH");
        assert_eq!(out[2].content, "GHIJ");
        assert_eq!(out[0].char_start, 0);
        assert_eq!(out[1].char_start, 8);
        assert_eq!(out[2].char_start, 16);
        assert_eq!(out[2].char_end, 20);
    }

    #[test]
    fn adjacent_windows_share_exactly_overlap_chars() {
        let text: String = ('a'..='z').cycle().take(30).collect();
        let out = constrain(vec![span(&text, 0)], 10, 3);
        for pair in out.windows(2) {
            let prev_tail: String = pair[0].content.chars().rev().take(3).collect();
            let next_head: String = pair[1].content.chars().take(3).collect();
            let prev_tail: String = prev_tail.chars().rev().collect();
            assert_eq!(prev_tail, next_head);
        }
    }

    #[test]
    fn window_offsets_preserve_base_offset() {
        let out = constrain(vec![span("0123456789ABCDEFGHIJ", 100)], 10, 2);
        assert_eq!(out[0].char_start, 100);
        assert_eq!(out[1].char_start, 108);
        assert_eq!(out[2].char_start, 116);
    }

    #[test]
    fn zero_overlap_tiles_without_repeats() {
        let out = constrain(vec![span("0123456789ABCDEF", 0)], 4, 0);
        let joined: String = out.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(joined, "0123456789ABCDEF");
    }

    #[test]
    fn multibyte_windows_count_characters() {
        let text: String = "字".repeat(25);
        let out = constrain(vec![span(&text, 0)], 10, 0);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].content.chars().count(), 10);
        assert_eq!(out[2].content.chars().count(), 5);
    }
}
