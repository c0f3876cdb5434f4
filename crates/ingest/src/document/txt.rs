/// Decode plain text, falling back to lossy conversion for byte
/// sequences that are not valid UTF-8.
pub(super) fn extract_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim().to_string(),
        Err(_) => String::from_utf8_lossy(bytes).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8() {
        assert_eq!(extract_txt("中文内容 with émojis 🎉".as_bytes()), "中文内容 with émojis 🎉");
    }

    #[test]
    fn lossy_fallback_on_invalid_bytes() {
        let text = extract_txt(&[b'o', b'k', 0xFF, b'!']);
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(extract_txt(b"  \n hello \n  "), "hello");
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract_txt(b""), "");
    }
}
