/// Decode markdown and collect its heading lines (for metadata; the
/// splitter treats markdown as plain text).
pub(super) fn extract_md(bytes: &[u8]) -> (String, Vec<String>) {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    };

    let headings: Vec<String> = text
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .filter(|heading| !heading.is_empty())
        .collect();

    (text.trim().to_string(), headings)
}
