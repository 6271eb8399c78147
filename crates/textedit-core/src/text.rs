/// Drop every `'\r'` from host-supplied text. The buffer only stores LF line breaks.
pub(crate) fn strip_carriage_returns(text: &str) -> String {
    text.chars().filter(|&ch| ch != '\r').collect()
}

/// Split on `'\n'`, keeping trailing empty segments (N newlines => N+1 lines).
pub(crate) fn split_lines_preserve_trailing(text: &str) -> Vec<String> {
    strip_carriage_returns(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// The leading run of spaces and tabs.
pub(crate) fn leading_blanks(text: &str) -> &str {
    let end = text
        .find(|ch: char| ch != ' ' && ch != '\t')
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        assert_eq!(split_lines_preserve_trailing("a\r\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines_preserve_trailing(""), vec![""]);
        assert_eq!(leading_blanks(" \tx y"), " \t");
        assert_eq!(leading_blanks("   "), "   ");
    }
}
