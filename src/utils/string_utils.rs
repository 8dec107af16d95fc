/// Return the 1-based `line` of `source` followed by a caret under `col`.
/// Yields an empty string when the line does not exist.
pub fn format_error_line(source: &str, line: usize, col: usize) -> String {
    if line == 0 {
        return String::new();
    }
    match source.split('\n').nth(line - 1) {
        Some(text) => {
            let text = text.strip_suffix('\r').unwrap_or(text);
            format!("{}\n{}^", text, " ".repeat(col.saturating_sub(1)))
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_error_line;

    #[test]
    fn caret_sits_under_column() {
        let source = "program p;\nbegin x := @ end.";
        assert_eq!(
            format_error_line(source, 2, 12),
            "begin x := @ end.\n           ^"
        );
    }

    #[test]
    fn out_of_range_line_is_empty() {
        assert_eq!(format_error_line("begin end.", 3, 1), "");
        assert_eq!(format_error_line("begin end.", 0, 1), "");
    }
}
