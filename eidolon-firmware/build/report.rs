//! Box-drawn error reports for the build script

/// Widest text that fits between the box borders
const BOX_TEXT_WIDTH: usize = 64;

/// Format error message lines with box drawing
///
/// Long lines are cut on a character boundary and end in `...`.
pub fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| format!("║  {:<width$} ║", fit_line(line), width = BOX_TEXT_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fit_line(line: &str) -> String {
    if line.chars().count() <= BOX_TEXT_WIDTH {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(BOX_TEXT_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_are_padded() {
        let report = format_error_lines("bad\nworse");
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("║  bad "));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_long_line_is_cut() {
        let line = "x".repeat(100);
        let fitted = fit_line(&line);

        assert_eq!(fitted.chars().count(), BOX_TEXT_WIDTH);
        assert!(fitted.ends_with("..."));
    }

    #[test]
    fn test_cut_inside_multibyte_char() {
        // Byte 61 falls in the middle of a two-byte character
        let line = format!("{}{}", "a".repeat(60), "é".repeat(20));
        let fitted = fit_line(&line);

        assert_eq!(fitted.chars().count(), BOX_TEXT_WIDTH);
        assert!(fitted.starts_with(&"a".repeat(60)));
        assert!(fitted.ends_with("é..."));
    }
}
