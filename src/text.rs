//! Text helpers - cell padding, centering and word wrapping
//!
//! Widths are terminal display columns, not bytes, so box-drawing
//! characters and wide glyphs line up.

use unicode_width::UnicodeWidthStr;

/// Center `s` within `width` cells; extra space goes on the right
pub fn center(s: &str, width: usize) -> String {
    let len = s.width();
    if len >= width {
        return s.to_string();
    }
    let padding = (width - len) / 2;
    let right_padding = width - len - padding;
    format!("{}{}{}", " ".repeat(padding), s, " ".repeat(right_padding))
}

/// Left-justify `s` in a cell of `width` cells. Never truncates.
pub fn format_cell(s: &str, width: usize) -> String {
    let len = s.width();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - len))
}

/// Greedy word wrap. A word wider than `line_width` gets a line to itself.
pub fn word_wrap(text: &str, line_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width > line_width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if current_width > 0 {
            current_line.push(' ');
            current_width += 1;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center() {
        let s = center("abc", 10);
        assert_eq!(s, "   abc    ");
        assert_eq!(s.len(), 10);

        assert_eq!(center("abcdef", 4), "abcdef");
        assert_eq!(center("ab", 4), " ab ");
    }

    #[test]
    fn test_center_wide_chars() {
        // The rule character is one cell wide but three bytes long
        assert_eq!(center("──", 4), " ── ");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell("x", 5), "x    ");
        assert_eq!(format_cell("", 3), "   ");
        assert_eq!(format_cell("toolong", 3), "toolong");
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(
            word_wrap("Break pane to new window", 10),
            vec!["Break pane", "to new", "window"]
        );
        assert_eq!(word_wrap("Next pane", 23), vec!["Next pane"]);
    }

    #[test]
    fn test_word_wrap_empty() {
        assert!(word_wrap("", 10).is_empty());
        assert!(word_wrap("   \t\n ", 10).is_empty());
    }

    #[test]
    fn test_word_wrap_long_word() {
        assert_eq!(
            word_wrap("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
        // No blank line is emitted ahead of a word that fills or overflows the line
        assert_eq!(word_wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert_eq!(word_wrap("abcde", 5), vec!["abcde"]);
        assert_eq!(word_wrap("abcde fg", 5), vec!["abcde", "fg"]);
    }

    proptest! {
        #[test]
        fn wrapped_lines_respect_width(
            words in proptest::collection::vec("[a-z]{1,12}", 0..20),
            line_width in 1usize..30,
        ) {
            let text = words.join(" ");
            let lines = word_wrap(&text, line_width);

            for line in &lines {
                prop_assert!(!line.is_empty());
                if line.width() > line_width {
                    prop_assert!(!line.contains(' '), "only a single word may overflow: {:?}", line);
                }
            }

            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, original);
        }
    }
}
