use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Like `truncate_to_width`, but keeps the end of the string (for paths).
pub fn truncate_start_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut kept: Vec<&str> = Vec::new();
    for grapheme in s.graphemes(true).rev() {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        kept.push(grapheme);
    }
    kept.reverse();
    format!("\u{2026}{}", kept.concat())
}

fn grapheme_display_width(g: &str) -> usize {
    // Tab handling
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii_and_wide() {
        assert_eq!(display_width("main.rs"), 7);
        assert_eq!(display_width("日本.md"), 7);
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate_to_width("lib.rs", 10), "lib.rs");
        assert_eq!(truncate_to_width("lib.rs", 0), "");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("controller.rs", 8), "control\u{2026}");
        assert_eq!(truncate_to_width("controller.rs", 1), "\u{2026}");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        // Each CJK char is 2 cells; budget of 4 after the ellipsis fits two.
        assert_eq!(truncate_to_width("日本語.md", 5), "日本\u{2026}");
    }

    #[test]
    fn truncate_start_keeps_tail() {
        assert_eq!(
            truncate_start_to_width("src/model/mru.rs", 10),
            "\u{2026}el/mru.rs"
        );
        assert_eq!(truncate_start_to_width("mru.rs", 10), "mru.rs");
    }
}
