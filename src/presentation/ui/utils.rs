//! Small rendering helpers shared by the screens.

use unicode_width::UnicodeWidthChar;

/// Truncates `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Pads or truncates `text` to exactly `width` columns.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let truncated = if text.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() > width {
        truncate_to_width(text, width)
    } else {
        text.to_string()
    };
    format!("{truncated:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_fit_pads_to_width() {
        assert_eq!(fit_to_width("ab", 5), "ab   ");
    }
}
