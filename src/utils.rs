use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Formats whole seconds as `H:MM:SS`, dropping any fraction.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Cuts `s` to at most `max_width` display columns, ending in "..." when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0:00:00");
        assert_eq!(format_duration(Duration::from_secs(30)), "0:00:30");
        assert_eq!(format_duration(Duration::from_millis(29_900)), "0:00:29");
        assert_eq!(format_duration(Duration::from_secs(125)), "0:02:05");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 61)), "3:01:01");
    }

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("Exactly twenty!!!!!!", 20), "Exactly twenty!!!!!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        // "2³" must not be split mid-character
        let result = truncate_string("2 ** 3 = 2³ = 8, exponentiation", 14);
        assert_eq!(result, "2 ** 3 = 2³...");
    }
}
