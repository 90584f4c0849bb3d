// src/core/sanitize.rs
//
// Lenient coercion of scraped text. Nothing here ever fails; a value that
// does not parse becomes the caller's default.

/// Keep digits and '-' and parse what is left: "1,234 pts" → 1234.
pub fn safe_int(val: &str, default: i64) -> i64 {
    let digits: String = val
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    digits.parse().unwrap_or(default)
}

/// Drop thousands separators and '%' then parse: "45.6%" → 45.6.
pub fn safe_float(val: &str, default: f64) -> f64 {
    val.trim()
        .replace([',', '%'], "")
        .trim()
        .parse()
        .unwrap_or(default)
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-insensitive "needle occurs in haystack", used for name matching.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_int_strips_non_digits() {
        assert_eq!(safe_int("1,234 pts", 0), 1234);
        assert_eq!(safe_int("  -12 ", 0), -12);
        assert_eq!(safe_int("42", 0), 42);
    }

    #[test]
    fn safe_int_falls_back_to_default() {
        assert_eq!(safe_int("", 0), 0);
        assert_eq!(safe_int("n/a", 7), 7);
        assert_eq!(safe_int("-", 3), 3);
        assert_eq!(safe_int("5-3", -1), -1);
    }

    #[test]
    fn safe_float_handles_percent_and_commas() {
        assert_eq!(safe_float("45.6%", 0.0), 45.6);
        assert_eq!(safe_float("1,024.5", 0.0), 1024.5);
        assert_eq!(safe_float(" 3 % ", 0.0), 3.0);
    }

    #[test]
    fn safe_float_falls_back_to_default() {
        assert_eq!(safe_float("", 0.0), 0.0);
        assert_eq!(safe_float("abc", 1.5), 1.5);
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  Josh \n\t Widdicombe "), "Josh Widdicombe");
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Josh Widdicombe", "josh widdicombe"));
        assert!(contains_ci("Dara Ó Briain", "ó briain"));
        assert!(!contains_ci("Rob Beckett", "Josh"));
    }
}
