// Field cleanup shared by all three source profiles.
use std::sync::OnceLock;

use regex::Regex;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap())
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// First numeric substring formatted to one decimal place, "0.0" when absent.
pub fn clean_rating(raw: &str) -> String {
    number_re()
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|value| format!("{:.1}", value))
        .unwrap_or_else(|| "0.0".to_string())
}

/// First run of digits parsed as a count, 0 when absent or out of range.
pub fn clean_reviews(raw: &str) -> u32 {
    digits_re()
        .find(raw)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Keeps only digits, `+`, `-` and whitespace.
pub fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Absolute URLs pass through, relative links get the source origin prefixed.
pub fn absolutize(href: &str, origin: &str) -> String {
    if href.is_empty() {
        String::new()
    } else if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_takes_first_number_and_formats_one_decimal() {
        assert_eq!(clean_rating("4.2 stars"), "4.2");
        assert_eq!(clean_rating("Rated 4 by users"), "4.0");
        assert_eq!(clean_rating("4.75"), "4.8");
        assert_eq!(clean_rating("no rating yet"), "0.0");
        assert_eq!(clean_rating(""), "0.0");
    }

    #[test]
    fn reviews_take_first_digit_run() {
        assert_eq!(clean_reviews("128 reviews"), 128);
        assert_eq!(clean_reviews("(42)"), 42);
        assert_eq!(clean_reviews("no reviews"), 0);
        // digit run too large for a count
        assert_eq!(clean_reviews("99999999999999 reviews"), 0);
    }

    #[test]
    fn phone_keeps_dial_charset_only() {
        assert_eq!(clean_phone("Call +91 98765-43210 now!"), "+91 98765-43210");
        assert_eq!(clean_phone("(022) 1234 5678"), "022 1234 5678");
    }

    #[test]
    fn links_are_absolutized_against_the_origin() {
        assert_eq!(
            absolutize("/Mumbai/ABC-Electricals", "https://www.justdial.com"),
            "https://www.justdial.com/Mumbai/ABC-Electricals"
        );
        assert_eq!(absolutize("https://abc.example", "https://www.sulekha.com"), "https://abc.example");
        assert_eq!(absolutize("", "https://www.sulekha.com"), "");
    }
}
