use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading question number followed by '.', ')' or '-', e.g. "12. ..."
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+)[.)\-]").unwrap();
}

/// Extracts the leading question number from a question text, e.g. 12 for
/// "12. What is ...?". Surrounding whitespace is ignored. Returns 0 when
/// the text carries no recognizable number, so un-numbered questions sort
/// ahead of numbered ones without disturbing their relative order.
pub fn extract_number(text: &str) -> u64 {
    LEADING_NUMBER
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(0))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_number_dot_delimiter() {
        assert_eq!(extract_number("12. What is the capital of France?"), 12);
    }

    #[test]
    fn test_extract_number_parenthesis_delimiter() {
        assert_eq!(extract_number("3) Name three primary colors"), 3);
    }

    #[test]
    fn test_extract_number_dash_delimiter() {
        assert_eq!(extract_number("7- Define photosynthesis"), 7);
    }

    #[test]
    fn test_extract_number_leading_whitespace() {
        assert_eq!(extract_number("   42. Indented question"), 42);
    }

    #[test]
    fn test_extract_number_no_number() {
        assert_eq!(extract_number("What has no number?"), 0);
    }

    #[test]
    fn test_extract_number_digits_without_delimiter() {
        assert_eq!(extract_number("7 bare digits"), 0);
    }

    #[test]
    fn test_extract_number_number_not_at_start() {
        assert_eq!(extract_number("Question 12. continued"), 0);
    }

    #[test]
    fn test_extract_number_empty_text() {
        assert_eq!(extract_number(""), 0);
        assert_eq!(extract_number("   "), 0);
    }

    #[test]
    fn test_extract_number_overlong_digits() {
        // More digits than u64 can hold falls back to 0
        assert_eq!(extract_number("99999999999999999999999. huge"), 0);
    }

    #[test]
    fn test_extract_number_orders_numerically() {
        let mut questions = vec!["2. B", "10. J", "1. A"];
        questions.sort_by_key(|q| extract_number(q));
        assert_eq!(questions, vec!["1. A", "2. B", "10. J"]);
    }
}
