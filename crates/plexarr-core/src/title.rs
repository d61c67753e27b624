use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shortest `(...)` or `[...]` run, e.g. an embedded `(2021)` or `[US]`
    static ref BRACKETED_REGEX: Regex = Regex::new(r"[(\[].*?[)\]]").unwrap();
}

/// Search term for TMDB: the title with parenthetical and bracketed parts
/// removed. Surrounding whitespace is left as is.
pub fn clean_title(title: &str) -> String {
    BRACKETED_REGEX.replace_all(title, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_year_annotation() {
        assert_eq!(clean_title("Dune (2021)"), "Dune ");
    }

    #[test]
    fn test_strips_brackets() {
        assert_eq!(clean_title("The Office [US]"), "The Office ");
        assert_eq!(clean_title("Doctor Who (2005) [UK]"), "Doctor Who  ");
    }

    #[test]
    fn test_untouched_without_brackets() {
        assert_eq!(clean_title("Severance"), "Severance");
        assert_eq!(clean_title(""), "");
    }

    #[test]
    fn test_mixed_delimiters_match_lazily() {
        // either opener closes on the first closer of either kind
        assert_eq!(clean_title("A (b] c)"), "A  c)");
        assert_eq!(clean_title("Unclosed (paren"), "Unclosed (paren");
    }
}
