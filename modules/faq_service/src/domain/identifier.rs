//! URL key generation and validation rules

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static NON_URL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9a-z]+").expect("valid URL key pattern"));

#[allow(clippy::expect_used)]
static ONLY_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").expect("valid digits pattern"));

/// Longest URL key the `faq` and `faq_category` tables accept
pub const MAX_IDENTIFIER_LEN: usize = 100;

/// Turns a title into a URL-safe key
pub trait UrlKeyGenerator: Send + Sync {
    fn generate_identifier(&self, title: &str) -> String;
}

/// Lowercases the title and joins its alphanumeric runs with `-`
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugUrlKeyGenerator;

impl UrlKeyGenerator for SlugUrlKeyGenerator {
    fn generate_identifier(&self, title: &str) -> String {
        let lowered = title.trim().to_lowercase();
        let slug = NON_URL_CHARS.replace_all(&lowered, "-");
        let slug = slug.trim_matches('-');
        // The slug is ASCII, so byte truncation stays on a char boundary
        slug[..slug.len().min(MAX_IDENTIFIER_LEN)]
            .trim_end_matches('-')
            .to_string()
    }
}

/// True when the URL key fits a single path segment of a request path
pub fn is_path_safe_identifier(identifier: &str) -> bool {
    !identifier
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
}

/// True when the URL key is made of digits only
pub fn is_numeric_identifier(identifier: &str) -> bool {
    ONLY_DIGITS.is_match(identifier)
}
