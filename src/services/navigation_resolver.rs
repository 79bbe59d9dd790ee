//! Turns address-bar text into a URL the engine can load.
//!
//! Rules, first match wins:
//! 1. `http://`, `https://` or `file://` input is used as-is.
//! 2. Input with a `.` and no whitespace is treated as a bare domain and
//!    gets an `https://` prefix.
//! 3. Anything else becomes a search query.

/// Search URL the percent-encoded query is appended to.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";

const KNOWN_SCHEMES: &[&str] = &["http://", "https://", "file://"];

#[derive(Debug, Clone)]
pub struct NavigationResolver {
    search_url: String,
}

impl NavigationResolver {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Resolves raw input. No validation happens beyond the three rules; the
    /// engine reports failures for malformed results on its own.
    pub fn resolve(&self, raw_input: &str) -> String {
        let input = raw_input.trim();

        if has_known_scheme(input) {
            return input.to_string();
        }

        if input.contains('.') && !input.chars().any(char::is_whitespace) {
            return format!("https://{}", input);
        }

        format!("{}{}", self.search_url, urlencoding::encode(input))
    }
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL)
    }
}

fn has_known_scheme(input: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
