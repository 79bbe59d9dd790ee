//! Request Filter for arkbrowser.
//!
//! A coarse ad/tracker blocker: a request is blocked when its lower-cased URL
//! contains any pattern from a fixed set. There are no wildcards, no regexes
//! and no list refresh, so false positives and negatives are expected.

/// Host and path fragments known to serve ads or trackers.
pub const DEFAULT_AD_PATTERNS: &[&str] = &[
    "ads.", "ad.", "banner.", "banners.", "adserv.", "adserver.",
    "advert.", "popup.", "pop-up.", "track.", "tracker.", "tracking.",
    "stats.", "stat.", "analytics.", "metric.", "googleadservices.",
    "googlesyndication.", "doubleclick.", "amazon-adsystem.",
    "facebook.net", "facebook.com/tr", "analytics.google.com",
    "pagead2.", "2mdn.net", "serving-sys.com", "scdn.cxense.com",
    "scorecardresearch.com", "adnxs.com", "taboola.com", "outbrain.com",
];

/// Substring-based allow/block predicate for outgoing requests.
#[derive(Debug, Clone)]
pub struct RequestFilter {
    patterns: Vec<String>,
}

impl RequestFilter {
    /// Builds a filter from a fixed pattern set. Patterns are lower-cased;
    /// empty patterns are dropped since they would match every URL.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        patterns.sort();
        patterns.dedup();
        Self { patterns }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_AD_PATTERNS.iter().copied())
    }

    /// Returns true iff some pattern is a substring of the lower-cased URL.
    pub fn should_block(&self, request_url: &str) -> bool {
        let url = request_url.to_lowercase();
        self.patterns.iter().any(|pattern| url.contains(pattern.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
