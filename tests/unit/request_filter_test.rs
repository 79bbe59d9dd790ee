//! Unit tests for the substring-based request filter.

use arkbrowser::services::request_filter::{RequestFilter, DEFAULT_AD_PATTERNS};
use rstest::rstest;

#[rstest]
#[case("https://ads.example.com/x", true)]
#[case("https://example.com/page", false)]
#[case("https://stats.site.org", true)]
#[case("https://WWW.DoubleClick.NET/pixel", true)]
#[case("https://connect.facebook.net/sdk.js", true)]
#[case("https://www.facebook.com/tr?id=1", true)]
#[case("https://www.rust-lang.org/learn", false)]
#[case("", false)]
fn default_filter_cases(#[case] url: &str, #[case] blocked: bool) {
    let filter = RequestFilter::with_defaults();
    assert_eq!(filter.should_block(url), blocked, "url: {url}");
}

#[test]
fn default_filter_holds_every_pattern() {
    let filter = RequestFilter::default();
    assert_eq!(filter.len(), DEFAULT_AD_PATTERNS.len());
}

#[test]
fn custom_patterns_are_lowercased() {
    let filter = RequestFilter::new(["Tracker.Example"]);
    assert!(filter.should_block("https://tracker.example/collect"));
    assert!(!filter.should_block("https://example.com"));
}

#[test]
fn empty_filter_blocks_nothing() {
    let filter = RequestFilter::new(Vec::<String>::new());
    assert!(filter.is_empty());
    assert!(!filter.should_block("https://ads.example.com"));
}
