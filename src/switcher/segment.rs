//! Version path segment extraction
//!
//! Recognizes version segments in documentation URLs like:
//! - `/3/` (bare major version)
//! - `/3.6rc2/` (dotted version with optional suffix)
//! - `/dev/`
//! - `/release/2.7/`

use regex::Regex;

/// Acceptable shapes of a version path segment, tried in declared order.
/// The dotted-numeric form must stay ahead of the release form so that a
/// plain dotted segment is never parsed as part of a release path.
const SEGMENT_PATTERNS: [&str; 4] = [
    r"(?:\d)",
    r"(?:\d\.\d[\w\.]*)",
    r"(?:dev)",
    r"(?:release/\d\.\d[\w\.]*)",
];

/// Extracts the version path segment from a URL
pub struct SegmentExtractor {
    segment_re: Regex,
}

impl SegmentExtractor {
    pub fn new() -> Self {
        let alternation = SEGMENT_PATTERNS.join("|");
        // A version segment sits between two slashes; the trailing slash is
        // part of the captured segment, the leading one is not.
        let segment_re = Regex::new(&format!("/((?:{alternation})/)")).unwrap();
        Self { segment_re }
    }

    /// Returns the first version path segment in `url`, including its
    /// trailing slash (e.g. `"3.6/"`), or `None` if no segment matches.
    /// Callers treat `None` as "no substitution possible".
    pub fn extract(&self, url: &str) -> Option<String> {
        self.segment_re
            .captures(url)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for SegmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://docs.example.org/proj/3.6/guide/", Some("3.6/"))]
    #[case("https://docs.example.org/proj/dev/guide/", Some("dev/"))]
    #[case("https://docs.example.org/proj/guide/", None)]
    #[case("https://docs.example.org/proj/3/guide/", Some("3/"))]
    #[case("https://docs.example.org/proj/3.6rc2/guide/", Some("3.6rc2/"))]
    #[case("https://docs.example.org/proj/release/2.7/guide/", Some("release/2.7/"))]
    #[case("https://docs.example.org/lnp/0.12c/usage.html", Some("0.12c/"))]
    fn extract_finds_version_segment(#[case] url: &str, #[case] expected: Option<&str>) {
        let extractor = SegmentExtractor::new();

        assert_eq!(extractor.extract(url), expected.map(str::to_string));
    }

    #[test]
    fn extract_returns_first_segment_when_several_match() {
        let extractor = SegmentExtractor::new();

        let segment = extractor.extract("https://docs.example.org/proj/3.6/archive/2.7/");

        assert_eq!(segment, Some("3.6/".to_string()));
    }

    #[test]
    fn extract_ignores_host_and_port() {
        let extractor = SegmentExtractor::new();

        assert_eq!(extractor.extract("http://127.0.0.1:8000/docs/"), None);
        assert_eq!(
            extractor.extract("http://127.0.0.1:8000/docs/0.13/intro.html"),
            Some("0.13/".to_string())
        );
    }
}
