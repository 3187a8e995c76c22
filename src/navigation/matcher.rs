//! Path matching logic.
//!
//! # Responsibilities
//! - Match exact paths
//! - Match raw string prefixes
//! - Match whole path segments (`/devices` and `/devices/...`)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - No regex, every check is a string comparison
//! - Matchers are compiled once from [`PathPattern`] and never mutated

use crate::config::routes::PathPattern;

/// Trait for matching paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches the path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches a path and everything nested below it, but not siblings that
/// merely share the prefix (`/devices-old`).
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    base: String,
}

impl SegmentMatcher {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.len() > 1 && base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

impl Matcher for SegmentMatcher {
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.base.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.base == "/",
            None => false,
        }
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        // Any matcher may pass (OR)
        self.matchers.iter().any(|m| m.matches(path))
    }
}

/// Compile a pattern from configuration into a matcher.
pub fn compile(pattern: &PathPattern) -> Box<dyn Matcher> {
    match pattern {
        PathPattern::Exact(p) => Box::new(ExactMatcher::new(p.as_str())),
        PathPattern::Prefix(p) => Box::new(PathPrefixMatcher::new(p.as_str())),
        PathPattern::Segment(p) => Box::new(SegmentMatcher::new(p.as_str())),
    }
}

/// Compile a list of patterns into a single OR matcher.
pub fn compile_any(patterns: &[PathPattern]) -> AnyMatcher {
    AnyMatcher::new(patterns.iter().map(compile).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher::new("/devices/models");
        assert!(matcher.matches("/devices/models"));
        assert!(!matcher.matches("/devices/models/3"));
        assert!(!matcher.matches("/devices"));
    }

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/monitor");

        assert!(matcher.matches("/monitor"));
        assert!(matcher.matches("/monitor/anything/deep"));
        assert!(matcher.matches("/monitoring"));
        assert!(!matcher.matches("/alarms"));
        assert!(!matcher.matches("/Monitor"));
    }

    #[test]
    fn test_segment_matcher() {
        let matcher = SegmentMatcher::new("/devices/");

        assert!(matcher.matches("/devices"));
        assert!(matcher.matches("/devices/add"));
        assert!(!matcher.matches("/devices-old"));
        assert!(!matcher.matches("/device/4"));
    }

    #[test]
    fn test_root_segment_matches_everything() {
        let matcher = SegmentMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/anything"));
    }

    #[test]
    fn test_any_matcher() {
        let matcher = compile_any(&[
            PathPattern::Exact("/".into()),
            PathPattern::Prefix("/analysis".into()),
        ]);

        assert!(matcher.matches("/"));
        assert!(matcher.matches("/analysis/daily"));
        assert!(!matcher.matches("/log"));
        assert!(!AnyMatcher::new(Vec::new()).matches("/"));
    }
}
