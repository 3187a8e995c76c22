//! Route table definitions.
//!
//! These are the serializable building blocks of a navigation table. They
//! are compiled into an immutable [`crate::navigation::RouteTable`] before
//! use; nothing here performs matching.

use serde::{Deserialize, Serialize};

/// A single path condition.
///
/// In TOML: `{ exact = "/" }`, `{ prefix = "/monitor" }`,
/// `{ segment = "/devices" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPattern {
    /// Path equals the value.
    Exact(String),
    /// Path starts with the value (raw string prefix).
    Prefix(String),
    /// Path equals the value or starts with the value followed by `/`.
    Segment(String),
}

impl PathPattern {
    /// The path literal this pattern is built from.
    pub fn path(&self) -> &str {
        match self {
            PathPattern::Exact(p) | PathPattern::Prefix(p) | PathPattern::Segment(p) => p,
        }
    }
}

/// A leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemConfig {
    /// Key used for menu highlighting.
    pub key: String,

    /// Display label, used in menus and breadcrumbs.
    pub label: String,

    /// Path the item links to.
    pub path: String,

    /// When true the item also owns every path starting with `path`.
    #[serde(default)]
    pub prefix: bool,

    /// Icon name for renderers. Not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A top-level navigation grouping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Unique section key.
    pub key: String,

    /// Display label.
    pub label: String,

    /// Path the top navigation links to.
    pub default_path: String,

    /// Ordered child items.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Assigns paths matching any of `patterns` to `section`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionRule {
    pub section: String,
    pub patterns: Vec<PathPattern>,
}

/// A complete navigation table.
///
/// `rules` are evaluated in order and the first match wins, so carve-outs
/// must be listed before the broader prefix rule they override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteTableConfig {
    /// Table name for logging.
    #[serde(default = "default_table_name")]
    pub name: String,

    /// Section used for unmatched paths and the breadcrumb fallback.
    pub home: String,

    /// Prepended to every breadcrumb (e.g. "Cloud Platform").
    #[serde(default)]
    pub breadcrumb_root: Option<String>,

    /// Highlight the section's first item when no item matches.
    #[serde(default)]
    pub select_first_item: bool,

    /// Ordered sections.
    pub sections: Vec<SectionConfig>,

    /// Ordered section rules.
    #[serde(default)]
    pub rules: Vec<SectionRule>,
}

fn default_table_name() -> String {
    "custom".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_toml() {
        let table: RouteTableConfig = toml::from_str(
            r#"
            home = "home"

            [[sections]]
            key = "home"
            label = "Home"
            default_path = "/"
            items = [{ key = "overview", label = "Overview", path = "/" }]

            [[sections]]
            key = "logs"
            label = "Logs"
            default_path = "/log"
            items = [{ key = "log", label = "Log", path = "/log", prefix = true }]

            [[rules]]
            section = "home"
            patterns = [{ exact = "/" }]

            [[rules]]
            section = "logs"
            patterns = [{ prefix = "/log" }, { segment = "/events" }]
            "#,
        )
        .unwrap();

        assert_eq!(table.name, "custom");
        assert!(!table.select_first_item);
        assert_eq!(table.sections.len(), 2);
        assert!(table.sections[1].items[0].prefix);
        assert_eq!(
            table.rules[1].patterns,
            vec![
                PathPattern::Prefix("/log".into()),
                PathPattern::Segment("/events".into()),
            ]
        );
    }
}
