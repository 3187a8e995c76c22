//! Compiled route table.
//!
//! # Responsibilities
//! - Compile a [`RouteTableConfig`] into matchers and lookup maps
//! - Own the section and item definitions used by renderers
//! - Provide the built-in tables for each UI variant
//!
//! # Design Decisions
//! - Tables are compiled once and immutable afterwards (shared via Arc)
//! - Exact item paths live in a HashMap; prefix items are scanned in order
//! - When two sections list the same path, the first one owns it

use std::collections::HashMap;

use serde::Serialize;

use crate::config::routes::{RouteTableConfig, SectionConfig};
use crate::config::schema::NavVariant;
use crate::config::validation::{validate_route_table, ValidationError};
use crate::navigation::matcher::{compile_any, AnyMatcher, Matcher, PathPrefixMatcher};
use crate::navigation::presets;

/// A leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A top-level navigation grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: String,
    pub label: String,
    pub default_path: String,
    pub items: Vec<NavItem>,
}

/// Position of an item inside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemRef {
    pub section: usize,
    pub item: usize,
}

/// Immutable, compiled navigation table.
#[derive(Debug)]
pub struct RouteTable {
    name: String,
    pub(crate) sections: Vec<Section>,
    pub(crate) rules: Vec<(AnyMatcher, usize)>,
    pub(crate) exact_items: HashMap<String, ItemRef>,
    pub(crate) prefix_items: Vec<(PathPrefixMatcher, ItemRef)>,
    pub(crate) home: usize,
    pub(crate) breadcrumb_root: Option<String>,
    pub(crate) select_first_item: bool,
}

impl RouteTable {
    /// Validate and compile a table from configuration.
    pub fn from_config(config: &RouteTableConfig) -> Result<Self, Vec<ValidationError>> {
        validate_route_table(config)?;
        Ok(Self::build(config))
    }

    /// Canonical table of the gateway UI.
    pub fn embedded() -> Self {
        Self::build(&presets::embedded())
    }

    /// Gateway UI nested in the multi-device console.
    pub fn web() -> Self {
        Self::build(&presets::web())
    }

    /// Cloud platform table.
    pub fn cloud() -> Self {
        Self::build(&presets::cloud())
    }

    /// Built-in table for a variant.
    pub fn for_variant(variant: NavVariant) -> Self {
        match variant {
            NavVariant::Embedded => Self::embedded(),
            NavVariant::Web => Self::web(),
            NavVariant::Cloud => Self::cloud(),
        }
    }

    /// Compile without validation. Callers guarantee the config is valid.
    pub(crate) fn build(config: &RouteTableConfig) -> Self {
        let sections: Vec<Section> = config.sections.iter().map(convert_section).collect();
        let index: HashMap<&str, usize> = sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.as_str(), i))
            .collect();

        let rules = config
            .rules
            .iter()
            .filter_map(|rule| {
                let section = *index.get(rule.section.as_str())?;
                Some((compile_any(&rule.patterns), section))
            })
            .collect();

        let mut exact_items = HashMap::new();
        let mut prefix_items = Vec::new();
        for (s, section) in config.sections.iter().enumerate() {
            for (i, item) in section.items.iter().enumerate() {
                let item_ref = ItemRef { section: s, item: i };
                exact_items.entry(item.path.clone()).or_insert(item_ref);
                if item.prefix {
                    prefix_items.push((PathPrefixMatcher::new(item.path.as_str()), item_ref));
                }
            }
        }

        let home = index.get(config.home.as_str()).copied();
        debug_assert!(home.is_some(), "home section {:?} is not defined", config.home);
        let home = home.unwrap_or(0);

        Self {
            name: config.name.clone(),
            sections,
            rules,
            exact_items,
            prefix_items,
            home,
            breadcrumb_root: config.breadcrumb_root.clone(),
            select_first_item: config.select_first_item,
        }
    }

    /// Table name for logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by key.
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// The section unmatched paths fall back to.
    pub fn home(&self) -> &Section {
        &self.sections[self.home]
    }

    pub(crate) fn section_index_for(&self, path: &str) -> usize {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(path))
            .map(|(_, section)| *section)
            .unwrap_or(self.home)
    }

    pub(crate) fn item_ref_for(&self, path: &str) -> Option<ItemRef> {
        self.exact_items.get(path).copied().or_else(|| {
            self.prefix_items
                .iter()
                .find(|(matcher, _)| matcher.matches(path))
                .map(|(_, item_ref)| *item_ref)
        })
    }

    pub(crate) fn item(&self, item_ref: ItemRef) -> &NavItem {
        &self.sections[item_ref.section].items[item_ref.item]
    }
}

fn convert_section(section: &SectionConfig) -> Section {
    Section {
        key: section.key.clone(),
        label: section.label.clone(),
        default_path: section.default_path.clone(),
        items: section
            .items
            .iter()
            .map(|item| NavItem {
                key: item.key.clone(),
                label: item.label.clone(),
                path: item.path.clone(),
                icon: item.icon.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::routes::{ItemConfig, PathPattern, SectionRule};

    #[test]
    fn test_presets_are_valid() {
        for config in [presets::embedded(), presets::web(), presets::cloud()] {
            assert_eq!(validate_route_table(&config), Ok(()), "table {}", config.name);
        }
    }

    #[test]
    fn test_embedded_sections_in_order() {
        let table = RouteTable::embedded();
        let keys: Vec<&str> = table.sections().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            ["home", "report", "sensor-setting", "monitor-control", "system"]
        );
        assert_eq!(table.home().key, "home");
        assert_eq!(table.section("system").unwrap().default_path, "/settings/network");
        assert!(table.section("logic").is_none());
    }

    #[test]
    fn test_for_variant() {
        assert_eq!(RouteTable::for_variant(NavVariant::Embedded).name(), "embedded");
        assert_eq!(RouteTable::for_variant(NavVariant::Web).name(), "web");
        assert_eq!(RouteTable::for_variant(NavVariant::Cloud).name(), "cloud");
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = presets::embedded();
        config.rules.push(SectionRule {
            section: "nowhere".into(),
            patterns: vec![PathPattern::Prefix("/x".into())],
        });

        let errors = RouteTable::from_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::UnknownRuleSection("nowhere".into())]);
    }

    #[test]
    fn test_first_section_owns_shared_path() {
        let mut config = presets::embedded();
        config.sections[4].items.push(ItemConfig {
            key: "system-home".into(),
            label: "Back".into(),
            path: "/".into(),
            prefix: false,
            icon: None,
        });

        let table = RouteTable::from_config(&config).unwrap();
        let item_ref = table.item_ref_for("/").unwrap();
        assert_eq!(table.item(item_ref).key, "overview");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "home section \"dashboard\" is not defined")]
    fn test_build_asserts_home_exists() {
        let mut config = presets::embedded();
        config.home = "dashboard".into();
        RouteTable::build(&config);
    }
}
