//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (rules reference existing sections)
//! - Detect duplicate keys and paths in route tables
//! - Validate value ranges (timeouts > 0, URLs parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::routes::RouteTableConfig;
use crate::config::schema::ConsoleConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener bind address is empty")]
    EmptyBindAddress,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("api base url {0:?} is not a valid http(s) url")]
    InvalidBaseUrl(String),

    #[error("route table has no sections")]
    NoSections,

    #[error("section key is empty")]
    EmptySectionKey,

    #[error("duplicate section key {0:?}")]
    DuplicateSection(String),

    #[error("duplicate item key {0:?}")]
    DuplicateItem(String),

    #[error("section {section:?} lists path {path:?} more than once")]
    DuplicateItemPath { section: String, path: String },

    #[error("path {0:?} does not start with '/'")]
    RelativePath(String),

    #[error("rule references unknown section {0:?}")]
    UnknownRuleSection(String),

    #[error("rule for section {0:?} has no patterns")]
    EmptyRule(String),

    #[error("home section {0:?} is not defined")]
    UnknownHome(String),

    #[error("home section {0:?} has no items")]
    EmptyHome(String),
}

/// Validate the whole console configuration.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.api.base_url.clone())),
    }

    if let Some(table) = &config.navigation.table {
        if let Err(table_errors) = validate_route_table(table) {
            errors.extend(table_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a route table before it is compiled.
pub fn validate_route_table(table: &RouteTableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if table.sections.is_empty() {
        errors.push(ValidationError::NoSections);
    }

    let mut section_keys = HashSet::new();
    let mut item_keys = HashSet::new();

    for section in &table.sections {
        if section.key.is_empty() {
            errors.push(ValidationError::EmptySectionKey);
        } else if !section_keys.insert(section.key.as_str()) {
            errors.push(ValidationError::DuplicateSection(section.key.clone()));
        }

        check_path(&section.default_path, &mut errors);

        let mut paths = HashSet::new();
        for item in &section.items {
            if !item_keys.insert(item.key.as_str()) {
                errors.push(ValidationError::DuplicateItem(item.key.clone()));
            }
            check_path(&item.path, &mut errors);
            if !paths.insert(item.path.as_str()) {
                errors.push(ValidationError::DuplicateItemPath {
                    section: section.key.clone(),
                    path: item.path.clone(),
                });
            }
        }
    }

    for rule in &table.rules {
        if !section_keys.contains(rule.section.as_str()) {
            errors.push(ValidationError::UnknownRuleSection(rule.section.clone()));
        }
        if rule.patterns.is_empty() {
            errors.push(ValidationError::EmptyRule(rule.section.clone()));
        }
        for pattern in &rule.patterns {
            check_path(pattern.path(), &mut errors);
        }
    }

    match table.sections.iter().find(|s| s.key == table.home) {
        None => errors.push(ValidationError::UnknownHome(table.home.clone())),
        Some(home) if home.items.is_empty() => {
            errors.push(ValidationError::EmptyHome(table.home.clone()))
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_path(path: &str, errors: &mut Vec<ValidationError>) {
    if !path.starts_with('/') {
        errors.push(ValidationError::RelativePath(path.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::routes::{ItemConfig, PathPattern, SectionConfig, SectionRule};

    fn item(key: &str, path: &str) -> ItemConfig {
        ItemConfig {
            key: key.into(),
            label: key.into(),
            path: path.into(),
            prefix: false,
            icon: None,
        }
    }

    fn table() -> RouteTableConfig {
        RouteTableConfig {
            name: "test".into(),
            home: "home".into(),
            breadcrumb_root: None,
            select_first_item: false,
            sections: vec![
                SectionConfig {
                    key: "home".into(),
                    label: "Home".into(),
                    default_path: "/".into(),
                    items: vec![item("overview", "/")],
                },
                SectionConfig {
                    key: "system".into(),
                    label: "System".into(),
                    default_path: "/settings/network".into(),
                    items: vec![item("network", "/settings/network")],
                },
            ],
            rules: vec![SectionRule {
                section: "system".into(),
                patterns: vec![PathPattern::Prefix("/settings".into())],
            }],
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ConsoleConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_config_errors() {
        let mut config = ConsoleConfig::default();
        config.listener.bind_address = " ".into();
        config.timeouts.request_secs = 0;
        config.api.base_url = "ftp://gateway".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyBindAddress,
                ValidationError::ZeroRequestTimeout,
                ValidationError::InvalidBaseUrl("ftp://gateway".into()),
            ]
        );
    }

    #[test]
    fn test_valid_table() {
        assert_eq!(validate_route_table(&table()), Ok(()));
    }

    #[test]
    fn test_duplicate_path_within_section() {
        let mut t = table();
        t.sections[1].items.push(item("network-2", "/settings/network"));

        let errors = validate_route_table(&t).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateItemPath {
                section: "system".into(),
                path: "/settings/network".into(),
            }]
        );
    }

    #[test]
    fn test_same_path_in_two_sections_is_allowed() {
        let mut t = table();
        t.sections[1].items.push(item("home-link", "/"));
        assert_eq!(validate_route_table(&t), Ok(()));
    }

    #[test]
    fn test_reports_every_table_error() {
        let mut t = table();
        t.home = "dashboard".into();
        t.sections.push(SectionConfig {
            key: "home".into(),
            label: "Again".into(),
            default_path: "settings".into(),
            items: vec![item("overview", "/x")],
        });
        t.rules.push(SectionRule {
            section: "missing".into(),
            patterns: vec![],
        });

        let errors = validate_route_table(&t).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateSection("home".into())));
        assert!(errors.contains(&ValidationError::RelativePath("settings".into())));
        assert!(errors.contains(&ValidationError::DuplicateItem("overview".into())));
        assert!(errors.contains(&ValidationError::UnknownRuleSection("missing".into())));
        assert!(errors.contains(&ValidationError::EmptyRule("missing".into())));
        assert!(errors.contains(&ValidationError::UnknownHome("dashboard".into())));
    }

    #[test]
    fn test_home_without_items() {
        let mut t = table();
        t.sections[0].items.clear();
        assert_eq!(
            validate_route_table(&t),
            Err(vec![ValidationError::EmptyHome("home".into())])
        );
    }
}
