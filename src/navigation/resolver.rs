//! Path resolution.
//!
//! # Responsibilities
//! - Map a pathname to the active section (ordered rules, first match wins)
//! - Map a pathname to the highlighted menu item
//! - Build the breadcrumb label
//!
//! # Design Decisions
//! - Pure: same table and path always give the same result
//! - No error state; unmatched paths fall back to the home section
//! - Device scope is stripped before any matching

use serde::Serialize;

use crate::navigation::scope::{normalize, scoped_path, strip_device_scope};
use crate::navigation::table::{ItemRef, NavItem, RouteTable, Section};

/// Navigation state derived from a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNav {
    /// Active section key.
    pub section: String,
    /// Highlighted item key, if any item owns the path.
    pub item: Option<String>,
    /// "Section / Item" label, optionally prefixed by the table root.
    pub breadcrumb: String,
}

/// One entry of the secondary menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    /// Link target, device-scoped when a device id was given.
    pub path: String,
    pub selected: bool,
}

impl RouteTable {
    /// Resolve section, item and breadcrumb for `path`.
    pub fn resolve(&self, path: &str) -> ResolvedNav {
        let path = normalize(path);
        let section = self.section_index_for(path);
        let item = self.selected_item(path, section);

        ResolvedNav {
            section: self.sections[section].key.clone(),
            item: item.map(|r| self.item(r).key.clone()),
            breadcrumb: self.breadcrumb_for(item),
        }
    }

    /// Resolve a path that may carry a `/device/{id}` prefix.
    pub fn resolve_scoped(&self, path: &str, device_id: Option<&str>) -> ResolvedNav {
        match device_id {
            Some(id) => self.resolve(strip_device_scope(path, id)),
            None => self.resolve(path),
        }
    }

    /// Active section for `path`.
    pub fn resolve_section(&self, path: &str) -> &Section {
        &self.sections[self.section_index_for(normalize(path))]
    }

    /// Highlighted item for `path`.
    pub fn resolve_item(&self, path: &str) -> Option<&NavItem> {
        let path = normalize(path);
        let section = self.section_index_for(path);
        self.selected_item(path, section).map(|r| self.item(r))
    }

    /// Breadcrumb label for `path`.
    pub fn breadcrumb(&self, path: &str) -> String {
        let path = normalize(path);
        let section = self.section_index_for(path);
        self.breadcrumb_for(self.selected_item(path, section))
    }

    /// Menu of the section active at `path`, with the resolved item marked.
    ///
    /// `path` is the unscoped path; `device_id` only affects the link targets.
    pub fn menu(&self, path: &str, device_id: Option<&str>) -> Vec<MenuEntry> {
        let resolved = self.resolve(path);
        let Some(section) = self.section(&resolved.section) else {
            return Vec::new();
        };

        section
            .items
            .iter()
            .map(|item| MenuEntry {
                key: item.key.clone(),
                label: item.label.clone(),
                path: scoped_path(device_id, &item.path),
                selected: resolved.item.as_deref() == Some(item.key.as_str()),
            })
            .collect()
    }

    fn selected_item(&self, path: &str, section: usize) -> Option<ItemRef> {
        self.item_ref_for(path).or_else(|| {
            if self.select_first_item && !self.sections[section].items.is_empty() {
                Some(ItemRef { section, item: 0 })
            } else {
                None
            }
        })
    }

    fn breadcrumb_for(&self, item: Option<ItemRef>) -> String {
        let item = item.unwrap_or(ItemRef {
            section: self.home,
            item: 0,
        });
        let section = &self.sections[item.section];
        let label = section
            .items
            .get(item.item)
            .map(|i| format!("{} / {}", section.label, i.label))
            .unwrap_or_else(|| section.label.clone());

        match &self.breadcrumb_root {
            Some(root) => format!("{root} / {label}"),
            None => label,
        }
    }
}
