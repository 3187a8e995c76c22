//! Built-in route tables.
//!
//! `embedded` is the canonical table. `web` is the same gateway UI as it
//! appears inside the multi-device console, where monitoring pages live
//! under Home and alarms/rules form their own Logic section. `cloud` is the
//! central platform.

use crate::config::routes::{ItemConfig, PathPattern, RouteTableConfig, SectionConfig, SectionRule};

fn item(key: &str, label: &str, path: &str, icon: &str) -> ItemConfig {
    ItemConfig {
        key: key.to_string(),
        label: label.to_string(),
        path: path.to_string(),
        prefix: false,
        icon: Some(icon.to_string()),
    }
}

/// Item that also owns every path below its own.
fn prefix_item(key: &str, label: &str, path: &str, icon: &str) -> ItemConfig {
    ItemConfig {
        prefix: true,
        ..item(key, label, path, icon)
    }
}

fn section(key: &str, label: &str, default_path: &str, items: Vec<ItemConfig>) -> SectionConfig {
    SectionConfig {
        key: key.to_string(),
        label: label.to_string(),
        default_path: default_path.to_string(),
        items,
    }
}

fn rule(section: &str, patterns: Vec<PathPattern>) -> SectionRule {
    SectionRule {
        section: section.to_string(),
        patterns,
    }
}

fn exact(p: &str) -> PathPattern {
    PathPattern::Exact(p.to_string())
}

fn prefix(p: &str) -> PathPattern {
    PathPattern::Prefix(p.to_string())
}

fn segment(p: &str) -> PathPattern {
    PathPattern::Segment(p.to_string())
}

/// Paths under `/settings` and `/configuration` that belong to device
/// management. Must precede the generic `/settings` rule.
fn device_carve_outs() -> Vec<PathPattern> {
    vec![
        prefix("/settings/modbus"),
        prefix("/configuration/add-model"),
        prefix("/configuration/add-parameter"),
    ]
}

fn device_items() -> Vec<ItemConfig> {
    vec![
        item("device-list", "Device List", "/devices", "unordered-list"),
        item("model-setting", "Model Setting", "/devices/models", "block"),
        item("parameter-setting", "Parameter Setting", "/devices/parameters", "form"),
        item("modbus-setting", "Source Interface", "/settings/modbus", "cluster"),
        item("add-model", "Add Model", "/configuration/add-model", "block"),
        item("add-device", "Add Sub-Device", "/devices/add", "appstore-add"),
        item("supplement-add-parameter", "Add Parameter", "/configuration/add-parameter", "form"),
    ]
}

fn logic_items() -> Vec<ItemConfig> {
    vec![
        item("alarm-setting", "Alarm Setting", "/alarms", "bell"),
        item("rules-setting", "Rules Setting", "/rules", "control"),
        item("add-rule", "Add Rule", "/configuration/add-rule", "control"),
        item("add-alarm", "Add Alarm", "/configuration/add-alarm", "bell"),
    ]
}

fn logic_patterns() -> Vec<PathPattern> {
    vec![
        prefix("/alarms"),
        prefix("/rules"),
        prefix("/configuration/add-rule"),
        prefix("/configuration/add-alarm"),
    ]
}

fn system_items() -> Vec<ItemConfig> {
    vec![
        item("network-setting", "Network Setting", "/settings/network", "wifi"),
        item("system-setting", "Firmware Settings", "/settings/system", "setting"),
        item("mqtt-setting", "MQTT Setting", "/settings/mqtt", "api"),
        prefix_item("account-setting", "Local Account", "/account", "user"),
    ]
}

pub fn embedded() -> RouteTableConfig {
    let mut monitor_items = vec![
        item("realtime-monitor", "Real-time Monitoring", "/realtime", "dashboard"),
        prefix_item("monitor", "Alarm & Rule Status", "/monitor", "alert"),
    ];
    monitor_items.extend(logic_items());

    let mut monitor_patterns = vec![prefix("/monitor"), prefix("/realtime")];
    monitor_patterns.extend(logic_patterns());

    RouteTableConfig {
        name: "embedded".to_string(),
        home: "home".to_string(),
        breadcrumb_root: None,
        select_first_item: false,
        sections: vec![
            section("home", "Home", "/", vec![item("overview", "Overview", "/", "home")]),
            section(
                "report",
                "Report",
                "/analysis",
                vec![
                    prefix_item("analysis", "Analysis", "/analysis", "line-chart"),
                    prefix_item("log", "Log", "/log", "file-text"),
                ],
            ),
            section("sensor-setting", "Sensor Setting", "/devices", device_items()),
            section("monitor-control", "Monitor & Control", "/monitor", monitor_items),
            section("system", "System Configuration", "/settings/network", system_items()),
        ],
        rules: vec![
            rule("home", vec![exact("/")]),
            rule("sensor-setting", device_carve_outs()),
            rule("report", vec![prefix("/analysis"), prefix("/log")]),
            rule("sensor-setting", vec![segment("/devices")]),
            rule("monitor-control", monitor_patterns),
            rule("system", vec![prefix("/settings"), prefix("/account")]),
        ],
    }
}

pub fn web() -> RouteTableConfig {
    RouteTableConfig {
        name: "web".to_string(),
        home: "home".to_string(),
        breadcrumb_root: Some("T8000 gateway".to_string()),
        select_first_item: false,
        sections: vec![
            section(
                "home",
                "Home",
                "/",
                vec![
                    item("overview", "Overview", "/", "home"),
                    prefix_item("analysis", "Analysis", "/analysis", "line-chart"),
                    prefix_item("log", "Log", "/log", "file-text"),
                    prefix_item("monitor", "Alarm & Rule Status", "/monitor", "alert"),
                ],
            ),
            section("connected", "Connected Sensor", "/devices", device_items()),
            section("logic", "Logic Configuration", "/alarms", logic_items()),
            section("system", "System Configuration", "/settings/network", system_items()),
        ],
        rules: vec![
            rule(
                "home",
                vec![exact("/"), prefix("/analysis"), prefix("/log"), prefix("/monitor")],
            ),
            rule("connected", device_carve_outs()),
            rule("connected", vec![segment("/devices")]),
            rule("logic", logic_patterns()),
            rule("system", vec![prefix("/settings"), prefix("/account")]),
        ],
    }
}

pub fn cloud() -> RouteTableConfig {
    let area = |key: &str, label: &str, items: Vec<ItemConfig>| {
        let default_path = items
            .first()
            .map(|i| i.path.clone())
            .unwrap_or_else(|| format!("/{key}"));
        section(key, label, &default_path, items)
    };

    RouteTableConfig {
        name: "cloud".to_string(),
        home: "home".to_string(),
        breadcrumb_root: Some("Cloud Platform".to_string()),
        select_first_item: true,
        sections: vec![
            area(
                "home",
                "Home",
                vec![prefix_item("home-overview", "Overview", "/home/overview", "dashboard")],
            ),
            area(
                "monitor",
                "Monitor",
                vec![
                    prefix_item("monitor-overview", "Overview", "/monitor/overview", "dashboard"),
                    prefix_item("monitor-realtime", "Sensor Monitoring", "/monitor/realtime", "line-chart"),
                    prefix_item("monitor-alarm-status", "Alarm & Status", "/monitor/alarm-status", "alert"),
                ],
            ),
            area(
                "devices",
                "Devices",
                vec![
                    prefix_item("devices-gateways", "Gateways", "/devices/gateways", "gateway"),
                    prefix_item("devices-inventory", "Device Inventory", "/devices/inventory", "desktop"),
                    prefix_item("devices-models", "Models & Templates", "/devices/models", "block"),
                    prefix_item("devices-parameters", "Parameters Library", "/devices/parameters", "form"),
                    prefix_item("devices-source", "Source Interface", "/devices/source", "cluster"),
                ],
            ),
            area(
                "rules",
                "Rules",
                vec![
                    prefix_item("rules-alarm-center", "Alarm Center", "/rules/alarm-center", "bell"),
                    prefix_item("rules-templates", "Rule Templates", "/rules/templates", "file-text"),
                    prefix_item("rules-mapping", "Local Rules Mapping", "/rules/mapping", "control"),
                ],
            ),
            area(
                "report",
                "Report",
                vec![
                    prefix_item("report-trends", "Trends", "/report/trends", "line-chart"),
                    prefix_item("report-energy", "Energy Report", "/report/energy", "global"),
                    prefix_item("report-comparison", "Site Comparison", "/report/comparison", "appstore"),
                    prefix_item("report-scheduled", "Scheduled Reports", "/report/scheduled", "file-text"),
                ],
            ),
            area(
                "admin",
                "Admin",
                vec![
                    prefix_item("admin-tenant", "Tenant Settings", "/admin/tenant", "setting"),
                    prefix_item("admin-users", "Users & Roles", "/admin/users", "team"),
                    prefix_item("admin-notifications", "Notification Policies", "/admin/notifications", "bell"),
                    prefix_item("admin-audit", "Audit Logs", "/admin/audit", "audit"),
                ],
            ),
        ],
        rules: vec![
            rule("home", vec![exact("/"), prefix("/home")]),
            rule("monitor", vec![prefix("/monitor")]),
            rule("devices", vec![prefix("/devices")]),
            rule("rules", vec![prefix("/rules")]),
            rule("report", vec![prefix("/report")]),
            rule("admin", vec![prefix("/admin")]),
        ],
    }
}
