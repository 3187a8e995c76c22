//! Device-scoped paths.
//!
//! The multi-device console nests the gateway UI under `/device/{id}`.
//! Resolution works on the path with that prefix removed; links rendered
//! inside the scope get it added back.

/// Leading segment of a device-scoped path.
pub const DEVICE_SCOPE_PREFIX: &str = "/device/";

/// Treat an empty path as the root.
pub fn normalize(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Remove the `/device/{device_id}` prefix from `path`.
///
/// The prefix is only removed on a segment boundary, so `/device/42` does
/// not strip `/device/420/devices`. Paths outside the scope are returned
/// unchanged.
pub fn strip_device_scope<'a>(path: &'a str, device_id: &str) -> &'a str {
    if device_id.is_empty() {
        return normalize(path);
    }

    let rest = path
        .strip_prefix(DEVICE_SCOPE_PREFIX)
        .and_then(|p| p.strip_prefix(device_id))
        .filter(|rest| rest.is_empty() || rest.starts_with('/'));

    normalize(rest.unwrap_or(path))
}

/// Split a path into its device id (if scoped) and the remaining path.
pub fn split_device_scope(path: &str) -> (Option<&str>, &str) {
    let Some(scoped) = path.strip_prefix(DEVICE_SCOPE_PREFIX) else {
        return (None, normalize(path));
    };

    let (id, rest) = match scoped.find('/') {
        Some(idx) => scoped.split_at(idx),
        None => (scoped, ""),
    };

    if id.is_empty() {
        (None, normalize(path))
    } else {
        (Some(id), normalize(rest))
    }
}

/// Build a link to `path` inside the scope of `device_id`.
pub fn scoped_path(device_id: Option<&str>, path: &str) -> String {
    match device_id {
        None | Some("") => normalize(path).to_string(),
        Some(id) => match normalize(path) {
            "/" => format!("{DEVICE_SCOPE_PREFIX}{id}"),
            p => format!("{DEVICE_SCOPE_PREFIX}{id}{p}"),
        },
    }
}
