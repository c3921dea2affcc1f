/// Joins `path_or_url` onto `base`, unless it is already an absolute http(s) URL.
///
/// One trailing slash is dropped from `base` and a missing leading slash on the path is added.
pub fn resolve_url(base: &str, path_or_url: &str) -> String {
    if is_absolute_http(path_or_url) {
        return path_or_url.to_string();
    }

    let base = base.strip_suffix('/').unwrap_or(base);
    if path_or_url.starts_with('/') {
        format!("{base}{path_or_url}")
    } else {
        format!("{base}/{path_or_url}")
    }
}

fn is_absolute_http(path: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        path.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
