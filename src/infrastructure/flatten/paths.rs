//! Reference path arithmetic
//!
//! All paths here are forward-slash strings relative to the project root.

/// References the engine never resolves: remote URLs, data URIs, anchors.
pub fn is_external(href: &str) -> bool {
    let href = href.trim();
    href.is_empty()
        || href.starts_with('#')
        || href.starts_with("//")
        || href.starts_with("data:")
        || href.starts_with("javascript:")
        || href.contains("://")
}

/// Directory part of a root-relative document path.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Resolve `href` against `base_dir`.
///
/// A leading `/` makes the reference root-relative. Query strings and
/// fragments are dropped. Returns `None` when `..` climbs above the root.
pub fn resolve(base_dir: &str, href: &str) -> Option<String> {
    let href = href
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    let joined = if let Some(rooted) = href.strip_prefix('/') {
        rooted.to_string()
    } else if base_dir.is_empty() {
        href.to_string()
    } else {
        format!("{}/{}", base_dir, href)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Path from directory `from_dir` to `target`, both root-relative.
pub fn relative_to(from_dir: &str, target: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = std::iter::repeat("..").take(from.len() - common).collect();
    parts.extend_from_slice(&to[common..]);
    parts.join("/")
}
