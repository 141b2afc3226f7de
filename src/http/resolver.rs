use std::path::{Component, Path, PathBuf};

/// Outcome of mapping a request path onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// An absolute path known to lie within the server root
    Within(PathBuf),
    /// The normalized path escapes the server root
    OutsideRoot,
}

/// Maps a URL path to a filesystem path constrained to `root`.
///
/// `/` is substituted with `index_file`; for everything else the leading
/// slash is stripped and the rest joined under `root`. `.` and `..`
/// segments are collapsed lexically before the containment check, so the
/// check always runs against the normalized absolute path, never the raw
/// string. No filesystem access happens here; existence is the responder's
/// concern.
pub fn resolve(request_path: &str, root: &Path, index_file: &str) -> Resolved {
    let relative = if request_path == "/" {
        index_file
    } else {
        request_path.trim_start_matches('/')
    };

    let mut normalized = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => normalized.push(segment),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            // Absolute prefixes were stripped above; nothing to do
            Component::RootDir | Component::Prefix(_) => {}
        }
    }

    // Component-wise prefix match: /srv/www never matches /srv/www-other
    if normalized.starts_with(root) {
        Resolved::Within(normalized)
    } else {
        Resolved::OutsideRoot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_resolves_to_index() {
        let resolved = resolve("/", Path::new("/srv/www"), "index.html");
        assert_eq!(resolved, Resolved::Within(PathBuf::from("/srv/www/index.html")));
    }

    #[test]
    fn traversal_is_rejected() {
        let resolved = resolve("/../../etc/passwd", Path::new("/srv/www"), "index.html");
        assert_eq!(resolved, Resolved::OutsideRoot);
    }
}
