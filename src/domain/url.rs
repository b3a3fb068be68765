/// Join `base` and `path` into a single URL.
///
/// `path` always ends up with exactly one leading `/`. An empty `base` yields
/// the bare path (a relative URL); otherwise every trailing `/` is stripped
/// from `base` before concatenation. Never fails.
pub fn compose_url(base: &str, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if base.is_empty() {
        return path;
    }

    format!("{}{}", base.trim_end_matches('/'), path)
}

/// True when `url` carries no scheme and must be resolved against an origin.
pub fn is_relative_url(url: &str) -> bool {
    let has_scheme = |scheme: &str| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    };
    !(has_scheme("http://") || has_scheme("https://"))
}

/// Resolve a possibly relative `url` against `origin`.
pub fn resolve_url(origin: &str, url: &str) -> String {
    if is_relative_url(url) {
        compose_url(origin, url)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_returns_path() {
        assert_eq!(compose_url("", "/api/chat"), "/api/chat");
    }

    #[test]
    fn missing_leading_slash_is_added() {
        assert_eq!(compose_url("http://h", "api/chat"), "http://h/api/chat");
        assert_eq!(compose_url("", "api/chat"), "/api/chat");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(compose_url("http://h/", "/api/chat"), "http://h/api/chat");
        assert_eq!(compose_url("http://h///", "/x"), "http://h/x");
    }

    #[test]
    fn normalized_inputs_concatenate_unchanged() {
        let cases = [
            ("http://localhost:8000", "/api/chat"),
            ("https://d33-oss.example.com/prefix", "/healthz"),
            ("x", "/y"),
        ];
        for (base, path) in cases {
            assert_eq!(compose_url(base, path), format!("{base}{path}"));
        }
    }

    #[test]
    fn recomposing_against_empty_base_is_stable() {
        for path in ["api/chat", "/api/chat", "//api/chat"] {
            let once = compose_url("", path);
            assert_eq!(compose_url("", &once), once);
        }
        let absolute = compose_url("http://h//", "api/chat");
        assert_eq!(compose_url(&absolute, ""), format!("{absolute}/"));
    }

    #[test]
    fn slash_only_base_collapses() {
        assert_eq!(compose_url("/", "/api/chat"), "/api/chat");
    }

    #[test]
    fn relative_detection() {
        assert!(is_relative_url("/api/chat"));
        assert!(!is_relative_url("http://h/api/chat"));
        assert!(!is_relative_url("https://h/api/chat"));
        assert!(!is_relative_url("HTTP://h/api/chat"));
        assert!(!is_relative_url("Https://h"));
        assert!(is_relative_url("ht"));
    }

    #[test]
    fn resolves_relative_urls_only() {
        assert_eq!(resolve_url("http://o:8000/", "/api/chat"), "http://o:8000/api/chat");
        assert_eq!(resolve_url("http://o", "https://h/x"), "https://h/x");
        assert_eq!(resolve_url("http://o", "HTTP://h/x"), "HTTP://h/x");
    }
}
