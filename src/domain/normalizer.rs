//! Domain extraction from backlink source URLs.
//!
//! Normalization is shallow and purely syntactic: the authority component is
//! taken as written (case, port and subdomains preserved) and only a leading
//! `www.` is removed. No TLD or reachability checks are made.

const DEFAULT_SCHEME: &str = "http://";
const WWW_PREFIX: &str = "www.";

/// Extracts the canonical domain of a source URL.
///
/// # Rules
///
/// 1. `None`, empty and whitespace-only input yields `None`
/// 2. Input without an `http://` or `https://` prefix is treated as `http://`
/// 3. The authority (everything between `//` and the first `/`, `?` or `#`) is kept
/// 4. A leading `www.` is stripped once
///
/// Unparseable input (unbalanced IPv6 brackets, empty authority) yields
/// `None` rather than an error, so a single bad row never aborts a merge.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_domain(Some("https://www.Example.com/path")), Some("Example.com".into()));
/// assert_eq!(normalize_domain(Some("example.com")), Some("example.com".into()));
/// assert_eq!(normalize_domain(None), None);
/// ```
pub fn normalize_domain(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    if url.is_empty() {
        return None;
    }

    let with_scheme;
    let url = if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        with_scheme = format!("{DEFAULT_SCHEME}{url}");
        with_scheme.as_str()
    };

    let authority = authority(url)?;
    let domain = authority.strip_prefix(WWW_PREFIX).unwrap_or(authority);

    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Authority component of an absolute `scheme://...` URL.
fn authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    if authority.contains('[') != authority.contains(']') {
        return None;
    }

    Some(authority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_scheme_path_and_www() {
        assert_eq!(
            normalize_domain(Some("https://www.Example.com/path")),
            Some("Example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(
            normalize_domain(Some("example.com")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_bare_host_with_path() {
        assert_eq!(
            normalize_domain(Some("example.com/page?x=1")),
            normalize_domain(Some("http://example.com/page?x=1"))
        );
    }

    #[test]
    fn test_normalize_none_and_empty() {
        assert_eq!(normalize_domain(None), None);
        assert_eq!(normalize_domain(Some("")), None);
        assert_eq!(normalize_domain(Some("   ")), None);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_domain(Some("  http://a.com/x \n")),
            Some("a.com".to_string())
        );
    }

    #[test]
    fn test_normalize_keeps_port_and_subdomains() {
        assert_eq!(
            normalize_domain(Some("http://blog.a.com:8080/post")),
            Some("blog.a.com:8080".to_string())
        );
    }

    #[test]
    fn test_normalize_strips_www_only_once() {
        assert_eq!(
            normalize_domain(Some("http://www.www.a.com")),
            Some("www.a.com".to_string())
        );
        assert_eq!(
            normalize_domain(Some("http://WWW.a.com")),
            Some("WWW.a.com".to_string())
        );
    }

    #[test]
    fn test_normalize_stops_at_query_and_fragment() {
        assert_eq!(
            normalize_domain(Some("https://a.com?ref=1")),
            Some("a.com".to_string())
        );
        assert_eq!(
            normalize_domain(Some("https://a.com#top")),
            Some("a.com".to_string())
        );
    }

    #[test]
    fn test_normalize_malformed_is_lenient() {
        assert_eq!(normalize_domain(Some("http://[::1/path")), None);
        assert_eq!(normalize_domain(Some("http:///path")), None);
        assert_eq!(normalize_domain(Some("https://")), None);
    }

    #[test]
    fn test_normalize_ipv6_authority() {
        assert_eq!(
            normalize_domain(Some("http://[::1]:8080/x")),
            Some("[::1]:8080".to_string())
        );
    }
}
