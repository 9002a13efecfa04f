//! Path prefixes exempt from blocking.
//!
//! Prefix matching is case-sensitive. The default list protects payment
//! webhooks and static assets from accidental blocking; callers extend it
//! per deployment via `GuardConfig::whitelist`.

/// Paths that are never blocked, regardless of User-Agent.
pub static DEFAULT_ALLOWLIST: &[&str] = &[
    "/api/stripe",
    "/api/webhooks",
    "/_next/static",
    "/_next/image",
    "/static/",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
    "/.well-known/",
];

/// Case-sensitive prefix match over the default allowlist followed by the
/// caller-supplied extras, in that order. First match wins.
pub fn is_allowlisted(path: &str, extra: &[String]) -> bool {
    DEFAULT_ALLOWLIST.iter().any(|w| path.starts_with(w))
        || extra.iter().any(|w| path.starts_with(w.as_str()))
}
