//! Known bad-bot User-Agent patterns.
//!
//! Matching is substring-based and case-insensitive: a pattern appearing
//! anywhere in the User-Agent counts as a hit. The lower-cased form is
//! computed once at startup and shared read-only across all requests.

use std::sync::LazyLock;

/// AI scraper and training-crawler signatures.
pub static BAD_BOTS: &[&str] = &[
    "GPTBot",
    "ChatGPT-User",
    "OAI-SearchBot",
    "CCBot",
    "ClaudeBot",
    "Claude-Web",
    "anthropic-ai",
    "Google-Extended",
    "GoogleOther",
    "Applebot-Extended",
    "FacebookBot",
    "Meta-ExternalAgent",
    "Bytespider",
    "PerplexityBot",
    "Perplexity-User",
    "YouBot",
    "cohere-ai",
    "cohere-training-data-crawler",
    "Diffbot",
    "omgili",
    "Timpibot",
    "Amazonbot",
    "ImagesiftBot",
    "PetalBot",
    "AI2Bot",
    "DuckAssistBot",
];

/// Lower-cased patterns, built once at first use.
static BAD_BOTS_LOWER: LazyLock<Vec<String>> =
    LazyLock::new(|| BAD_BOTS.iter().map(|b| b.to_lowercase()).collect());

/// Returns true if the lower-cased User-Agent contains any denylist pattern.
///
/// An empty User-Agent never matches: the list contains no empty pattern.
pub fn matches_denylist(user_agent_lower: &str) -> bool {
    BAD_BOTS_LOWER
        .iter()
        .any(|b| user_agent_lower.contains(b.as_str()))
}
