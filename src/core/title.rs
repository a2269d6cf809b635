//! Human-friendly titles from source file names.
//!
//! `FungibleTokenConnectors.cdc` becomes `Fungible Token`,
//! `EVMNativeFLOWConnectors.cdc` becomes `EVM Native FLOW`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SOURCE_EXTENSION;

/// Acronyms kept intact while splitting camel case.
const ACRONYMS: &[&str] = &[
    "ERC4626", "ERC1155", "ERC721", "ERC20", "EVM", "FLOW", "DeFi", "UFix64", "Fix64", "DEX",
    "NFT", "DAO", "API", "URL", "NAV", "COA", "DFA", "HTTP", "HTTPS", "JSON", "XML", "HTML", "CSS",
];

/// Case-insensitive matchers, longest acronym first so that `HTTPS` is
/// protected before `HTTP` can claim its prefix.
static ACRONYM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut acronyms = ACRONYMS.to_vec();
    acronyms.sort_by_key(|a| std::cmp::Reverse(a.len()));
    acronyms
        .into_iter()
        .map(|a| Regex::new(&format!("(?i){}", regex::escape(a))).expect("valid acronym pattern"))
        .collect()
});

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid pattern"));
static PLACEHOLDER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(__acronym\d+__)([A-Z])").expect("valid pattern"));
static LOWER_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])(__acronym\d+__)").expect("valid pattern"));
static UPPER_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])(__acronym\d+__)").expect("valid pattern"));
static CONNECTOR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Connectors?").expect("valid pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// File name without the source extension.
pub fn strip_extension(file_name: &str) -> &str {
    file_name
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(file_name)
}

/// Format a display title from a file name.
///
/// Never returns an empty string for a non-empty file name: if every word is
/// removed, the bare file name is returned instead.
pub fn format_title(file_name: &str) -> String {
    let stem = strip_extension(file_name);
    let mut title = stem.to_string();

    // (placeholder, first-seen spelling)
    let mut protected: Vec<(String, String)> = Vec::new();
    for pattern in ACRONYM_PATTERNS.iter() {
        let Some(found) = pattern.find(&title) else {
            continue;
        };
        let original = found.as_str().to_string();
        let placeholder = format!("__acronym{}__", protected.len());
        title = pattern
            .replace_all(&title, regex::NoExpand(&placeholder))
            .into_owned();
        protected.push((placeholder, original));
    }

    title = LOWER_UPPER.replace_all(&title, "${1} ${2}").into_owned();
    title = PLACEHOLDER_UPPER.replace_all(&title, "${1} ${2}").into_owned();
    title = LOWER_PLACEHOLDER.replace_all(&title, "${1} ${2}").into_owned();
    title = UPPER_PLACEHOLDER.replace_all(&title, "${1} ${2}").into_owned();

    for (placeholder, original) in &protected {
        title = title.replace(placeholder, original);
    }

    title = CONNECTOR_WORD.replace_all(&title, "").into_owned();
    title = title.replace("Increment Fi", "IncrementFi");
    let title = WHITESPACE.replace_all(&title, " ").trim().to_string();

    if title.is_empty() {
        stem.to_string()
    } else {
        title
    }
}
