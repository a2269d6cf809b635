//! Heuristic metadata extraction from Cadence source text.
//!
//! There is no grammar here. The extractor runs an ordered fallback chain of
//! line-oriented text heuristics over the documentation comments that
//! usually precede struct and contract declarations:
//!
//! 1. Title from the file name ([`format_title`]).
//! 2. Struct-level doc comments, preferring structs named after a role.
//! 3. Contract-level doc comments following the beta warning banner.
//! 4. A description synthesized from file name keywords.
//!
//! Type and tags come from declared struct names, legacy `pub contract`
//! names and keywords anywhere in the text; they are settled after the
//! description, so a synthesized description always reads as a generic
//! connector. The category comes from the file name only.

use std::sync::LazyLock;

use regex::Regex;

use super::title::format_title;
use crate::models::{ActionType, DEFAULT_CATEGORY, Metadata};

/// Filename keyword to category, first match wins.
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("FungibleToken", "Token Operations"),
    ("Swap", "Swap Operations"),
    ("ERC4626", "Vault Operations"),
    ("EVM", "EVM Integration"),
    ("IncrementFi", "IncrementFi Protocol"),
    ("BandOracle", "Oracle"),
    ("Uniswap", "Uniswap Integration"),
];

/// Struct names containing one of these carry the most specific docs.
const PREFERRED_STRUCT_KEYWORDS: &[&str] = &["Source", "Sink", "Swapper", "Oracle", "Price", "Flash"];

/// Text that marks a comment as part of the beta banner.
const WARNING_MARKERS: &[&str] = &["BETA", "NOT FINALIZED"];

const STRUCT_LOOKBACK_LINES: usize = 10;
const CONTRACT_DOC_SCAN_LINES: usize = 50;
const BANNER_MIN_LEN: usize = 50;
const MIN_DESCRIPTION_LEN: usize = 20;
const MAX_EXCLAMATION_RATIO: f64 = 0.1;

static STRUCT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*access\(all\)\s+struct\s+\w+|^\s*pub\s+struct\s+\w+").expect("valid pattern")
});
static STRUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"struct\s+(\w+)").expect("valid pattern"));
static ANY_STRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:pub\s+)?struct\s+(\w+)").expect("valid pattern"));
static ANY_CONTRACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pub\s+contract\s+(\w+)").expect("valid pattern"));
static DOC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^///\s*").expect("valid pattern"));
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z]+$").expect("valid pattern"));

// =============================================================================
// Public API
// =============================================================================

/// Extract display metadata for a source file.
///
/// `content` is the raw file text; `None` (or an empty string) degrades to
/// filename-only metadata. Every field of the result is non-empty.
pub fn extract_metadata(content: Option<&str>, file_name: &str) -> Metadata {
    let mut metadata = Metadata {
        title: format_title(file_name),
        description: String::new(),
        action_type: ActionType::Connector,
        category: detect_category(file_name).to_string(),
        tags: Vec::new(),
    };

    let content = content.filter(|c| !c.is_empty());

    if let Some(content) = content {
        let lines: Vec<&str> = content.split('\n').map(str::trim).collect();

        let structs = struct_descriptions(&lines);
        metadata.description = match preferred_description(&structs) {
            Some(description) => description.to_string(),
            None => contract_description(&lines).unwrap_or_default(),
        };
    }

    if is_disqualified(&metadata.description) {
        metadata.description.clear();
    }
    // Synthesized text sees the default type
    if metadata.description.chars().count() < MIN_DESCRIPTION_LEN {
        metadata.description = generate_description(file_name, &metadata);
    }

    if let Some(content) = content {
        classify(content, &mut metadata);
    }

    metadata
}

/// Category for a file name, `General` when no keyword matches.
pub fn detect_category(file_name: &str) -> &'static str {
    CATEGORY_MAP
        .iter()
        .find(|(keyword, _)| file_name.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Describe a file from its name alone.
pub fn generate_description(file_name: &str, metadata: &Metadata) -> String {
    let kind = metadata.action_type.as_str().to_lowercase();

    let lead = if file_name.contains("FungibleToken") {
        format!("Generic {kind} connector for FungibleToken vaults. ")
    } else if file_name.contains("EVM") {
        if file_name.contains("Native") && file_name.contains("FLOW") {
            let verb = if metadata.action_type == ActionType::Sink {
                "deposits"
            } else {
                "withdraws"
            };
            format!("DeFiActions connector that {verb} FLOW to/from EVM addresses as EVM-native FLOW. ")
        } else {
            "DeFiActions connector for EVM integration. ".to_string()
        }
    } else if file_name.contains("Swap") {
        "DeFiActions connector for token swapping operations. ".to_string()
    } else if file_name.contains("ERC4626") {
        "DeFiActions connector for ERC4626 vault operations. ".to_string()
    } else if file_name.contains("IncrementFi") {
        "DeFiActions connector for IncrementFi protocol integration. ".to_string()
    } else if file_name.contains("Band") || file_name.contains("Oracle") {
        "DeFiActions connector for price oracle operations. ".to_string()
    } else if file_name.contains("Uniswap") {
        "DeFiActions connector for Uniswap integration. ".to_string()
    } else {
        format!("Flow Actions {kind} connector. ")
    };

    format!("{lead}Part of the {} category.", metadata.category)
}

// =============================================================================
// Description Heuristics
// =============================================================================

struct StructDoc<'a> {
    name: &'a str,
    description: String,
}

/// Text of a `///` comment line, without the marker.
fn doc_text(line: &str) -> &str {
    DOC_PREFIX
        .find(line)
        .map_or(line, |m| &line[m.end()..])
        .trim()
}

fn is_banner(line: &str) -> bool {
    line.contains("!!!") && line.chars().count() > BANNER_MIN_LEN
}

fn has_warning_marker(text: &str) -> bool {
    WARNING_MARKERS.iter().any(|marker| text.contains(marker))
}

fn exclamation_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    text.chars().filter(|&c| c == '!').count() as f64 / total as f64
}

/// Whether a description must not be shown.
fn is_disqualified(text: &str) -> bool {
    exclamation_ratio(text) > MAX_EXCLAMATION_RATIO || has_warning_marker(text)
}

/// Doc comments found above each struct declaration, in source order.
fn struct_descriptions<'a>(lines: &[&'a str]) -> Vec<StructDoc<'a>> {
    let mut found = Vec::new();

    for (i, &line) in lines.iter().enumerate() {
        if !STRUCT_DECLARATION.is_match(line) {
            continue;
        }
        let Some(name) = STRUCT_NAME
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        let docs = doc_block_above(lines, i, name);
        if docs.is_empty() {
            continue;
        }

        let description = docs.join(" ").trim().to_string();
        if description.is_empty()
            || has_warning_marker(&description)
            || exclamation_ratio(&description) >= MAX_EXCLAMATION_RATIO
        {
            continue;
        }
        found.push(StructDoc { name, description });
    }

    found
}

/// Walk backward from a declaration collecting its documentation.
///
/// The first short, single-word comment (or one equal to the struct name) is
/// treated as a heading that repeats the name and is skipped.
fn doc_block_above<'a>(lines: &[&'a str], declaration: usize, name: &str) -> Vec<&'a str> {
    let mut docs: Vec<&str> = Vec::new();
    let mut saw_name_echo = false;
    let start = declaration.saturating_sub(STRUCT_LOOKBACK_LINES);

    for &prev in lines[start..declaration].iter().rev() {
        if prev == "///" || prev == "//" {
            continue;
        }
        if is_banner(prev) {
            break;
        }

        let is_doc = prev.starts_with("///");
        if is_doc {
            let text = doc_text(prev);
            if !saw_name_echo {
                if text == name || (text.chars().count() < 30 && !text.contains(' ')) {
                    saw_name_echo = true;
                    continue;
                }
                if text.chars().count() > 5 && !CAPITALIZED_WORD.is_match(text) {
                    docs.insert(0, text);
                }
            } else if text.chars().count() > 5 {
                docs.insert(0, text);
            }
        } else if !prev.is_empty() && !prev.starts_with("//") {
            break;
        }
    }

    docs
}

fn preferred_description<'a>(structs: &'a [StructDoc<'_>]) -> Option<&'a str> {
    structs
        .iter()
        .find(|s| PREFERRED_STRUCT_KEYWORDS.iter().any(|k| s.name.contains(k)))
        .or_else(|| structs.first())
        .map(|s| s.description.as_str())
}

/// Contract-level documentation following the beta banner.
fn contract_description(lines: &[&str]) -> Option<String> {
    let mut after_banner = false;
    let mut collected: Vec<&str> = Vec::new();

    for &line in lines.iter().take(CONTRACT_DOC_SCAN_LINES) {
        if is_banner(line) {
            after_banner = true;
            continue;
        }

        if after_banner && line.starts_with("///") {
            let text = doc_text(line);
            if text.chars().count() < 3 {
                if !collected.is_empty() {
                    break;
                }
                continue;
            }
            // contract name heading
            if collected.is_empty() && CAPITALIZED_WORD.is_match(text) {
                continue;
            }
            if has_warning_marker(text) {
                continue;
            }
            if text.chars().count() > 10 {
                collected.push(text);
            }
        } else if (after_banner && line.starts_with("access(all) contract"))
            || line.starts_with("pub contract")
        {
            break;
        } else if !collected.is_empty() && !line.is_empty() && !line.starts_with("//") {
            break;
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(" ").trim().to_string())
    }
}

// =============================================================================
// Type and Tags
// =============================================================================

/// Role implied by a declared name, with the tag it contributes.
fn role_for_name(name: &str) -> Option<(ActionType, &'static str)> {
    if name.contains("Source") {
        Some((ActionType::Source, "Source"))
    } else if name.contains("Sink") {
        Some((ActionType::Sink, "Sink"))
    } else if name.contains("Swap") {
        Some((ActionType::Swapper, "Swap"))
    } else if name.contains("Oracle") || name.contains("Price") {
        Some((ActionType::PriceOracle, "Oracle"))
    } else if name.contains("Flash") {
        Some((ActionType::Flasher, "Flash Loan"))
    } else {
        None
    }
}

/// Set the action type from declared names and add keyword tags.
///
/// Struct declarations are visited before `pub contract` declarations; the
/// last name implying a role decides the type. Cadence 1.0
/// `access(all) contract` names are not scanned.
fn classify(content: &str, metadata: &mut Metadata) {
    let declared = ANY_STRUCT
        .captures_iter(content)
        .chain(ANY_CONTRACT.captures_iter(content))
        .filter_map(|c| c.get(1).map(|m| m.as_str()));

    for name in declared {
        if let Some((action_type, tag)) = role_for_name(name) {
            metadata.action_type = action_type;
            metadata.add_tag(tag);
        }
    }

    if content.contains("FungibleToken") {
        metadata.add_tag("FungibleToken");
    }
    if content.contains("ERC4626") {
        metadata.add_tag("ERC4626");
    }
    if content.contains("EVM") {
        metadata.add_tag("EVM");
    }
    if content.contains("Increment") {
        metadata.add_tag("IncrementFi");
    }
    if content.contains("Band") {
        metadata.add_tag("Band Protocol");
    }
    if content.contains("Uniswap") {
        metadata.add_tag("Uniswap");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str =
        "/// !!! THIS CONTRACT IS IN BETA AND ITS API IS NOT FINALIZED - USE AT YOUR OWN RISK !!!";

    fn sink_source() -> String {
        [
            "import \"FungibleToken\"",
            "",
            "access(all) contract FungibleTokenConnectors {",
            "",
            "    /// Sink",
            "    ///",
            "    /// Withdraws tokens from a vault.",
            "    access(all) struct Sink {",
            "    }",
            "}",
        ]
        .join("\n")
    }

    #[test]
    fn test_struct_doc_becomes_description() {
        let content = sink_source();
        let meta = extract_metadata(Some(&content), "FungibleTokenConnectors.cdc");
        assert_eq!(meta.action_type, ActionType::Sink);
        assert!(meta.description.contains("Withdraws tokens from a vault."));
        assert_eq!(meta.category, "Token Operations");
        assert!(meta.tags.contains(&"Sink".to_string()));
        assert!(meta.tags.contains(&"FungibleToken".to_string()));
    }

    #[test]
    fn test_absent_content_fields_non_empty() {
        for name in ["FungibleTokenSink.cdc", "Mystery.cdc", "Connector.cdc", "x"] {
            let meta = extract_metadata(None, name);
            assert!(!meta.title.is_empty(), "{name}");
            assert!(!meta.description.is_empty(), "{name}");
            assert!(!meta.category.is_empty(), "{name}");
            assert_eq!(meta.action_type, ActionType::Connector);
        }
    }

    #[test]
    fn test_fungible_token_sink_filename_only() {
        assert_eq!(detect_category("FungibleTokenSink.cdc"), "Token Operations");
        let meta = extract_metadata(None, "FungibleTokenSink.cdc");
        assert!(meta.description.contains("FungibleToken vaults."));
        assert!(meta.description.ends_with("Part of the Token Operations category."));
    }

    #[test]
    fn test_empty_content_same_as_absent() {
        assert_eq!(
            extract_metadata(Some(""), "SwapConnectors.cdc"),
            extract_metadata(None, "SwapConnectors.cdc")
        );
    }

    #[test]
    fn test_category_first_match_wins() {
        assert_eq!(detect_category("EVMTokenSwapConnectors.cdc"), "Swap Operations");
        assert_eq!(detect_category("BandOracleConnectors.cdc"), "Oracle");
        assert_eq!(detect_category("UniswapV3.cdc"), "Uniswap Integration");
        assert_eq!(detect_category("Utils.cdc"), "General");
    }

    #[test]
    fn test_exclamation_heavy_description_rejected() {
        let content = [
            "/// Source",
            "///",
            "/// Wow!!!!! Such!!!!! Source!!!!!",
            "access(all) struct Source {",
            "}",
        ]
        .join("\n");
        let meta = extract_metadata(Some(&content), "Plain.cdc");
        assert!(!meta.description.contains("Wow"));
        assert!(exclamation_ratio(&meta.description) <= MAX_EXCLAMATION_RATIO);
    }

    #[test]
    fn test_beta_marker_never_survives() {
        let content = [
            "/// Sink",
            "///",
            "/// This Sink is BETA and may change at any moment.",
            "access(all) struct Sink {",
            "}",
        ]
        .join("\n");
        let meta = extract_metadata(Some(&content), "Plain.cdc");
        assert!(!meta.description.contains("BETA"));
    }

    #[test]
    fn test_banner_stops_struct_lookback() {
        let content = [
            "/// Deposits into somewhere far away from here.",
            BANNER,
            "/// Sink",
            "access(all) struct Sink {",
            "}",
        ]
        .join("\n");
        let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
        assert!(struct_descriptions(&lines).is_empty());
    }

    #[test]
    fn test_preferred_struct_description() {
        let content = [
            "/// Config",
            "///",
            "/// Holds shared configuration values.",
            "access(all) struct Config {",
            "}",
            "/// SwapSource",
            "///",
            "/// Swaps tokens before handing them out.",
            "access(all) struct SwapSource {",
            "}",
        ]
        .join("\n");
        let meta = extract_metadata(Some(&content), "Plain.cdc");
        assert_eq!(meta.description, "Swaps tokens before handing them out.");
        assert_eq!(meta.action_type, ActionType::Source);
    }

    #[test]
    fn test_first_struct_description_without_preference() {
        let content = [
            "/// Alpha",
            "/// First helper struct in this file.",
            "pub struct Alpha {",
            "}",
            "/// Beta",
            "/// Second helper struct in this file.",
            "pub struct Beta {",
            "}",
        ]
        .join("\n");
        let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
        let structs = struct_descriptions(&lines);
        assert_eq!(structs.len(), 2);
        assert_eq!(
            preferred_description(&structs),
            Some("First helper struct in this file.")
        );
    }

    #[test]
    fn test_contract_level_fallback() {
        let content = [
            BANNER,
            "///",
            "/// SwapConnectors",
            "///",
            "/// This contract defines generic swap connectors for DeFiActions.",
            "/// Connectors route tokens through any registered swapper.",
            "///",
            "access(all) contract SwapConnectors {",
            "}",
        ]
        .join("\n");
        let meta = extract_metadata(Some(&content), "SwapConnectors.cdc");
        assert_eq!(
            meta.description,
            "This contract defines generic swap connectors for DeFiActions. \
             Connectors route tokens through any registered swapper."
        );
        assert_eq!(meta.action_type, ActionType::Connector);
        assert!(meta.tags.is_empty());
        assert_eq!(meta.category, "Swap Operations");
    }

    #[test]
    fn test_access_all_contract_name_does_not_override_struct() {
        let content = "access(all) contract SwapConnectors {\n access(all) struct SwapSink {}\n}";
        let meta = extract_metadata(Some(content), "SwapConnectors.cdc");
        assert_eq!(meta.action_type, ActionType::Sink);
        assert_eq!(meta.tags, vec!["Sink"]);
    }

    #[test]
    fn test_legacy_pub_contract_name_is_scanned_last() {
        let content = "pub contract SwapConnectors {\n pub struct VaultSink {}\n}";
        let meta = extract_metadata(Some(content), "SwapConnectors.cdc");
        assert_eq!(meta.action_type, ActionType::Swapper);
        assert_eq!(meta.tags, vec!["Sink", "Swap"]);
    }

    #[test]
    fn test_short_description_replaced_by_generated() {
        let content = ["/// Sink", "/// Tiny note", "access(all) struct Sink {", "}"].join("\n");
        let meta = extract_metadata(Some(&content), "EVMNativeFLOWConnectors.cdc");
        assert_eq!(meta.action_type, ActionType::Sink);
        assert_eq!(
            meta.description,
            "DeFiActions connector that withdraws FLOW to/from EVM addresses as EVM-native FLOW. \
             Part of the EVM Integration category."
        );
    }

    #[test]
    fn test_type_from_last_declared_role() {
        let content = "access(all) struct PriceOracle {}\naccess(all) struct FlashLender {}";
        let meta = extract_metadata(Some(content), "Plain.cdc");
        assert_eq!(meta.action_type, ActionType::Flasher);
        assert_eq!(meta.tags, vec!["Oracle", "Flash Loan"]);
    }

    #[test]
    fn test_keyword_tags() {
        let content = "import \"EVM\"\n// routed via IncrementFi and Band feeds, Uniswap, ERC4626";
        let meta = extract_metadata(Some(content), "Plain.cdc");
        assert_eq!(
            meta.tags,
            vec!["ERC4626", "EVM", "IncrementFi", "Band Protocol", "Uniswap"]
        );
        assert_eq!(meta.action_type, ActionType::Connector);
    }

    #[test]
    fn test_generated_description_ignores_detected_type() {
        let content = "access(all) struct Source {}";
        let meta = extract_metadata(Some(content), "Mystery.cdc");
        assert_eq!(meta.action_type, ActionType::Source);
        assert_eq!(
            meta.description,
            "Flow Actions connector connector. Part of the General category."
        );

        let meta = extract_metadata(
            Some("access(all) struct VaultSink {}"),
            "FungibleTokenConnectors.cdc",
        );
        assert_eq!(meta.action_type, ActionType::Sink);
        assert_eq!(
            meta.description,
            "Generic connector connector for FungibleToken vaults. Part of the Token Operations category."
        );
    }
}
