//! Label normalization.
//!
//! Item labels are authored as strings carrying a small, closed set of inline
//! HTML constructs: `<b>`/`<strong>`, `<i>`/`<em>`, `<a href="...">`, and a
//! handful of named entities. Two consumers need different projections of the
//! same label:
//!
//! - [`parse_label`] - a tree of renderable nodes for on-screen display,
//!   preserving emphasis and links.
//! - [`plain_text`] - tags stripped and entities decoded, safe to embed in a
//!   Markdown export.
//!
//! This is a whitelisted transformer over a known markup subset, not an HTML
//! parser. Both projections are total: malformed input degrades to text and
//! never produces an error.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity Decoding
// ============================================================================

/// Named entities the guides actually use. Unknown entities pass through
/// unchanged rather than erroring.
///
/// `&amp;` is decoded LAST so that authored escapes like `&amp;lt;` come out
/// as the literal text `&lt;` instead of being decoded twice.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&rsquo;", "\u{2019}"),
    ("&lsquo;", "\u{2018}"),
    ("&rdquo;", "\u{201D}"),
    ("&ldquo;", "\u{201C}"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&hellip;", "\u{2026}"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// Decode the known named entities to their literal characters.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, literal) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, literal);
        }
    }
    decoded
}

// ============================================================================
// Plain-Text Projection
// ============================================================================

fn tag_pattern() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Strip all tags and decode entities, for Markdown export.
///
/// Anything between `<` and `>` is removed; a dangling `<` with no closing
/// `>` is left in place as text. A label with no markup passes through
/// unchanged.
///
/// # Example
///
/// ```
/// use ticklist::label::plain_text;
///
/// assert_eq!(plain_text("<b>Use &amp; verify</b>"), "Use & verify");
/// assert_eq!(plain_text("no markup"), "no markup");
/// ```
#[must_use]
pub fn plain_text(label: &str) -> String {
    let stripped = tag_pattern().replace_all(label, "");
    decode_entities(&stripped)
}

// ============================================================================
// Rich Projection
// ============================================================================

/// One node of a parsed label, ready for a renderer to walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelNode {
    /// Literal text with entities already decoded
    Text(String),
    /// `<b>` / `<strong>` span
    Bold(Vec<LabelNode>),
    /// `<i>` / `<em>` span
    Emphasis(Vec<LabelNode>),
    /// `<a href="...">` span; href is empty if the attribute is absent
    Link {
        href: String,
        children: Vec<LabelNode>,
    },
}

fn href_pattern() -> &'static Regex {
    static HREF_RE: OnceLock<Regex> = OnceLock::new();
    HREF_RE.get_or_init(|| {
        Regex::new(r#"href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("href pattern is valid")
    })
}

/// Parse an authored label into renderable nodes.
///
/// Recognizes only the whitelisted tags; unknown tags are dropped with their
/// inner text kept in the flow, stray closing tags are dropped, and an
/// unterminated construct runs to the end of the label. Entities inside text
/// runs are decoded.
///
/// # Example
///
/// ```
/// use ticklist::label::{parse_label, LabelNode};
///
/// let nodes = parse_label("Read the <b>runbook</b> first");
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(
///     nodes[1],
///     LabelNode::Bold(vec![LabelNode::Text("runbook".to_string())])
/// );
/// ```
#[must_use]
pub fn parse_label(label: &str) -> Vec<LabelNode> {
    let mut pos = 0;
    parse_nodes(label, &mut pos, None)
}

/// Canonical group a tag name belongs to, if it is whitelisted.
fn tag_group(name: &str) -> Option<&'static str> {
    match name {
        "b" | "strong" => Some("b"),
        "i" | "em" => Some("i"),
        "a" => Some("a"),
        _ => None,
    }
}

fn flush_text(text: &mut String, nodes: &mut Vec<LabelNode>) {
    if !text.is_empty() {
        nodes.push(LabelNode::Text(decode_entities(text)));
        text.clear();
    }
}

/// Parse nodes until end of input or a closing tag for `closing`.
fn parse_nodes(input: &str, pos: &mut usize, closing: Option<&str>) -> Vec<LabelNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();

    while *pos < input.len() {
        let rest = &input[*pos..];

        if !rest.starts_with('<') {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            text.push(ch);
            *pos += ch.len_utf8();
            continue;
        }

        let Some(tag_end) = rest.find('>') else {
            // Dangling '<' with no closing '>' stays literal text
            text.push_str(rest);
            *pos = input.len();
            break;
        };

        let tag_body = rest[1..tag_end].trim();
        let after_tag = *pos + tag_end + 1;

        if let Some(close_name) = tag_body.strip_prefix('/') {
            let group = tag_group(close_name.trim().to_ascii_lowercase().as_str());
            *pos = after_tag;
            if group.is_some() && group == closing {
                flush_text(&mut text, &mut nodes);
                return nodes;
            }
            // Stray or unknown closing tag: drop it, keep the flow
            continue;
        }

        let name = tag_body
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match tag_group(&name) {
            Some("b") => {
                flush_text(&mut text, &mut nodes);
                *pos = after_tag;
                nodes.push(LabelNode::Bold(parse_nodes(input, pos, Some("b"))));
            }
            Some("i") => {
                flush_text(&mut text, &mut nodes);
                *pos = after_tag;
                nodes.push(LabelNode::Emphasis(parse_nodes(input, pos, Some("i"))));
            }
            Some("a") => {
                flush_text(&mut text, &mut nodes);
                let href = href_pattern()
                    .captures(tag_body)
                    .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                *pos = after_tag;
                nodes.push(LabelNode::Link {
                    href,
                    children: parse_nodes(input, pos, Some("a")),
                });
            }
            _ => {
                // Unknown tag: drop the tag itself, keep its content in flow
                *pos = after_tag;
            }
        }
    }

    flush_text(&mut text, &mut nodes);
    nodes
}
