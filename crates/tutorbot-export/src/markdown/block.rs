//! Line-oriented block parser.
//!
//! Scans message text top-to-bottom with a cursor, dispatching each line
//! in priority order: fenced code, ATX header, bullet list, numbered
//! list, horizontal rule, blockquote, then paragraph/spacer. Each rule
//! consumes one or more contiguous lines and advances the cursor past
//! them. The output sequence is never empty.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::{Inline, parse_inline};

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("header pattern is valid"));

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("bullet pattern is valid"));

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("numbered pattern is valid"));

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").expect("rule pattern is valid"));

static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s?(.*)$").expect("quote pattern is valid"));

/// One structurally distinct unit of parsed message content.
///
/// Blocks do not nest; list items and blockquote text are runs of
/// inline-styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Inline),
    Header { level: u8, content: Inline },
    /// Verbatim code text, newlines preserved, no inline styling.
    CodeBlock(String),
    BulletList(Vec<Inline>),
    /// Item markers are discarded; rendering always auto-numbers.
    NumberedList(Vec<Inline>),
    HorizontalRule,
    Blockquote(Inline),
    /// Emitted for each blank line between blocks.
    Spacer,
}

/// Splits one message's raw text into an ordered block sequence.
///
/// Empty input yields a single empty paragraph; the result is never
/// empty for any input.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let empty_paragraph = Block::Paragraph(Inline::Plain(String::new()));
    if text.is_empty() {
        return vec![empty_paragraph];
    }

    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        // 1. Fenced code block. The language tag is parsed but unused;
        //    an unterminated fence captures through end of input.
        if let Some(rest) = line.strip_prefix("```") {
            let _lang = rest.trim();
            i += 1;
            let mut code = Vec::new();
            while i < lines.len() && !lines[i].trim().starts_with("```") {
                code.push(lines[i]);
                i += 1;
            }
            if i < lines.len() {
                i += 1; // consume the closing fence
            }
            blocks.push(Block::CodeBlock(code.join("\n")));
            continue;
        }

        // 2. ATX header, levels 1-6.
        if let Some(caps) = HEADER.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
            let rest = caps.get(2).map_or("", |m| m.as_str());
            blocks.push(Block::Header {
                level,
                content: parse_inline(rest),
            });
            i += 1;
            continue;
        }

        // 3. Bullet list: consecutive `-`/`*` lines. Stops at the first
        //    non-matching line, so a blank line or numbered item ends it.
        if BULLET_ITEM.is_match(line) {
            let mut items = Vec::new();
            while i < lines.len() {
                let Some(caps) = BULLET_ITEM.captures(lines[i].trim()) else {
                    break;
                };
                items.push(parse_inline(caps.get(1).map_or("", |m| m.as_str())));
                i += 1;
            }
            blocks.push(Block::BulletList(items));
            continue;
        }

        // 4. Numbered list: the numeric value is discarded.
        if NUMBERED_ITEM.is_match(line) {
            let mut items = Vec::new();
            while i < lines.len() {
                let Some(caps) = NUMBERED_ITEM.captures(lines[i].trim()) else {
                    break;
                };
                items.push(parse_inline(caps.get(1).map_or("", |m| m.as_str())));
                i += 1;
            }
            blocks.push(Block::NumberedList(items));
            continue;
        }

        // 5. Horizontal rule: 3+ repeated -, * or _ and nothing else.
        if HORIZONTAL_RULE.is_match(line) {
            blocks.push(Block::HorizontalRule);
            i += 1;
            continue;
        }

        // 6. Blockquote: consecutive `>` lines joined with newlines and
        //    inline-parsed as one unit.
        if QUOTE_LINE.is_match(line) {
            let mut quoted = Vec::new();
            while i < lines.len() {
                let Some(caps) = QUOTE_LINE.captures(lines[i].trim()) else {
                    break;
                };
                quoted.push(caps.get(1).map_or("", |m| m.as_str()).to_string());
                i += 1;
            }
            blocks.push(Block::Blockquote(parse_inline(&quoted.join("\n"))));
            continue;
        }

        // 7. Paragraph or blank spacer.
        if line.is_empty() {
            blocks.push(Block::Spacer);
        } else {
            blocks.push(Block::Paragraph(parse_inline(line)));
        }
        i += 1;
    }

    if blocks.is_empty() {
        blocks.push(empty_paragraph);
    }
    blocks
}
