//! Markdown-subset parsing.
//!
//! Supports the fixed subset the chat UI emits: ATX headers, fenced code
//! blocks, bullet and numbered lists, blockquotes, horizontal rules, and
//! the inline markers `**bold**`, `*italic*`, `` `code` `` and
//! `[text](url)`. This is intentionally not CommonMark; constructs the
//! subset does not know are rendered as literal text.

mod block;
mod inline;

pub use block::{Block, parse_blocks};
pub use inline::{Inline, Span, SpanStyle, parse_inline};
