//! Document assembly: title section, message bubbles, footer.
//!
//! Combines conversation metadata and the parsed message content into one
//! `DocumentDefinition`. Missing or malformed inputs degrade to fallback
//! text; assembly itself never fails.

use chrono::{DateTime, NaiveDateTime, Utc};
use tutorbot_types::{ConversationData, ConversationMetadata, Message, Role};

use crate::doc::{
    Alignment, BulletListNode, CanvasNode, DocNode, DocumentDefinition, Footer, Margin,
    NumberedListNode, SpansNode, StackNode, StyleDef, TableBody, TableNode, TextNode, Width,
};
use crate::markdown::{Block, Inline, Span, SpanStyle, parse_blocks};
use crate::styles;

/// Fallback shown for absent identifiers in the title section.
const MISSING_ID: &str = "N/A";

/// Builds the full document definition for one conversation.
///
/// `now` anchors relative timestamps and the footer; callers pass
/// `Utc::now()` outside of tests.
pub fn assemble_document(data: &ConversationData, now: DateTime<Utc>) -> DocumentDefinition {
    let mut content = title_section(&data.metadata);

    if data.messages.is_empty() {
        content.push(DocNode::Text(TextNode::styled(
            "No messages in this conversation.",
            "emptyState",
        )));
    } else {
        for message in &data.messages {
            content.push(message_bubble(message, now));
        }
    }

    tracing::debug!(messages = data.messages.len(), "assembled document tree");

    DocumentDefinition {
        content,
        styles: styles::style_table(),
        default_style: StyleDef {
            font_size: Some(10.0),
            color: Some(styles::TEXT_COLOR.to_string()),
            line_height: Some(1.25),
            ..StyleDef::default()
        },
        page_margins: [40.0, 40.0, 40.0, 60.0],
        footer: Footer {
            generated_at: format!("Generated {}", now.format("%Y-%m-%d %H:%M:%S")),
            page_template: "Page {page} of {pages}".to_string(),
            alignment: Alignment::Center,
            font_size: 8.0,
            color: styles::MUTED_COLOR.to_string(),
        },
    }
}

/// Title block sequence: heading, metadata lines, separator rule.
fn title_section(meta: &ConversationMetadata) -> Vec<DocNode> {
    let mut nodes = vec![DocNode::Text(TextNode::styled(
        "TutorBot Conversation",
        "title",
    ))];

    let id_or_missing = |id: &Option<String>| {
        id.as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING_ID)
            .to_string()
    };

    let lines = [
        ("Class: ", meta.class_name.clone()),
        ("Lesson: ", meta.lesson.clone()),
        ("Mode: ", meta.action_plan.clone()),
        ("Session: ", id_or_missing(&meta.session_id)),
        ("Conversation: ", id_or_missing(&meta.conversation_id)),
    ];
    for (label, value) in lines {
        nodes.push(meta_line(label, &value));
    }
    if let Some(exported) = meta.timestamp.as_deref().filter(|s| !s.is_empty()) {
        nodes.push(meta_line("Exported: ", exported));
    }

    nodes.push(DocNode::Canvas(CanvasNode::horizontal_rule(
        styles::CONTENT_WIDTH,
        styles::RULE_COLOR,
    )));
    nodes
}

fn meta_line(label: &str, value: &str) -> DocNode {
    DocNode::Spans(SpansNode {
        spans: vec![
            TextNode {
                text: label.to_string(),
                bold: Some(true),
                ..TextNode::default()
            },
            TextNode::plain(value),
        ],
        style: Some("meta".to_string()),
        margin: None,
    })
}

/// One framed bubble for a message, attributed to its sender role.
///
/// The header line (role + timestamp), the token annotation and the first
/// content block form an unbreakable stack so a page break can never
/// separate them; remaining blocks flow normally.
fn message_bubble(message: &Message, now: DateTime<Utc>) -> DocNode {
    let is_user = message.role == Role::User;
    let accent = if is_user {
        styles::USER_ACCENT
    } else {
        styles::ASSISTANT_ACCENT
    };

    let mut header_spans = vec![TextNode {
        text: message.role.label().to_string(),
        style: Some("roleLabel".to_string()),
        color: Some(accent.to_string()),
        ..TextNode::default()
    }];
    let timestamp = format_timestamp(message.timestamp.as_deref(), now);
    if !timestamp.is_empty() {
        header_spans.push(TextNode::plain("   "));
        header_spans.push(TextNode::styled(timestamp, "timestamp"));
    }

    let mut head = vec![DocNode::Spans(SpansNode {
        spans: header_spans,
        style: None,
        margin: Some([0.0, 0.0, 0.0, 2.0]),
    })];
    if let Some(token_info) = message.token_info.as_deref().filter(|s| !s.is_empty()) {
        head.push(DocNode::Text(TextNode::styled(token_info, "tokenInfo")));
    }

    // Every message yields at least one block, so the unbreakable head
    // always contains the first line of content.
    let mut blocks = parse_blocks(&message.content).into_iter().map(block_node);
    if let Some(first) = blocks.next() {
        head.push(first);
    }

    let mut cell = vec![DocNode::Stack(StackNode {
        stack: head,
        unbreakable: Some(true),
        margin: None,
    })];
    cell.extend(blocks);

    DocNode::Table(TableNode {
        table: TableBody {
            widths: vec![Width::Star],
            body: vec![vec![DocNode::Stack(StackNode {
                stack: cell,
                unbreakable: None,
                margin: None,
            })]],
        },
        layout: Some(styles::bubble_layout(is_user)),
        margin: Some(styles::bubble_margin(is_user)),
    })
}

/// Maps one parsed block to a document node.
fn block_node(block: Block) -> DocNode {
    match block {
        Block::Paragraph(inline) => inline_node(inline, None, Some([0.0, 2.0, 0.0, 2.0])),
        Block::Header { level, content } => {
            inline_node(content, Some(&styles::header_style(level)), None)
        }
        Block::CodeBlock(code) => DocNode::Text(TextNode {
            text: code,
            style: Some("codeBlock".to_string()),
            preserve_leading_spaces: Some(true),
            ..TextNode::default()
        }),
        Block::BulletList(items) => DocNode::BulletList(BulletListNode {
            ul: items
                .into_iter()
                .map(|item| inline_node(item, None, None))
                .collect(),
            margin: Some([8.0, 2.0, 0.0, 2.0]),
        }),
        Block::NumberedList(items) => DocNode::NumberedList(NumberedListNode {
            ol: items
                .into_iter()
                .map(|item| inline_node(item, None, None))
                .collect(),
            margin: Some([8.0, 2.0, 0.0, 2.0]),
        }),
        Block::HorizontalRule => DocNode::Canvas(CanvasNode::horizontal_rule(
            styles::BUBBLE_RULE_WIDTH,
            styles::RULE_COLOR,
        )),
        Block::Blockquote(inline) => inline_node(inline, Some("quote"), None),
        Block::Spacer => DocNode::Text(TextNode {
            text: String::new(),
            margin: Some([0.0, 4.0, 0.0, 0.0]),
            ..TextNode::default()
        }),
    }
}

/// Renders inline content as a text leaf or a span sequence.
fn inline_node(inline: Inline, style: Option<&str>, margin: Option<Margin>) -> DocNode {
    match inline {
        Inline::Plain(text) => DocNode::Text(TextNode {
            text,
            style: style.map(str::to_string),
            margin,
            ..TextNode::default()
        }),
        Inline::Spans(spans) => DocNode::Spans(SpansNode {
            spans: spans.into_iter().map(span_node).collect(),
            style: style.map(str::to_string),
            margin,
        }),
    }
}

fn span_node(span: Span) -> TextNode {
    let mut node = TextNode::plain(span.text);
    match span.style {
        SpanStyle::Plain => {}
        SpanStyle::Bold => node.bold = Some(true),
        SpanStyle::Italic => node.italics = Some(true),
        SpanStyle::Code => {
            node.color = Some(styles::CODE_COLOR.to_string());
            node.background = Some(styles::CODE_BACKGROUND.to_string());
        }
        SpanStyle::Link { url } => {
            node.link = Some(url);
            node.color = Some(styles::LINK_COLOR.to_string());
            node.decoration = Some("underline".to_string());
        }
    }
    node
}

/// Formats a message timestamp relative to `now`.
///
/// Same-day timestamps show only the time of day; older ones add month
/// and day. Missing or unparseable values yield an empty string.
pub fn format_timestamp(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp else {
        return String::new();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc())
        });
    let Ok(dt) = parsed else {
        return String::new();
    };

    if dt.date_naive() == now.date_naive() {
        dt.format("%-I:%M %p").to_string()
    } else {
        dt.format("%b %-d, %-I:%M %p").to_string()
    }
}

/// Download filename: the ISO timestamp with `:` and `T` replaced by `-`,
/// then the fixed stem and the conversation id (or "unknown").
pub fn export_filename(conversation_id: Option<&str>, now: DateTime<Utc>) -> String {
    let stamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', 'T'], "-");
    let id = conversation_id.filter(|s| !s.is_empty()).unwrap_or("unknown");
    format!("{stamp}_TutorBot_{id}.pdf")
}
