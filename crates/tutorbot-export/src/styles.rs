//! Fixed colors and the named style table for exported documents.

use std::collections::BTreeMap;

use crate::doc::{Alignment, Margin, StyleDef, TableLayout};

/// Base body text color.
pub const TEXT_COLOR: &str = "#202124";
/// Muted gray for timestamps, footers and rules.
pub const MUTED_COLOR: &str = "#9e9e9e";
/// Rule line color.
pub const RULE_COLOR: &str = "#bdbdbd";

/// User bubble fill and accent.
pub const USER_FILL: &str = "#e8f0fe";
pub const USER_ACCENT: &str = "#1a73e8";

/// Assistant bubble fill and accent.
pub const ASSISTANT_FILL: &str = "#f1f3f4";
pub const ASSISTANT_ACCENT: &str = "#5f6368";

/// Inline code and code block colors.
pub const CODE_BACKGROUND: &str = "#f5f5f5";
pub const CODE_COLOR: &str = "#37474f";

/// Link decoration color.
pub const LINK_COLOR: &str = "#1a73e8";

/// Header font sizes for levels 1-6.
pub const HEADER_SIZES: [f32; 6] = [18.0, 16.0, 14.0, 13.0, 12.0, 11.0];

/// Usable content width in points (A4 minus page margins).
pub const CONTENT_WIDTH: f32 = 515.0;
/// Rule width inside a bubble cell.
pub const BUBBLE_RULE_WIDTH: f32 = 360.0;
/// Horizontal offset that pushes a bubble toward its side of the page.
pub const BUBBLE_INDENT: f32 = 80.0;

/// Outer margin of a bubble: indented left for user, right for assistant.
pub fn bubble_margin(is_user: bool) -> Margin {
    if is_user {
        [BUBBLE_INDENT, 6.0, 0.0, 6.0]
    } else {
        [0.0, 6.0, BUBBLE_INDENT, 6.0]
    }
}

/// Declarative frame for a bubble cell: thin accent border, role fill.
pub fn bubble_layout(is_user: bool) -> TableLayout {
    let (fill, accent) = if is_user {
        (USER_FILL, USER_ACCENT)
    } else {
        (ASSISTANT_FILL, ASSISTANT_ACCENT)
    };
    TableLayout {
        line_width: 0.5,
        line_color: Some(accent.to_string()),
        padding: [8.0, 6.0, 8.0, 6.0],
        fill_color: Some(fill.to_string()),
    }
}

/// Name of the style table entry for a header level (clamped to 1-6).
pub fn header_style(level: u8) -> String {
    format!("h{}", level.clamp(1, 6))
}

/// The document's named style table.
pub fn style_table() -> BTreeMap<String, StyleDef> {
    let mut styles = BTreeMap::new();

    styles.insert(
        "title".to_string(),
        StyleDef {
            font_size: Some(20.0),
            bold: Some(true),
            color: Some(TEXT_COLOR.to_string()),
            margin: Some([0.0, 0.0, 0.0, 8.0]),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "meta".to_string(),
        StyleDef {
            font_size: Some(10.0),
            color: Some(TEXT_COLOR.to_string()),
            margin: Some([0.0, 1.0, 0.0, 1.0]),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "roleLabel".to_string(),
        StyleDef {
            font_size: Some(10.0),
            bold: Some(true),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "timestamp".to_string(),
        StyleDef {
            font_size: Some(8.0),
            color: Some(MUTED_COLOR.to_string()),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "tokenInfo".to_string(),
        StyleDef {
            font_size: Some(8.0),
            italics: Some(true),
            color: Some(ASSISTANT_ACCENT.to_string()),
            margin: Some([0.0, 0.0, 0.0, 2.0]),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "codeBlock".to_string(),
        StyleDef {
            font_size: Some(9.0),
            color: Some(CODE_COLOR.to_string()),
            background: Some(CODE_BACKGROUND.to_string()),
            margin: Some([0.0, 4.0, 0.0, 4.0]),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "quote".to_string(),
        StyleDef {
            italics: Some(true),
            color: Some(ASSISTANT_ACCENT.to_string()),
            margin: Some([12.0, 2.0, 0.0, 2.0]),
            ..StyleDef::default()
        },
    );
    styles.insert(
        "emptyState".to_string(),
        StyleDef {
            italics: Some(true),
            color: Some(MUTED_COLOR.to_string()),
            alignment: Some(Alignment::Center),
            margin: Some([0.0, 24.0, 0.0, 0.0]),
            ..StyleDef::default()
        },
    );

    for (index, size) in HEADER_SIZES.iter().enumerate() {
        styles.insert(
            format!("h{}", index + 1),
            StyleDef {
                font_size: Some(*size),
                bold: Some(true),
                color: Some(TEXT_COLOR.to_string()),
                margin: Some([0.0, 4.0, 0.0, 2.0]),
                ..StyleDef::default()
            },
        );
    }

    styles
}
