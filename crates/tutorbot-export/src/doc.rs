//! Serializable document tree.
//!
//! The shape follows the external layout engine's contract: nested nodes
//! carrying style and geometry attributes, camelCase keys, absent
//! attributes omitted. Layout concerns that the original expressed as
//! runtime callbacks (cell padding, frame borders, the page footer) are
//! declarative data here, resolved once per render.

use std::collections::BTreeMap;

use serde::Serialize;

/// Margins as `[left, top, right, bottom]` points.
pub type Margin = [f32; 4];

/// Horizontal alignment of a node.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// A named style definition for the document's style table.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

/// A styled text leaf. Also used as one span inside a span sequence.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_leading_spaces: Option<bool>,
}

impl TextNode {
    /// A plain text leaf with no attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A text leaf referencing a named style.
    pub fn styled(text: impl Into<String>, style: &str) -> Self {
        Self {
            text: text.into(),
            style: Some(style.to_string()),
            ..Self::default()
        }
    }
}

/// A sequence of inline spans flowing as one paragraph.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpansNode {
    #[serde(rename = "text")]
    pub spans: Vec<TextNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// A vertical stack of nodes.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StackNode {
    pub stack: Vec<DocNode>,
    /// When set, the engine keeps the whole stack on one page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbreakable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// An unordered (bulleted) list.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulletListNode {
    pub ul: Vec<DocNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// An ordered list; the engine numbers items itself.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumberedListNode {
    pub ol: Vec<DocNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// A column width: star (fill), auto, or fixed points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    Star,
    Auto,
    Pt(f32),
}

impl Serialize for Width {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Width::Star => serializer.serialize_str("*"),
            Width::Auto => serializer.serialize_str("auto"),
            Width::Pt(points) => serializer.serialize_f32(*points),
        }
    }
}

/// Declarative table frame: line widths/color, cell padding, fill.
///
/// The original passed these as border and padding callback functions;
/// here they are plain data the engine resolves once per render.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableLayout {
    pub line_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    /// Cell padding as `[left, top, right, bottom]`.
    pub padding: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

/// Rows and column widths of a table.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableBody {
    pub widths: Vec<Width>,
    pub body: Vec<Vec<DocNode>>,
}

/// A framed table; the single-cell form is the bubble container.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableNode {
    pub table: TableBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TableLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// A drawn line, used for horizontal rules.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineShape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub line_width: f32,
    pub line_color: String,
}

/// A vector-drawing node.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub canvas: Vec<LineShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl CanvasNode {
    /// A full-width horizontal rule in the given color.
    pub fn horizontal_rule(width: f32, color: &str) -> Self {
        Self {
            canvas: vec![LineShape {
                kind: "line",
                x1: 0.0,
                y1: 0.0,
                x2: width,
                y2: 0.0,
                line_width: 0.5,
                line_color: color.to_string(),
            }],
            margin: Some([0.0, 6.0, 0.0, 6.0]),
        }
    }
}

/// One node of the document content tree.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DocNode {
    Text(TextNode),
    Spans(SpansNode),
    Stack(StackNode),
    BulletList(BulletListNode),
    NumberedList(NumberedListNode),
    Table(TableNode),
    Canvas(CanvasNode),
}

/// The page footer, declarative: a fixed generation timestamp plus a
/// page-counter template with `{page}` and `{pages}` placeholders.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub generated_at: String,
    pub page_template: String,
    pub alignment: Alignment,
    pub font_size: f32,
    pub color: String,
}

impl Footer {
    /// Expands the template for a concrete page, e.g. for previews.
    pub fn render(&self, page: usize, pages: usize) -> String {
        let counter = self
            .page_template
            .replace("{page}", &page.to_string())
            .replace("{pages}", &pages.to_string());
        format!("{} | {}", self.generated_at, counter)
    }
}

/// The complete document: content, style table, page geometry, footer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    pub content: Vec<DocNode>,
    pub styles: BTreeMap<String, StyleDef>,
    pub default_style: StyleDef,
    pub page_margins: Margin,
    pub footer: Footer,
}
