//! Conversation-to-document formatter.
//!
//! Turns a TutorBot conversation (metadata plus ordered messages) into a
//! layout-description tree for an external document engine. The tree shape
//! (nested nodes with style and geometry attributes, camelCase on the
//! wire) is a fixed external contract; this crate only produces it.
//!
//! Pipeline:
//! - `markdown`: line-oriented block parser + regex inline-style parser
//!   for the supported markdown subset
//! - `doc`: the serializable document tree model
//! - `styles`: fixed colors and the named style table
//! - `assemble`: title section, per-message bubbles, footer, timestamps,
//!   filename generation

pub mod assemble;
pub mod doc;
pub mod markdown;
pub mod styles;

pub use assemble::{assemble_document, export_filename, format_timestamp};
pub use doc::DocumentDefinition;
