//! Export command handler.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tutorbot_export::{assemble_document, export_filename};
use tutorbot_types::ConversationData;

use crate::config::Config;

pub fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
    config: &Config,
) -> Result<()> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read conversation data from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read conversation data from stdin")?;
            buf
        }
    };
    let data: ConversationData = serde_json::from_str(&raw).context("parse conversation data")?;

    let now = Utc::now();
    let doc = assemble_document(&data, now);

    let dir: PathBuf = output
        .map(Path::to_path_buf)
        .or_else(|| config.export_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("create export directory {}", dir.display()))?;

    // The layout engine consumes the tree to produce the final PDF; the
    // file carries the .pdf name the download contract generates.
    let filename = format!(
        "{}.json",
        export_filename(data.metadata.conversation_id.as_deref(), now)
    );
    let path = dir.join(filename);

    let json = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("serialize document tree")?;
    fs::write(&path, json).with_context(|| format!("write document to {}", path.display()))?;

    tracing::debug!(messages = data.messages.len(), path = %path.display(), "export complete");
    println!("{}", path.display());
    Ok(())
}
