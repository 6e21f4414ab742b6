//! End-to-end conversion: load, convert, serialize, write.
//!
//! The conversion loop owns the layout row counter; each emitted block is
//! placed one row (144 units) below the previous so pasted nodes never
//! overlap in the graph editor.

use std::path::{Path, PathBuf};

use super::document::SceneDocument;
use super::nodes::convert_node;
use super::ExportResult;

/// The outcome of a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// Full serialized paste text, exactly as written to disk.
    pub text: String,

    /// Path the text was written to.
    pub output_path: PathBuf,

    /// Number of object blocks emitted.
    pub node_count: usize,
}

/// Convert a scene-export file into paste-import text and write it out.
///
/// # Example
///
/// ```ignore
/// use abx_core::abp::convert;
///
/// let result = convert("ABP_Ch020.json", "Muscular.txt", "ABP_Ch020_C")?;
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    class: &str,
) -> ExportResult<Conversion> {
    let document = SceneDocument::load(input_path)?;
    convert_document(&document, output_path, class)
}

/// Convert an already-loaded document and write the result, for callers
/// that inspected the document first (e.g. to detect the class).
pub fn convert_document<P: AsRef<Path>>(
    document: &SceneDocument,
    output_path: P,
    class: &str,
) -> ExportResult<Conversion> {
    let blocks = render_blocks(document, class)?;
    let node_count = blocks.len();
    let text = join_blocks(blocks);

    std::fs::write(&output_path, &text)?;
    log::info!(
        "Converted {} nodes for {} -> {}",
        node_count,
        class,
        output_path.as_ref().display()
    );

    Ok(Conversion {
        text,
        output_path: output_path.as_ref().to_path_buf(),
        node_count,
    })
}

/// Convert a parsed document to the final paste text without touching
/// the filesystem.
pub fn export_document(document: &SceneDocument, class: &str) -> ExportResult<String> {
    Ok(join_blocks(render_blocks(document, class)?))
}

/// Convert every node record for `class`, in document order.
fn render_blocks(document: &SceneDocument, class: &str) -> ExportResult<Vec<String>> {
    let props = document.node_properties(class)?;

    let mut blocks: Vec<String> = Vec::new();
    for (key, node) in props {
        match convert_node(key, node)? {
            Some(block) => {
                let row = blocks.len();
                blocks.push(block.render(row));
            }
            None => log::debug!("Skipping property {} (not an animation-graph node)", key),
        }
    }

    Ok(blocks)
}

/// One blank line between blocks; non-empty output ends with a newline.
fn join_blocks(blocks: Vec<String>) -> String {
    let mut text = blocks.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
