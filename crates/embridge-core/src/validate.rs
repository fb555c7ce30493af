use crate::model::{Block, Document, ROOT_ID};

/// Validate document well-formedness. Strict and fail-fast.
///
/// Rules:
/// - a `root` block must exist and be an `EmailLayout`
/// - every id referenced in a `childrenIds` list must exist
/// - no block may list `root` as a child
///
/// Unknown block types never reach this function; they already fail
/// deserialization.
pub fn validate_document(doc: &Document) -> Result<(), String> {
    let root = doc
        .root()
        .ok_or_else(|| format!("document has no '{ROOT_ID}' block"))?;

    if !matches!(root, Block::EmailLayout(_)) {
        return Err(format!(
            "'{ROOT_ID}' must be an EmailLayout block, found {}",
            root.type_name()
        ));
    }

    for (id, block) in &doc.blocks {
        let Some(children) = block.children() else {
            continue;
        };
        for child in children {
            if child == ROOT_ID {
                return Err(format!("block '{id}' lists '{ROOT_ID}' as a child"));
            }
            if !doc.contains(child) {
                return Err(format!(
                    "block '{id}' references unknown child id '{child}'"
                ));
            }
        }
    }

    Ok(())
}
