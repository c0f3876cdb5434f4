//! Parent/child split orchestration.
//!
//! This is the one splitting path. Upload ingestion and split preview
//! both call [`split`] with the same configuration type; nothing else
//! in the system normalizes or chunks document text.

use tracing::debug;
use uuid::Uuid;

use ragline_core::RawDocument;

use crate::normalize::normalize;
use crate::separator::split_spans;
use crate::size::constrain;
use crate::types::{ChildChunk, ParentSegment, SplitConfiguration, SplitError, SplitResult};

/// Split a document into parent segments and their child chunks.
///
/// Normalizes the text, cuts parent spans on the parent separator,
/// bounds them by the parent size/overlap, then repeats the same two
/// passes inside each parent with the child parameters. Positions are
/// assigned in text order; identifiers are fresh UUIDs whose values
/// never influence ordering or content. An empty (post-normalization)
/// document yields an empty result, not an error.
pub fn split(
    document: &RawDocument,
    config: &SplitConfiguration,
) -> Result<SplitResult, SplitError> {
    config.validate()?;

    let normalized = normalize(&document.text);
    if normalized.is_empty() {
        return Ok(SplitResult { parents: Vec::new() });
    }

    let parent_spans = constrain(
        split_spans(&normalized, &config.parent_separator),
        config.parent_chunk_size,
        config.parent_chunk_overlap,
    );

    let mut parents = Vec::with_capacity(parent_spans.len());
    for (position, span) in parent_spans.into_iter().enumerate() {
        let index_node_id = Uuid::new_v4();

        let child_spans = constrain(
            split_spans(&span.content, &config.child_separator),
            config.child_chunk_size,
            config.child_chunk_overlap,
        );
        let children: Vec<ChildChunk> = child_spans
            .into_iter()
            .enumerate()
            .map(|(child_position, child)| ChildChunk {
                id: Uuid::new_v4(),
                segment_id: index_node_id,
                content: child.content,
                position: child_position,
                char_start: child.char_start,
                char_end: child.char_end,
            })
            .collect();

        parents.push(ParentSegment {
            index_node_id,
            content: span.content,
            position,
            char_start: span.char_start,
            char_end: span.char_end,
            document_id: document.metadata.document_id,
            children,
        });
    }

    debug!(
        document_id = %document.metadata.document_id,
        parents = parents.len(),
        children = parents.iter().map(|p| p.children.len()).sum::<usize>(),
        "document split"
    );

    Ok(SplitResult { parents })
}
