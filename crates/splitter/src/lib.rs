//! Hierarchical document splitting engine.
//!
//! Partitions normalized document text into parent segments and child
//! chunks with configurable separators, sizes, and overlaps, tracking
//! exact character offsets at both levels. Pure and synchronous: given
//! the same text and configuration, two independent invocations produce
//! byte-identical content sequences, which is what lets the upload
//! pipeline and the preview endpoint share one code path.

mod hierarchy;
mod normalize;
mod separator;
mod size;
mod types;

pub use hierarchy::split;
pub use normalize::normalize;
pub use types::{ChildChunk, ParentSegment, Span, SplitConfiguration, SplitError, SplitResult};
