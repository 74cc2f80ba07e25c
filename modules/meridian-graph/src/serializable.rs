//! Pull-based emission contract for graph-producing domain models.

use meridian_common::{GraphNode, GraphRelationship};

/// A domain record that can emit itself as graph nodes and relationships.
///
/// The publisher drains a record by calling each method until it returns
/// `None`, then writes what it pulled to the store. Nothing is materialized
/// up front: a record yields items one call at a time.
///
/// The two streams are independent — node calls and relationship calls may
/// be interleaved in any order — but each stream yields its own items in a
/// fixed order and never repeats one. Streams are single-pass: once a stream
/// is exhausted it stays exhausted, and further calls keep returning `None`.
///
/// Calls are deterministic given the record's construction inputs and have
/// no effect beyond advancing the stream position. `&mut self` makes
/// exclusive access to one record a compile-time guarantee; distinct records
/// are independent and may be drained on different threads.
pub trait GraphSerializable {
    /// Next node, or `None` once the node stream is exhausted.
    fn next_node(&mut self) -> Option<GraphNode>;

    /// Next relationship, or `None` once the relationship stream is exhausted.
    fn next_relationship(&mut self) -> Option<GraphRelationship>;
}
