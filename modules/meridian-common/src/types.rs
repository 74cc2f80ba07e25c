use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

/// Attribute map carried by nodes and relationships.
///
/// `BTreeMap` keeps attribute order stable, so serialized output is
/// deterministic across runs for the same record.
pub type Attributes = BTreeMap<String, Value>;

/// One graph vertex: a unique key, a label, and its attributes.
///
/// Value object — immutable once built. The key is the vertex identity in
/// the store; the label selects the vertex type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct GraphNode {
    #[builder(setter(into))]
    pub key: String,
    #[builder(setter(into))]
    pub label: String,
    #[builder(default)]
    pub attributes: Attributes,
}

/// One directed edge between two keyed vertices.
///
/// The store materializes two typed directions from a single logical edge,
/// so the forward and reverse type tags travel together on the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct GraphRelationship {
    #[builder(setter(into))]
    pub start_label: String,
    #[builder(setter(into))]
    pub start_key: String,
    #[builder(setter(into))]
    pub end_label: String,
    #[builder(setter(into))]
    pub end_key: String,
    /// Forward type tag, named from the start vertex's perspective.
    #[serde(rename = "type")]
    #[builder(setter(into))]
    pub rel_type: String,
    /// Type tag for the materialized opposite direction.
    #[builder(setter(into))]
    pub reverse_type: String,
    #[builder(default)]
    pub attributes: Attributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_builder_defaults_to_empty_attributes() {
        let node = GraphNode::builder().key("k1").label("Thing").build();
        assert_eq!(node.key, "k1");
        assert_eq!(node.label, "Thing");
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn relationship_serializes_forward_type_as_type() {
        let rel = GraphRelationship::builder()
            .start_label("Dashboard")
            .start_key("d1")
            .end_label("User")
            .end_key("u1")
            .rel_type("READ_BY")
            .reverse_type("READ")
            .build();

        let value = serde_json::to_value(&rel).unwrap();
        assert_eq!(value["type"], json!("READ_BY"));
        assert_eq!(value["reverse_type"], json!("READ"));
        assert!(value.get("rel_type").is_none());
    }
}
