use meridian_common::{Attributes, GraphNode, GraphRelationship};
use serde_json::Value;

use crate::serializable::GraphSerializable;

/// Node label for user vertices.
pub const USER_NODE_LABEL: &str = "User";

/// A catalog user, reduced to the fields this layer needs.
///
/// Usage records reference users by email. When the source system cannot
/// name the viewer (anonymized or externally-observed traffic), the usage
/// model emits this minimal shape directly: the email and an active flag,
/// every other profile field left to richer ingestion paths.
#[derive(Debug, Clone)]
pub struct User {
    email: String,
    node_emitted: bool,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            node_emitted: false,
        }
    }

    /// Canonical key for a user vertex — a pure function of the email alone.
    pub fn model_key(email: &str) -> String {
        email.to_string()
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl GraphSerializable for User {
    fn next_node(&mut self) -> Option<GraphNode> {
        if self.node_emitted {
            return None;
        }
        self.node_emitted = true;

        let mut attributes = Attributes::new();
        attributes.insert("email".to_string(), Value::from(self.email.as_str()));
        attributes.insert("is_active".to_string(), Value::from(true));

        Some(
            GraphNode::builder()
                .key(User::model_key(&self.email))
                .label(USER_NODE_LABEL)
                .attributes(attributes)
                .build(),
        )
    }

    fn next_relationship(&mut self) -> Option<GraphRelationship> {
        None
    }
}
