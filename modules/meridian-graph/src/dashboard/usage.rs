use meridian_common::{
    Attributes, Config, GraphNode, GraphRelationship, READ_RELATION_COUNT_PROPERTY,
    READ_RELATION_TYPE, READ_REVERSE_RELATION_TYPE,
};
use serde_json::Value;
use tracing::debug;

use crate::dashboard::{dashboard_key, DASHBOARD_NODE_LABEL};
use crate::serializable::GraphSerializable;
use crate::user::{User, USER_NODE_LABEL};

/// One "user viewed this dashboard N times" fact.
///
/// Drained through [`GraphSerializable`], a record produces exactly one
/// `READ_BY`/`READ` edge between the dashboard and the user, and optionally
/// one minimal user node when the viewer is not known to the catalog through
/// any other ingestion path (anonymized or externally-observed traffic).
///
/// The view count is passed through unchanged, sign included. Downstream
/// consumers treat it as a non-negative count; this layer does not enforce
/// that.
#[derive(Debug)]
pub struct DashboardUsage {
    dashboard_group_id: Option<String>,
    dashboard_id: Option<String>,
    email: String,
    view_count: i64,
    should_create_user_node: bool,
    product: String,
    cluster: String,
    user: User,
    relation_emitted: bool,
}

impl DashboardUsage {
    /// Build a usage record with the documented defaults: no user node
    /// creation, empty product, `gold` cluster.
    ///
    /// Group and dashboard ids are key segments only — absent values format
    /// into the key as empty strings, no validation here.
    pub fn new(
        dashboard_group_id: Option<String>,
        dashboard_id: Option<String>,
        email: impl Into<String>,
        view_count: i64,
    ) -> Self {
        let email = email.into();
        let user = User::new(email.clone());
        Self {
            dashboard_group_id,
            dashboard_id,
            email,
            view_count,
            should_create_user_node: false,
            product: String::new(),
            cluster: "gold".to_string(),
            user,
            relation_emitted: false,
        }
    }

    /// Take the product and cluster segments from loaded configuration
    /// instead of the built-in defaults.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.product = config.default_product.clone();
        self.cluster = config.default_cluster.clone();
        self
    }

    /// Emit a user node built from only the email alongside the edge.
    ///
    /// Enable this when it is acceptable to create or update the user vertex
    /// from nothing but the email — every other profile field is left empty.
    pub fn create_user_node(mut self, create: bool) -> Self {
        self.should_create_user_node = create;
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    fn usage_relationship(&self) -> GraphRelationship {
        let mut attributes = Attributes::new();
        attributes.insert(
            READ_RELATION_COUNT_PROPERTY.to_string(),
            Value::from(self.view_count),
        );

        GraphRelationship::builder()
            .start_label(DASHBOARD_NODE_LABEL)
            .start_key(dashboard_key(
                &self.product,
                &self.cluster,
                self.dashboard_group_id.as_deref().unwrap_or(""),
                self.dashboard_id.as_deref().unwrap_or(""),
            ))
            .end_label(USER_NODE_LABEL)
            .end_key(User::model_key(&self.email))
            .rel_type(READ_REVERSE_RELATION_TYPE)
            .reverse_type(READ_RELATION_TYPE)
            .attributes(attributes)
            .build()
    }
}

impl GraphSerializable for DashboardUsage {
    fn next_node(&mut self) -> Option<GraphNode> {
        if !self.should_create_user_node {
            return None;
        }
        let node = self.user.next_node()?;
        debug!(email = %self.email, "emitting placeholder user node for usage edge");
        Some(node)
    }

    fn next_relationship(&mut self) -> Option<GraphRelationship> {
        if self.relation_emitted {
            return None;
        }
        self.relation_emitted = true;
        Some(self.usage_relationship())
    }
}
