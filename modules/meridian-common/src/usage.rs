//! Relation-type vocabulary for usage edges.
//!
//! These strings are shared with the graph store schema; changing one is a
//! store migration, not a refactor.

/// A user read a resource (user → resource direction).
pub const READ_RELATION_TYPE: &str = "READ";

/// A resource was read by a user (resource → user direction).
pub const READ_REVERSE_RELATION_TYPE: &str = "READ_BY";

/// Attribute holding the read count on a usage edge.
pub const READ_RELATION_COUNT_PROPERTY: &str = "read_count";
