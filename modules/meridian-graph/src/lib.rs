pub mod dashboard;
pub mod serializable;
pub mod user;

pub use dashboard::usage::DashboardUsage;
pub use dashboard::{dashboard_key, DASHBOARD_NODE_LABEL};
pub use serializable::GraphSerializable;
pub use user::{User, USER_NODE_LABEL};
