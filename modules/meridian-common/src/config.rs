use std::env;

use crate::error::MeridianError;

/// Key-namespace defaults loaded from environment variables.
///
/// Composite keys embed a product and a cluster segment. Source records that
/// do not carry their own values fall back to these.
#[derive(Debug, Clone)]
pub struct Config {
    /// Product namespace segment. Env: `MERIDIAN_PRODUCT`. Default: `""`.
    pub default_product: String,
    /// Cluster namespace segment. Env: `MERIDIAN_CLUSTER`. Default: `"gold"`.
    pub default_cluster: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// documented defaults for anything unset.
    ///
    /// An explicitly empty cluster is rejected: it would silently produce
    /// degenerate keys for every record ingested under this config.
    pub fn from_env() -> Result<Self, MeridianError> {
        let default_cluster =
            env::var("MERIDIAN_CLUSTER").unwrap_or_else(|_| "gold".to_string());
        if default_cluster.is_empty() {
            return Err(MeridianError::Config(
                "MERIDIAN_CLUSTER must not be empty".to_string(),
            ));
        }

        Ok(Self {
            default_product: env::var("MERIDIAN_PRODUCT").unwrap_or_default(),
            default_cluster,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_product: String::new(),
            default_cluster: "gold".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.default_product, "");
        assert_eq!(config.default_cluster, "gold");
    }

    #[test]
    fn empty_cluster_is_a_config_error() {
        env::set_var("MERIDIAN_CLUSTER", "");
        let result = Config::from_env();
        env::remove_var("MERIDIAN_CLUSTER");

        assert!(matches!(result, Err(MeridianError::Config(_))));
    }
}
