//! Dashboard identity: node label and composite key construction.

pub mod usage;

/// Node label for dashboard vertices.
pub const DASHBOARD_NODE_LABEL: &str = "Dashboard";

/// Format the canonical dashboard key:
/// `{product}_dashboard://{cluster}.{dashboard_group}/{dashboard_id}`
///
/// Pure and total over its inputs. Missing segments format as empty strings
/// rather than erroring; the store treats the result as a literal key, so
/// distinct segment tuples never collide.
pub fn dashboard_key(
    product: &str,
    cluster: &str,
    dashboard_group: &str,
    dashboard_id: &str,
) -> String {
    format!("{product}_dashboard://{cluster}.{dashboard_group}/{dashboard_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_embeds_all_four_segments() {
        assert_eq!(
            dashboard_key("mode", "gold", "eng", "dash1"),
            "mode_dashboard://gold.eng/dash1"
        );
    }

    #[test]
    fn empty_segments_degrade_into_the_literal_key() {
        assert_eq!(dashboard_key("", "gold", "", ""), "_dashboard://gold./");
    }

    #[test]
    fn distinct_tuples_produce_distinct_keys() {
        let base = dashboard_key("mode", "gold", "eng", "dash1");
        assert_ne!(base, dashboard_key("mode", "gold", "eng", "dash2"));
        assert_ne!(base, dashboard_key("mode", "gold", "ops", "dash1"));
        assert_ne!(base, dashboard_key("mode", "dev", "eng", "dash1"));
        assert_ne!(base, dashboard_key("looker", "gold", "eng", "dash1"));
    }
}
