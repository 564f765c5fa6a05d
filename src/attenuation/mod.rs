//! Graph-based attenuation of node complexity.
//!
//! A node that almost always appears under the same parent carries little
//! information, so its complexity is scaled by the self-information of the
//! `parent -> child` edge in the project graph. Attenuation is optional:
//! whenever the graph is unavailable the weight is a neutral `1.0` and the
//! highlight pipeline behaves exactly as if attenuation did not exist.

mod graph;

pub use graph::{GraphSource, ProjectGraphFile, WeightedEdge, WeightedGraph, WeightedGraphNode};

use crate::config::AttenuationConfig;

/// Weight applied when no attenuation data exists for a node.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Attenuation state for one analysis pass.
///
/// Loaded once per pass and never mutated afterwards. Reload before each
/// pass if the project graph may have been regenerated.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Attenuation {
    #[default]
    Disabled,
    Active(WeightedGraph),
}

impl Attenuation {
    /// Load the project graph if attenuation is enabled.
    ///
    /// Never fails: a disabled feature, a missing or malformed graph all
    /// produce [`Attenuation::Disabled`].
    pub fn load<S: GraphSource>(config: &AttenuationConfig, source: &S) -> Self {
        if !config.enabled {
            log::debug!("Attenuation disabled");
            return Self::Disabled;
        }

        match source.load_graph() {
            Ok(Some(graph)) => {
                log::info!("Attenuation enabled ({} edges)", graph.edge_count());
                Self::Active(graph)
            }
            Ok(None) => {
                log::info!(
                    "Project analysis not found. Run a project analysis to enable attenuation."
                );
                Self::Disabled
            }
            Err(e) => {
                log::info!("Error loading project analysis for attenuation: {}", e);
                Self::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Multiplier for `child` appearing under `parent`.
    ///
    /// Returns [`NEUTRAL_WEIGHT`] when attenuation is disabled, the node has
    /// no parent, the parent or edge is unknown, or the edge carries no
    /// usable self-information.
    pub fn weight(&self, parent: Option<&str>, child: &str) -> f64 {
        let Self::Active(graph) = self else {
            return NEUTRAL_WEIGHT;
        };

        parent
            .and_then(|parent| graph.edge(parent, child))
            .and_then(|edge| edge.self_information)
            .filter(|weight| weight.is_finite())
            .unwrap_or(NEUTRAL_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, Result};

    struct FailingSource;

    impl GraphSource for FailingSource {
        fn load_graph(&self) -> Result<Option<WeightedGraph>> {
            Err(Error::configuration("project graph is corrupt"))
        }
    }

    struct EmptySource;

    impl GraphSource for EmptySource {
        fn load_graph(&self) -> Result<Option<WeightedGraph>> {
            Ok(None)
        }
    }

    fn enabled() -> AttenuationConfig {
        AttenuationConfig { enabled: true }
    }

    fn foo_bar_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.insert_edge("foo", WeightedEdge::new("bar", 120, 0.1));
        graph
    }

    #[test]
    fn test_disabled_config_skips_loading() {
        let attenuation = Attenuation::load(&AttenuationConfig { enabled: false }, &foo_bar_graph());
        assert_eq!(attenuation, Attenuation::Disabled);
        assert_eq!(attenuation.weight(Some("foo"), "bar"), NEUTRAL_WEIGHT);
    }

    #[test]
    fn test_load_failure_degrades_to_disabled() {
        assert!(!Attenuation::load(&enabled(), &FailingSource).is_enabled());
        assert!(!Attenuation::load(&enabled(), &EmptySource).is_enabled());
    }

    struct CapturingLogger;

    static RECORDS: std::sync::Mutex<Vec<(log::Level, String)>> = std::sync::Mutex::new(Vec::new());
    static CAPTURING_LOGGER: CapturingLogger = CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_corrupt_project_graph_is_an_informational_note() {
        if log::set_logger(&CAPTURING_LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }

        Attenuation::load(&enabled(), &FailingSource);

        let records = RECORDS.lock().unwrap();
        let levels: Vec<log::Level> = records
            .iter()
            .filter(|(_, message)| message.contains("project graph is corrupt"))
            .map(|(level, _)| *level)
            .collect();
        assert!(!levels.is_empty());
        assert!(levels.iter().all(|level| *level == log::Level::Info));
    }

    #[test]
    fn test_known_edge_returns_self_information() {
        let attenuation = Attenuation::load(&enabled(), &foo_bar_graph());
        assert!(attenuation.is_enabled());
        assert_eq!(attenuation.weight(Some("foo"), "bar"), 0.1);
    }

    #[test]
    fn test_missing_data_is_neutral() {
        let attenuation = Attenuation::Active(foo_bar_graph());

        assert_eq!(attenuation.weight(None, "bar"), NEUTRAL_WEIGHT);
        assert_eq!(attenuation.weight(Some("qux"), "bar"), NEUTRAL_WEIGHT);
        assert_eq!(attenuation.weight(Some("foo"), "baz"), NEUTRAL_WEIGHT);
    }

    #[test]
    fn test_edge_without_self_information_is_neutral() {
        let mut graph = WeightedGraph::new();
        graph.insert_edge(
            "foo",
            WeightedEdge {
                name: "bar".to_string(),
                count: 3,
                self_information: None,
            },
        );
        graph.insert_edge("foo", WeightedEdge::new("nan", 3, f64::NAN));

        let attenuation = Attenuation::Active(graph);
        assert_eq!(attenuation.weight(Some("foo"), "bar"), NEUTRAL_WEIGHT);
        assert_eq!(attenuation.weight(Some("foo"), "nan"), NEUTRAL_WEIGHT);
    }

    #[test]
    fn test_graph_deserializes_from_project_json() {
        let json = r#"{
            "nodes": {
                "function_item": {
                    "edges": {
                        "block": {"name": "block", "count": 812, "self_information": 0.031}
                    }
                }
            }
        }"#;

        let graph: WeightedGraph = serde_json::from_str(json).unwrap();
        let edge = graph.edge("function_item", "block").unwrap();
        assert_eq!(edge.count, 812);
        assert_eq!(edge.self_information, Some(0.031));
    }
}
