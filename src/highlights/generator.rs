use serde::Serialize;

use super::color::Rgba;
use crate::analysis::{Analysis, AnalysisNode, Span};
use crate::attenuation::Attenuation;
use crate::config::HighlightConfig;

/// A prospective highlight, before overlap resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightCandidate {
    pub span: Span,
    pub attenuated_complexity: f64,
    /// Always in `(0, 1]`
    pub normalized_complexity: f64,
    pub color: Rgba,
    pub hover_text: String,
}

/// Lowest and highest non-zero complexity of a node set.
///
/// Zero-complexity nodes never set either bound. With no non-zero value
/// there is no range and every normalization is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityRange {
    bounds: Option<(f64, f64)>,
}

impl ComplexityRange {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let bounds = values
            .into_iter()
            .filter(|&value| value != 0.0)
            .fold(None, |bounds, value| match bounds {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            });
        Self { bounds }
    }

    pub fn min(&self) -> Option<f64> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<f64> {
        self.bounds.map(|(_, max)| max)
    }

    /// `(value - min) / (max - min)`.
    ///
    /// Not finite when the range is missing or collapsed to a single value.
    pub fn normalize(&self, value: f64) -> f64 {
        match self.bounds {
            Some((min, max)) => (value - min) / (max - min),
            None => f64::NAN,
        }
    }
}

pub fn format_hover(attenuated_complexity: f64) -> String {
    format!("Complexity: {:.2}", attenuated_complexity)
}

/// Attenuate, filter, normalize and colour every node of `analysis`.
///
/// The result is unordered and may contain overlapping spans; pass it to
/// [`resolve_overlaps`](super::resolve_overlaps) before display.
pub fn generate_candidates(
    analysis: &Analysis,
    attenuation: &Attenuation,
    config: &HighlightConfig,
) -> Vec<HighlightCandidate> {
    let _span = tracing::debug_span!(
        "generate_candidates",
        nodes = analysis.nodes.len(),
        attenuation = attenuation.is_enabled()
    )
    .entered();

    log::info!(
        "Using complexity threshold: {}, highlight alpha: {}, min complexity per LOC: {}",
        config.complexity_threshold,
        config.highlight_alpha,
        config.min_complexity_per_loc
    );

    let attenuated = attenuate_nodes(analysis, attenuation, config.min_complexity_per_loc);
    log::info!(
        "Nodes after absolute complexity filter: {}/{}",
        attenuated.len(),
        analysis.nodes.len()
    );

    let range = ComplexityRange::from_values(attenuated.iter().map(|(_, complexity)| *complexity));
    log::debug!(
        "Attenuated complexity range: {:?}..{:?}",
        range.min(),
        range.max()
    );

    let candidates: Vec<HighlightCandidate> = attenuated
        .into_iter()
        .filter_map(|(node, complexity)| {
            let normalized = range.normalize(complexity);
            // Zero, negative (zero-complexity nodes below the range floor) and
            // NaN (collapsed range) never reach the output.
            if !normalized.is_finite() || normalized <= 0.0 {
                return None;
            }
            if normalized < config.complexity_threshold {
                return None;
            }
            Some(HighlightCandidate {
                span: node.span,
                attenuated_complexity: complexity,
                normalized_complexity: normalized,
                color: Rgba::from_normalized(normalized, config.highlight_alpha),
                hover_text: format_hover(complexity),
            })
        })
        .collect();

    log::debug!("{} highlight candidates above threshold", candidates.len());
    candidates
}

fn attenuate_nodes<'a>(
    analysis: &'a Analysis,
    attenuation: &Attenuation,
    min_complexity: f64,
) -> Vec<(&'a AnalysisNode, f64)> {
    analysis
        .nodes
        .iter()
        .map(|node| {
            let weight = attenuation.weight(node.parent_name.as_deref(), &node.name);
            (node, node.complexity * weight)
        })
        .filter(|(_, complexity)| *complexity >= min_complexity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attenuation::{WeightedEdge, WeightedGraph};

    fn node(complexity: f64, line: u32, name: &str, parent: Option<&str>) -> AnalysisNode {
        AnalysisNode::new(
            complexity,
            Span::from_coords(line, 0, line, 10),
            name,
            parent.map(str::to_string),
        )
    }

    fn analysis(complexities: &[f64]) -> Analysis {
        Analysis::from_nodes(
            complexities
                .iter()
                .enumerate()
                .map(|(i, &c)| node(c, i as u32, "expr", None))
                .collect(),
        )
    }

    fn normalized_by_line(candidates: &[HighlightCandidate]) -> Vec<(u32, f64)> {
        let mut values: Vec<_> = candidates
            .iter()
            .map(|c| (c.span.start.line, c.normalized_complexity))
            .collect();
        values.sort_by_key(|(line, _)| *line);
        values
    }

    #[test]
    fn test_range_ignores_zero() {
        let range = ComplexityRange::from_values([0.0, 4.0, 2.0, 0.0, 9.0]);
        assert_eq!(range.min(), Some(2.0));
        assert_eq!(range.max(), Some(9.0));
        assert_eq!(range.normalize(9.0), 1.0);
    }

    #[test]
    fn test_range_without_nonzero_values_is_nan() {
        let range = ComplexityRange::from_values([0.0, 0.0]);
        assert_eq!(range.min(), None);
        assert!(range.normalize(0.0).is_nan());
    }

    #[test]
    fn test_threshold_and_floor_filtering() {
        // min=1, max=10 -> [1.0, 0.444, 0.0]
        let candidates = generate_candidates(
            &analysis(&[10.0, 5.0, 1.0]),
            &Attenuation::Disabled,
            &HighlightConfig::default(),
        );

        assert_eq!(normalized_by_line(&candidates), vec![(0, 1.0)]);
        assert_eq!(candidates[0].hover_text, "Complexity: 10.00");
        assert_eq!(candidates[0].color.to_hex(), "#ff00004d");
    }

    #[test]
    fn test_zero_threshold_keeps_all_but_range_floor() {
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            ..Default::default()
        };
        let candidates = generate_candidates(&analysis(&[10.0, 5.0, 1.0]), &Attenuation::Disabled, &config);
        let lines: Vec<u32> = normalized_by_line(&candidates)
            .into_iter()
            .map(|(line, _)| line)
            .collect();
        assert_eq!(lines, vec![0, 1]);
    }

    #[test]
    fn test_zero_complexity_nodes_never_highlighted() {
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            ..Default::default()
        };
        let candidates =
            generate_candidates(&analysis(&[0.0, 3.0, 6.0, 0.0]), &Attenuation::Disabled, &config);

        assert_eq!(normalized_by_line(&candidates), vec![(2, 1.0)]);
    }

    #[test]
    fn test_identical_complexities_yield_nothing() {
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            ..Default::default()
        };
        let candidates =
            generate_candidates(&analysis(&[5.0, 5.0, 5.0]), &Attenuation::Disabled, &config);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_all_zero_yields_nothing() {
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            ..Default::default()
        };
        let candidates =
            generate_candidates(&analysis(&[0.0, 0.0]), &Attenuation::Disabled, &config);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_min_complexity_per_loc_applies_before_normalization() {
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            highlight_alpha: 0.3,
            min_complexity_per_loc: 2.0,
        };
        // 1.0 is dropped first, so the floor becomes 2.0: [1.0, 0.0(dropped), 0.375]
        let candidates =
            generate_candidates(&analysis(&[10.0, 2.0, 5.0, 1.0]), &Attenuation::Disabled, &config);

        assert_eq!(normalized_by_line(&candidates), vec![(0, 1.0), (2, 0.375)]);
    }

    #[test]
    fn test_attenuation_scales_before_normalization() {
        let mut graph = WeightedGraph::new();
        graph.insert_edge("foo", WeightedEdge::new("bar", 50, 0.1));
        let nodes = vec![
            node(10.0, 0, "bar", Some("foo")),
            node(10.0, 1, "baz", None),
            node(5.5, 2, "qux", None),
        ];
        let config = HighlightConfig {
            complexity_threshold: 0.0,
            ..Default::default()
        };

        let candidates = generate_candidates(
            &Analysis::from_nodes(nodes),
            &Attenuation::Active(graph),
            &config,
        );

        // bar attenuates to 1.0 and becomes the floor; baz stays at 10.0.
        assert_eq!(normalized_by_line(&candidates), vec![(1, 1.0), (2, 0.5)]);
        let baz = candidates.iter().find(|c| c.span.start.line == 1).unwrap();
        assert_eq!(baz.attenuated_complexity, 10.0);
    }

    #[test]
    fn test_hover_uses_attenuated_complexity() {
        assert_eq!(format_hover(1.0), "Complexity: 1.00");
        assert_eq!(format_hover(3.14159), "Complexity: 3.14");
    }

    #[test]
    fn test_empty_analysis() {
        let candidates = generate_candidates(
            &Analysis::empty(),
            &Attenuation::Disabled,
            &HighlightConfig::default(),
        );
        assert!(candidates.is_empty());
    }
}
