//! Display-ready graph structures.

use std::collections::BTreeMap;

use serde::Serialize;

/// One graph node at one timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Stable node id (the channel's short label).
    pub id: String,
    /// Display label; equals `id` for this domain.
    pub label: String,
    /// Full network name.
    pub full_name: String,
    /// Number of edges touching this node in this frame.
    pub degree: usize,
}

/// One weighted edge at one timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Raw edge weight (never normalised).
    pub weight: f64,
}

/// One timestamp's graph: nodes plus edges, never mutated after building.
#[derive(Debug, Clone, Serialize)]
pub struct GraphFrame {
    /// 0-based frame index.
    pub timestamp: usize,
    /// Node records in channel order.
    pub nodes: Vec<Node>,
    /// Edge records; upper triangle only for symmetric frames.
    pub edges: Vec<Edge>,
    /// Passthrough request metadata.
    pub metadata: BTreeMap<String, String>,
}

/// Global min/max of all edge weights across a frame sequence.
///
/// Computed once after the full pipeline runs and used purely for display
/// scaling; pipeline values themselves are never normalised against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataRange {
    /// Smallest edge weight in the sequence.
    pub min: f64,
    /// Largest edge weight in the sequence.
    pub max: f64,
}

/// Metadata record accompanying a frame sequence.
#[derive(Debug, Clone, Serialize)]
pub struct GraphMeta {
    /// Number of frames.
    pub frame_count: usize,
    /// Attributes present on each node record.
    pub node_attributes: Vec<String>,
    /// Attributes present on each edge record.
    pub edge_attributes: Vec<String>,
    /// Global minimum edge weight.
    pub edge_weight_min: f64,
    /// Global maximum edge weight.
    pub edge_weight_max: f64,
    /// Human-readable description of the request.
    pub description: Option<String>,
}

/// The complete boundary-layer payload for one request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphOutput {
    /// Frames in timestamp order.
    pub frames: Vec<GraphFrame>,
    /// Sequence-level metadata.
    pub meta: GraphMeta,
    /// Whether edges are undirected (upper triangle only).
    pub symmetric: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_serialises_with_expected_fields() {
        let frame = GraphFrame {
            timestamp: 3,
            nodes: vec![Node {
                id: "aDMN".to_string(),
                label: "aDMN".to_string(),
                full_name: "Anterior Default Mode Network".to_string(),
                degree: 2,
            }],
            edges: vec![Edge {
                source: "aDMN".to_string(),
                target: "V1".to_string(),
                weight: 0.75,
            }],
            metadata: BTreeMap::from([("method".to_string(), "pearson".to_string())]),
        };

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["timestamp"], 3);
        assert_eq!(json["nodes"][0]["id"], "aDMN");
        assert_eq!(json["nodes"][0]["degree"], 2);
        assert_eq!(json["edges"][0]["source"], "aDMN");
        assert_eq!(json["edges"][0]["weight"], 0.75);
        assert_eq!(json["metadata"]["method"], "pearson");
    }

    #[test]
    fn meta_serialises_description_null_when_absent() {
        let meta = GraphMeta {
            frame_count: 1,
            node_attributes: vec!["label".to_string(), "degree".to_string()],
            edge_attributes: vec!["weight".to_string()],
            edge_weight_min: -0.5,
            edge_weight_max: 0.9,
            description: None,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["frame_count"], 1);
        assert!(json["description"].is_null());
        assert_eq!(json["edge_weight_min"], -0.5);
    }

    #[test]
    fn data_range_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<DataRange>();
    }
}
