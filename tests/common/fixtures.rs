//! Shared fixtures: a realistic reference pipeline and its definitions.
//!
//! The reference graph models
//! `apply(reduce_time(reduce_bands(load_collection, ndvi(red, nir)), max), save)`
//! with `linear_scale_range` as the body of `apply` — ten nodes across two
//! hierarchy levels, wired with `"data"` edges for direct inputs and
//! `"callback"` edges for the three embedded sub-graphs.

use procgraph::graph::{Edge, Graph, Node};
use procgraph::process::{CALLBACK_LINK, DATA_LINK, ProcessContent};
use procgraph::registry::Registry;
use serde_json::json;

fn content(document: serde_json::Value) -> ProcessContent {
    serde_json::from_value(document).expect("fixture content decodes")
}

/// Attach each edge to its descendant-side node only; callers run
/// `update()` to complete symmetry, the way a translator would.
#[allow(dead_code)]
pub fn max_ndvi_pipeline() -> Graph<ProcessContent> {
    let nodes = vec![
        Node::new("apply_0")
            .with_name("apply")
            .with_depth(0)
            .with_content(content(json!({
                "process_id": "apply",
                "arguments": {
                    "data": {"from_node": "reduce_time_7"},
                    "process": {"parameters": [{"name": "x"}]}
                },
            }))),
        Node::new("load_collection_2")
            .with_name("load_collection")
            .with_depth(0)
            .with_content(content(json!({
                "process_id": "load_collection",
                "arguments": {
                    "id": "COPERNICUS/S2",
                    "spatial_extent": {"west": 16.1, "east": 16.6, "north": 48.6, "south": 47.2},
                    "temporal_extent": ["2018-01-01", "2018-06-30"],
                    "bands": ["B4", "B8"]
                },
            }))),
        Node::new("reduce_bands_3")
            .with_name("reduce_bands")
            .with_depth(0)
            .with_content(content(json!({
                "process_id": "reduce",
                "arguments": {
                    "data": {"from_node": "load_collection_2"},
                    "dimension": "bands",
                    "reducer": {"parameters": [{"name": "data"}]}
                },
            }))),
        Node::new("reduce_time_7")
            .with_name("reduce_time")
            .with_depth(0)
            .with_content(content(json!({
                "process_id": "reduce",
                "arguments": {
                    "data": {"from_node": "reduce_bands_3"},
                    "dimension": "temporal",
                    "reducer": {"parameters": [{"name": "data"}]}
                },
            }))),
        Node::new("save_9")
            .with_name("save")
            .with_depth(0)
            .with_content(content(json!({
                "process_id": "save_result",
                "arguments": {
                    "data": {"from_node": "apply_0"},
                    "format": "GTiff"
                },
                "result": true,
            }))),
        Node::new("linear_scale_range_1")
            .with_name("linear_scale_range")
            .with_depth(1)
            .with_content(content(json!({
                "process_id": "linear_scale_range",
                "arguments": {
                    "x": {"from_parameter": "x"},
                    "inputMin": -1,
                    "inputMax": 1
                },
                "result": true,
            }))),
        Node::new("red_4")
            .with_name("red")
            .with_depth(1)
            .with_content(content(json!({
                "process_id": "array_element",
                "arguments": {
                    "data": {"from_parameter": "data"},
                    "index": 0
                },
            }))),
        Node::new("nir_5")
            .with_name("nir")
            .with_depth(1)
            .with_content(content(json!({
                "process_id": "array_element",
                "arguments": {
                    "data": {"from_parameter": "data"},
                    "index": 1
                },
            }))),
        Node::new("ndvi_6")
            .with_name("ndvi")
            .with_depth(1)
            .with_content(content(json!({
                "process_id": "normalized_difference",
                "arguments": {
                    "x": {"from_node": "nir_5"},
                    "y": {"from_node": "red_4"}
                },
                "result": true,
            }))),
        Node::new("max_8")
            .with_name("max")
            .with_depth(1)
            .with_content(content(json!({
                "process_id": "max",
                "arguments": {
                    "data": {"from_parameter": "data"}
                },
                "result": true,
            }))),
    ];

    let mut graph = Graph::from_list(nodes);

    let data_edges = [
        ("load_collection_2", "reduce_bands_3"),
        ("load_collection_2", "red_4"),
        ("load_collection_2", "nir_5"),
        ("red_4", "ndvi_6"),
        ("nir_5", "ndvi_6"),
        ("reduce_bands_3", "reduce_time_7"),
        ("reduce_bands_3", "max_8"),
        ("reduce_time_7", "apply_0"),
        ("reduce_time_7", "linear_scale_range_1"),
        ("apply_0", "save_9"),
    ];
    for (producer, consumer) in data_edges {
        graph
            .get_mut(&consumer.into())
            .expect("fixture node")
            .add_edge(Edge::new(DATA_LINK, [producer.into(), consumer.into()]));
    }

    let callback_edges = [
        ("ndvi_6", "reduce_bands_3"),
        ("max_8", "reduce_time_7"),
        ("linear_scale_range_1", "apply_0"),
    ];
    for (child, parent) in callback_edges {
        graph
            .get_mut(&parent.into())
            .expect("fixture node")
            .add_edge(Edge::new(CALLBACK_LINK, [child.into(), parent.into()]));
    }

    graph.update();
    graph
}

/// Definitions matching every process and collection the reference
/// pipeline touches.
#[allow(dead_code)]
pub fn pipeline_registry() -> Registry {
    let processes = vec![
        json!({
            "id": "load_collection",
            "categories": ["import"],
            "parameters": [
                {"name": "id", "required": true},
                {"name": "spatial_extent", "required": true},
                {"name": "temporal_extent", "required": true},
                {"name": "bands", "default": null}
            ]
        }),
        json!({
            "id": "apply",
            "categories": ["cubes"],
            "parameters": [
                {"name": "data", "required": true},
                {"name": "process", "required": true}
            ]
        }),
        json!({
            "id": "reduce",
            "categories": ["cubes", "reducer"],
            "parameters": [
                {"name": "data", "required": true},
                {"name": "reducer", "required": true},
                {"name": "dimension", "required": true},
                {"name": "context", "default": null}
            ]
        }),
        json!({
            "id": "save_result",
            "categories": ["export"],
            "parameters": [
                {"name": "data", "required": true},
                {"name": "format", "required": true}
            ]
        }),
        json!({
            "id": "linear_scale_range",
            "categories": ["math"],
            "parameters": [
                {"name": "x", "required": true},
                {"name": "inputMin", "required": true},
                {"name": "inputMax", "required": true},
                {"name": "outputMin", "default": 0},
                {"name": "outputMax", "default": 1}
            ]
        }),
        json!({
            "id": "array_element",
            "categories": ["arrays"],
            "parameters": [
                {"name": "data", "required": true},
                {"name": "index", "required": true},
                {"name": "return_nodata", "default": false}
            ]
        }),
        json!({
            "id": "normalized_difference",
            "categories": ["math"],
            "parameters": [
                {"name": "x", "required": true},
                {"name": "y", "required": true}
            ]
        }),
        json!({
            "id": "max",
            "categories": ["math", "reducer"],
            "parameters": [
                {"name": "data", "required": true},
                {"name": "ignore_nodata", "default": true}
            ]
        }),
    ];
    let collections = vec![json!({
        "id": "COPERNICUS/S2",
        "title": "Sentinel-2 MSI Level-1C",
        "bands": [{"name": "B2"}, {"name": "B4"}, {"name": "B8"}]
    })];

    Registry::from_definitions(processes, collections).expect("fixture definitions decode")
}
