use mutagraph::{AttrMap, Edge, Graph, GraphError, GraphObject, GraphOptions, Node};

fn sample_graph() -> Graph {
    let mut graph = Graph::with_options(GraphOptions {
        multigraph: true,
        ..Default::default()
    });

    let mut alice = Node::with_id("alice", "person");
    alice.set_attr("name", "Alice");
    alice.set_attr("age", 30i64);
    alice.update_metadata({
        let mut m = AttrMap::new();
        m.insert("origin".to_string(), "import".into());
        m
    });
    graph.add_node(alice).unwrap();
    graph.add_node(Node::with_id("bob", "person")).unwrap();
    graph.add_node(Node::with_id("acme", "company")).unwrap();

    let mut works_at = Edge::with_id("e1", "alice", "acme", "works_at");
    works_at.set_attr("since", 2019i64);
    graph.add_edge(works_at).unwrap();
    graph
        .add_edge(Edge::with_id("e2", "alice", "bob", "knows"))
        .unwrap();

    graph
}

#[test]
fn object_round_trip_preserves_everything() {
    let graph = sample_graph();
    let restored = Graph::from_object(graph.to_object()).unwrap();

    assert_eq!(restored.options(), graph.options());
    assert_eq!(restored.to_object(), graph.to_object());

    let node_ids: Vec<&str> = restored.get_nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids, vec!["alice", "bob", "acme"]);
    let edge_ids: Vec<&str> = restored.get_edges().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["e1", "e2"]);
}

#[test]
fn json_round_trip_preserves_everything() {
    let graph = sample_graph();
    let json = graph.to_json().unwrap();
    let restored = Graph::from_json(&json).unwrap();

    assert_eq!(restored.to_object(), graph.to_object());
    assert_eq!(
        restored
            .get_node(&"alice".into())
            .unwrap()
            .get_attr("age")
            .unwrap()
            .as_integer(),
        Some(30)
    );
    assert_eq!(
        restored
            .get_edge(&"e1".into())
            .unwrap()
            .get_attr("since")
            .unwrap()
            .as_integer(),
        Some(2019)
    );
}

#[test]
fn restored_graph_keeps_adjacency_semantics() {
    let restored = Graph::from_object(sample_graph().to_object()).unwrap();

    assert!(restored.has_edge_between(&"alice".into(), &"acme".into()));
    let neighbors: Vec<&str> = restored
        .get_connected_nodes(&"alice".into())
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(neighbors, vec!["acme", "bob"]);
}

#[test]
fn edge_referencing_absent_node_is_a_structural_error() {
    let object = GraphObject {
        nodes: vec![Node::with_id("a", "test")],
        edges: vec![Edge::with_id("e1", "a", "missing", "link")],
        options: GraphOptions::default(),
    };

    assert_eq!(
        Graph::from_object(object).unwrap_err(),
        GraphError::MissingTarget("missing".into())
    );
}

#[test]
fn import_revalidates_multigraph_rule() {
    // Serialized under multigraph, re-imported without it
    let mut object = sample_graph().to_object();
    object.options.multigraph = false;
    object
        .edges
        .push(Edge::with_id("dup", "alice", "acme", "works_at"));

    assert!(matches!(
        Graph::from_object(object),
        Err(GraphError::DuplicateEdge(_, _))
    ));
}

#[test]
fn options_deserialize_with_defaults() {
    let graph = Graph::from_json(r#"{"nodes":[],"edges":[]}"#).unwrap();
    assert_eq!(graph.options(), &GraphOptions::default());
}

#[test]
fn serialized_shape_is_nodes_edges_options() {
    let mut graph = Graph::new();
    graph.add_node(Node::with_id("a", "test")).unwrap();

    let json = graph.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("nodes").unwrap().is_array());
    assert!(value.get("edges").unwrap().is_array());
    let options = value.get("options").unwrap();
    assert_eq!(options.get("directed").unwrap(), &serde_json::json!(true));

    let node = &value["nodes"][0];
    assert_eq!(node["id"], "a");
    assert_eq!(node["type"], "test");
    assert!(node["data"].is_object());
    assert!(node["metadata"].is_object());
}
