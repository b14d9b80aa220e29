use std::collections::HashMap;

use bevy::math::DVec3;

use crate::coord::GeoCoordinate;
use crate::projection::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// One city on the globe. The Cartesian `position` is derived from
/// `coordinate` by the projection at construction time and never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    label: String,
    coordinate: GeoCoordinate,
    position: DVec3,
}

impl Node {
    pub fn new<P: Projection>(
        id: NodeId,
        label: impl Into<String>,
        coordinate: GeoCoordinate,
        projection: &P,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            coordinate,
            position: projection.project(&coordinate),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }
}

/// An unordered connection between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Normalized key identifying the unordered pair.
    fn key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0:?} already exists")]
    DuplicateNode(NodeId),
    #[error("node limit of {0} reached")]
    NodeLimitExceeded(usize),
    #[error("edge {0:?} -> {1:?} is a self-loop or a duplicate")]
    InvalidEdge(NodeId, NodeId),
    #[error("node {0:?} is not in the graph")]
    UnknownNode(NodeId),
}

/// A simple undirected graph over [`Node`]s.
///
/// Nodes and edges are kept in insertion order. The graph only grows: it is
/// built once at startup and read by the rendering systems afterwards, so
/// there are no removal operations. Every rejected mutation leaves the graph
/// untouched.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    node_limit: Option<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph that rejects node inserts beyond `limit`.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        if self.node_index.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        if let Some(limit) = self.node_limit {
            if self.nodes.len() >= limit {
                return Err(GraphError::NodeLimitExceeded(limit));
            }
        }
        let id = node.id;
        self.node_index.insert(id, self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if !self.node_index.contains_key(&a) {
            return Err(GraphError::UnknownNode(a));
        }
        if !self.node_index.contains_key(&b) {
            return Err(GraphError::UnknownNode(b));
        }
        if a == b {
            return Err(GraphError::InvalidEdge(a, b));
        }
        let key = Edge::key(a, b);
        if self
            .edges
            .iter()
            .any(|edge| Edge::key(edge.source, edge.target) == key)
        {
            return Err(GraphError::InvalidEdge(a, b));
        }
        self.edges.push(Edge {
            source: a,
            target: b,
        });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).and_then(|&i| self.nodes.get(i))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::SphericalProjection;

    fn node(id: u32) -> Node {
        let projection = SphericalProjection::default();
        Node::new(
            NodeId(id),
            format!("city {id}"),
            GeoCoordinate::new(10.0 * id as f64 - 40.0, 20.0 * id as f64),
            &projection,
        )
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node(node(1)), Ok(NodeId(1)));
        assert_eq!(
            graph.add_node(node(1)),
            Err(GraphError::DuplicateNode(NodeId(1)))
        );
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn node_limit_is_enforced() {
        let mut graph = Graph::with_node_limit(3);
        let mut accepted = 0;
        for id in 0..5 {
            match graph.add_node(node(id)) {
                Ok(_) => accepted += 1,
                Err(e) => assert_eq!(e, GraphError::NodeLimitExceeded(3)),
            }
        }
        assert_eq!(accepted, 3);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph = Graph::new();
        graph.add_node(node(1)).unwrap();
        assert_eq!(
            graph.add_edge(NodeId(1), NodeId(1)),
            Err(GraphError::InvalidEdge(NodeId(1), NodeId(1)))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_edges_are_rejected_in_either_order() {
        let mut graph = Graph::new();
        graph.add_node(node(1)).unwrap();
        graph.add_node(node(2)).unwrap();
        assert_eq!(graph.add_edge(NodeId(1), NodeId(2)), Ok(()));
        assert_eq!(
            graph.add_edge(NodeId(1), NodeId(2)),
            Err(GraphError::InvalidEdge(NodeId(1), NodeId(2)))
        );
        assert_eq!(
            graph.add_edge(NodeId(2), NodeId(1)),
            Err(GraphError::InvalidEdge(NodeId(2), NodeId(1)))
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_to_unknown_nodes_are_rejected() {
        let mut graph = Graph::new();
        graph.add_node(node(1)).unwrap();
        assert_eq!(
            graph.add_edge(NodeId(1), NodeId(9)),
            Err(GraphError::UnknownNode(NodeId(9)))
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut graph = Graph::new();
        for id in [4, 2, 7] {
            graph.add_node(node(id)).unwrap();
        }
        let ids: Vec<_> = graph.nodes().iter().map(Node::id).collect();
        assert_eq!(ids, vec![NodeId(4), NodeId(2), NodeId(7)]);
    }

    #[test]
    fn position_is_derived_from_the_coordinate() {
        let projection = SphericalProjection::default();
        let coordinate = GeoCoordinate::new(39.90, 116.40);
        let node = Node::new(NodeId(0), "北京", coordinate, &projection);
        assert_eq!(node.position(), projection.project(&coordinate));
    }
}
