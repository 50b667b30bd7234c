//! Struct definitions and implementations for objects that represent
//! vertices in the flight network.
//!
//! The generic form of a vertex is [`Vertex`]. In the real world, a
//! vertex is typically an airport, but nothing in the search engine
//! depends on that reading; a vertex is a named position in the network
//! and nothing more.
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Identity of a vertex inside a [`Network`](crate::network::Network).
///
/// Ids are assigned in insertion order, so collaborators may address
/// vertices by 0-based position (`VertexId::new(3)` is the fourth vertex
/// ever inserted). The id, not the name, is what the search engine keys
/// on.
pub type VertexId = petgraph::graph::NodeIndex;

/// A named vertex in the flight network.
///
/// Names are labels, not keys: two vertices may carry the same name and
/// remain distinct. After insertion the network addresses a vertex only
/// through its [`VertexId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Display name of the vertex, e.g. an airport name.
    pub name: String,
}

impl Vertex {
    /// Creates a vertex with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.name)
    }
}
