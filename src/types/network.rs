//! The flight network and its search entry points.
//!
//! [`Network`] owns the static data of the system: named vertices and
//! the directed weighted edges between them, held in a petgraph
//! [`DiGraph`]. The network is append-only after loading and read-only
//! during a search; one search runs to completion before control
//! returns, and sequential searches may reuse the same network freely.
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
    fmt::{Display, Formatter, Result as FmtResult},
};

use petgraph::{graph::DiGraph, visit::EdgeRef};

use crate::types::{
    edge::{CostDimension, Edge, Fare},
    itinerary::SearchOutcome,
    vertex::{Vertex, VertexId},
    waypoint::{ExplorationTree, WaypointId},
};

/// Error types for route queries.
///
/// # Errors
/// * `UnknownVertex` - A query referenced a vertex id that is not part
///   of this network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or destination of a query does not belong to this
    /// network. Queries are rejected before any search state is
    /// allocated; a malformed endpoint is never silently repaired.
    UnknownVertex(VertexId),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            SearchError::UnknownVertex(id) => write!(f, "unknown vertex {}", id.index()),
        }
    }
}

impl std::error::Error for SearchError {}

/// The three route queries a caller can ask for, matching the search
/// modes offered to end users.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Minimum summed ticket price.
    CheapestPrice,
    /// Minimum summed flight time.
    ShortestTime,
    /// Minimum number of flight segments.
    FewestStops,
}

/// A weighted, append-only network of named vertices.
#[derive(Debug, Default)]
pub struct Network {
    graph: DiGraph<Vertex, Fare>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Appends a vertex and returns its id.
    ///
    /// Duplicate names are permitted and create distinct vertices; the
    /// returned id is the only identity the network keys on.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        self.graph.add_node(Vertex::new(name))
    }

    /// Appends an undirected connection: one edge `a -> b` and one edge
    /// `b -> a`, both carrying the same `(price, time)` fare.
    ///
    /// # Panics
    /// Panics if either endpoint does not belong to this network;
    /// endpoint validation at load time is the loader's contract.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, price: u32, time: u32) {
        let fare = Fare { price, time };
        self.graph.add_edge(a, b, fare);
        self.graph.add_edge(b, a, fare);
    }

    /// Appends a single directed edge `a -> b`.
    pub fn add_directed_edge(&mut self, a: VertexId, b: VertexId, price: u32, time: u32) {
        self.graph.add_edge(a, b, Fare { price, time });
    }

    /// Borrows a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(id)
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.graph
            .node_indices()
            .map(move |id| (id, &self.graph[id]))
    }

    /// Number of vertices in the network.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges in the network. An undirected
    /// connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Lists the outgoing edges of a vertex in insertion order.
    pub fn edges_from(&self, id: VertexId) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .graph
            .edges(id)
            .map(|edge| Edge {
                from: edge.source(),
                to: edge.target(),
                fare: *edge.weight(),
            })
            .collect();
        // petgraph yields adjacency newest-first; callers expect the
        // order the loader inserted.
        edges.reverse();
        edges
    }

    /// Finds the fare of an edge `a -> b`.
    ///
    /// With parallel edges between the same endpoints, the first one
    /// inserted is reported.
    pub fn fare_between(&self, a: VertexId, b: VertexId) -> Option<Fare> {
        self.graph
            .edges_connecting(a, b)
            .map(|edge| *edge.weight())
            .last()
    }

    /// Finds a route with the fewest flight segments between two
    /// vertices, by breadth-first expansion.
    ///
    /// The frontier is first-in-first-out and a vertex is enqueued at
    /// most once, at discovery time: the first path to reach a vertex
    /// wins, which is what guarantees the minimum hop count. Waypoints
    /// in the returned tree carry price-dimension step costs, but the
    /// costs play no part in the termination decision.
    ///
    /// # Returns
    /// A [`SearchOutcome`] owning the exploration tree; its goal is
    /// absent when the destination is unreachable.
    pub fn fewest_stops(
        &self,
        start: VertexId,
        dest: VertexId,
    ) -> Result<SearchOutcome, SearchError> {
        self.check_endpoint(start)?;
        self.check_endpoint(dest)?;
        debug!(
            "searching fewest stops: {} -> {}",
            start.index(),
            dest.index()
        );

        let mut tree = ExplorationTree::new(start, CostDimension::Price);
        let mut frontier: VecDeque<WaypointId> = VecDeque::new();
        let mut seen: HashSet<VertexId> = HashSet::new();

        frontier.push_back(tree.root());
        seen.insert(start);

        while let Some(id) = frontier.pop_front() {
            if tree.get(id).vertex == dest {
                debug!("route found after {} waypoints", tree.len());
                return Ok(SearchOutcome::found(tree, id));
            }

            for child in tree.expand(id, self) {
                let vertex = tree.get(child).vertex;
                if seen.insert(vertex) {
                    frontier.push_back(child);
                }
            }
        }

        debug!("frontier exhausted, no route");
        Ok(SearchOutcome::exhausted(tree))
    }

    /// Finds a route with the minimum cumulative cost between two
    /// vertices under the given dimension, by uniform-cost expansion.
    ///
    /// The frontier is ordered by partial cost with a stable tie-break:
    /// among equal costs the entry inserted first is taken, so results
    /// are reproducible. A vertex popped as the minimum is finalized
    /// permanently, which is sound because weights are non-negative.
    /// When expansion reaches a vertex already waiting in the frontier,
    /// the newcomer supersedes the queued entry only if it is strictly
    /// cheaper; this relaxation is what makes the returned cost optimal
    /// even when a cheap path to an intermediate vertex is discovered
    /// after an expensive one.
    ///
    /// # Returns
    /// A [`SearchOutcome`] owning the exploration tree; the goal
    /// waypoint's partial cost is the optimal cumulative cost.
    pub fn minimum_cost(
        &self,
        start: VertexId,
        dest: VertexId,
        dimension: CostDimension,
    ) -> Result<SearchOutcome, SearchError> {
        self.check_endpoint(start)?;
        self.check_endpoint(dest)?;
        debug!(
            "searching minimum {:?} cost: {} -> {}",
            dimension,
            start.index(),
            dest.index()
        );

        let mut tree = ExplorationTree::new(start, dimension);

        // Min-heap on (partial cost, insertion sequence); the sequence
        // makes equal-cost pops deterministic, first inserted wins.
        let mut frontier: BinaryHeap<Reverse<(u32, u64, WaypointId)>> = BinaryHeap::new();
        let mut sequence: u64 = 0;

        // Cheapest partial cost currently queued per vertex. Superseded
        // heap entries stay behind and are skipped when popped.
        let mut queued: HashMap<VertexId, u32> = HashMap::new();
        let mut visited: HashSet<VertexId> = HashSet::new();

        frontier.push(Reverse((0, sequence, tree.root())));
        queued.insert(start, 0);
        sequence += 1;

        while let Some(Reverse((cost, _, id))) = frontier.pop() {
            let vertex = tree.get(id).vertex;
            if visited.contains(&vertex) {
                continue;
            }
            if queued.get(&vertex).map_or(false, |&cheapest| cheapest < cost) {
                // A strictly cheaper entry superseded this one.
                continue;
            }

            if vertex == dest {
                debug!("route found, cumulative cost {}", cost);
                return Ok(SearchOutcome::found(tree, id));
            }

            visited.insert(vertex);
            queued.remove(&vertex);

            for child in tree.expand(id, self) {
                let waypoint = tree.get(child);
                let (child_vertex, child_cost) = (waypoint.vertex, waypoint.partial_cost);

                if visited.contains(&child_vertex) {
                    continue;
                }
                match queued.get(&child_vertex) {
                    Some(&existing) if child_cost >= existing => {
                        // The queued path is at least as cheap; keep it.
                    }
                    _ => {
                        queued.insert(child_vertex, child_cost);
                        frontier.push(Reverse((child_cost, sequence, child)));
                        sequence += 1;
                    }
                }
            }
        }

        debug!("frontier exhausted, no route");
        Ok(SearchOutcome::exhausted(tree))
    }

    /// Runs the query the caller picked: cheapest price and shortest
    /// time are cost-ordered searches over the respective dimension,
    /// fewest stops is the breadth-first search.
    pub fn search(
        &self,
        start: VertexId,
        dest: VertexId,
        mode: QueryMode,
    ) -> Result<SearchOutcome, SearchError> {
        match mode {
            QueryMode::CheapestPrice => self.minimum_cost(start, dest, CostDimension::Price),
            QueryMode::ShortestTime => self.minimum_cost(start, dest, CostDimension::Time),
            QueryMode::FewestStops => self.fewest_stops(start, dest),
        }
    }

    fn check_endpoint(&self, id: VertexId) -> Result<(), SearchError> {
        if self.graph.node_weight(id).is_none() {
            error!("query referenced unknown vertex {}", id.index());
            return Err(SearchError::UnknownVertex(id));
        }
        Ok(())
    }
}
