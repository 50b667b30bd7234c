//! The per-search exploration tree.
//!
//! A search never mutates the network it runs over. Instead it grows a
//! tree of [`Waypoint`]s, one per discovered path prefix, and hands the
//! whole tree back to the caller inside a
//! [`SearchOutcome`](crate::itinerary::SearchOutcome). A vertex may be
//! reached by several waypoints over the history of a search; the tree
//! keeps every one of them, including branches the frontier later
//! superseded, so that dropping the tree is the single teardown point
//! for everything a search allocated.
use crate::types::edge::CostDimension;
use crate::types::network::Network;
use crate::types::vertex::VertexId;

/// Index of a waypoint inside its owning [`ExplorationTree`].
///
/// Ids order by creation time, which is what gives cost-ordered
/// frontiers their stable tie-break.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaypointId(usize);

impl WaypointId {
    /// Position of the waypoint in the arena, in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One discovered path prefix: a vertex together with the step that
/// reached it and the cost accumulated from the root.
///
/// Distinct from a [`Vertex`](crate::vertex::Vertex): a waypoint is
/// search state, owned by the tree of a single search run.
#[derive(Debug)]
pub struct Waypoint {
    /// The waypoint this one was expanded from; `None` for the root.
    pub parent: Option<WaypointId>,

    /// The vertex this waypoint stands on.
    pub vertex: VertexId,

    /// Weight of the single incoming edge in the active dimension.
    /// Zero for the root.
    pub step_cost: u32,

    /// Cumulative cost from the root: the parent's partial cost plus
    /// this waypoint's step cost. Zero for the root.
    pub partial_cost: u32,

    /// Waypoints produced by this node's expansion, in edge insertion
    /// order. Empty until [`ExplorationTree::expand`] is called on it.
    pub children: Vec<WaypointId>,
}

/// Arena holding every waypoint created during a single search.
///
/// Waypoints reference each other by index, the root sits at index 0,
/// and the active cost dimension is recorded once for the whole tree.
/// Dropping the tree releases every waypoint of the search at once;
/// vertices and edges of the network are never touched.
#[derive(Debug)]
pub struct ExplorationTree {
    dimension: CostDimension,
    waypoints: Vec<Waypoint>,
}

impl ExplorationTree {
    /// Creates a tree holding only a root waypoint standing on `start`.
    pub(crate) fn new(start: VertexId, dimension: CostDimension) -> Self {
        Self {
            dimension,
            waypoints: vec![Waypoint {
                parent: None,
                vertex: start,
                step_cost: 0,
                partial_cost: 0,
                children: Vec::new(),
            }],
        }
    }

    /// The root waypoint of the search.
    pub fn root(&self) -> WaypointId {
        WaypointId(0)
    }

    /// The cost dimension this tree was built under.
    pub fn dimension(&self) -> CostDimension {
        self.dimension
    }

    /// Borrows a waypoint by id.
    ///
    /// Ids handed out by this tree are always valid for it; mixing ids
    /// across trees is a caller bug and panics.
    pub fn get(&self, id: WaypointId) -> &Waypoint {
        &self.waypoints[id.0]
    }

    /// Number of waypoints created so far, the root included.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True when the tree holds no waypoints. A constructed tree always
    /// holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Expands a waypoint: creates one child per outgoing edge of the
    /// underlying vertex, each carrying the edge's weight in the active
    /// dimension as its step cost.
    ///
    /// Returns the ids of the created children, which are also recorded
    /// on the parent waypoint.
    pub(crate) fn expand(&mut self, at: WaypointId, network: &Network) -> Vec<WaypointId> {
        let vertex = self.waypoints[at.0].vertex;
        let parent_cost = self.waypoints[at.0].partial_cost;

        let mut children = Vec::new();
        for edge in network.edges_from(vertex) {
            let step_cost = edge.fare.cost(self.dimension);
            let id = WaypointId(self.waypoints.len());
            self.waypoints.push(Waypoint {
                parent: Some(at),
                vertex: edge.to,
                step_cost,
                partial_cost: parent_cost + step_cost,
                children: Vec::new(),
            });
            children.push(id);
        }

        self.waypoints[at.0].children = children.clone();
        children
    }

    /// Collects the waypoints from the root down to `id`, in root-first
    /// order, by following parent links.
    pub fn path_to(&self, id: WaypointId) -> Vec<WaypointId> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.waypoints[current.0].parent;
        }
        path.reverse();
        path
    }

    /// Iterates over every waypoint created during the search, in
    /// creation order.
    pub fn iter(&self) -> impl Iterator<Item = (WaypointId, &Waypoint)> {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(index, waypoint)| (WaypointId(index), waypoint))
    }
}

#[cfg(test)]
mod exploration_tree_tests {
    use super::*;
    use crate::types::network::Network;

    fn two_leg_network() -> (Network, VertexId, VertexId, VertexId) {
        let mut network = Network::new();
        let a = network.add_vertex("A");
        let b = network.add_vertex("B");
        let c = network.add_vertex("C");
        network.add_directed_edge(a, b, 100, 5);
        network.add_directed_edge(a, c, 500, 1);
        (network, a, b, c)
    }

    #[test]
    fn test_root_has_zero_costs() {
        let (_, a, _, _) = two_leg_network();
        let tree = ExplorationTree::new(a, CostDimension::Price);
        let root = tree.get(tree.root());
        assert_eq!(root.parent, None);
        assert_eq!(root.step_cost, 0);
        assert_eq!(root.partial_cost, 0);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_expand_creates_one_child_per_outgoing_edge() {
        let (network, a, b, c) = two_leg_network();
        let mut tree = ExplorationTree::new(a, CostDimension::Price);
        let children = tree.expand(tree.root(), &network);

        assert_eq!(children.len(), 2);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(tree.root()).children, children);

        let first = tree.get(children[0]);
        assert_eq!(first.vertex, b);
        assert_eq!(first.step_cost, 100);
        assert_eq!(first.partial_cost, 100);

        let second = tree.get(children[1]);
        assert_eq!(second.vertex, c);
        assert_eq!(second.step_cost, 500);
        assert_eq!(second.partial_cost, 500);
    }

    #[test]
    fn test_expand_accumulates_costs_in_the_active_dimension() {
        let (network, a, _, _) = two_leg_network();
        let mut tree = ExplorationTree::new(a, CostDimension::Time);
        let children = tree.expand(tree.root(), &network);

        assert_eq!(tree.get(children[0]).partial_cost, 5);
        assert_eq!(tree.get(children[1]).partial_cost, 1);
    }

    #[test]
    fn test_path_to_walks_back_to_the_root() {
        let (network, a, b, _) = two_leg_network();
        let mut tree = ExplorationTree::new(a, CostDimension::Price);
        let children = tree.expand(tree.root(), &network);
        let grandchildren = tree.expand(children[0], &network);

        // B has no outgoing edges in this fixture.
        assert!(grandchildren.is_empty());

        let path = tree.path_to(children[0]);
        assert_eq!(path, vec![tree.root(), children[0]]);
        assert_eq!(tree.get(path[1]).vertex, b);
    }
}
