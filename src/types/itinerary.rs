//! Search results and their rendering into presentation data.
//!
//! A search hands back a [`SearchOutcome`]: the exploration tree it
//! grew plus the goal waypoint, if one was reached. The outcome is the
//! single owner of every waypoint the search created: reading the
//! route and then letting the outcome drop is the whole resource
//! protocol, on the found and the not-found path alike. What leaves
//! this module for presentation is an [`Itinerary`] of vertex names and
//! costs; exploration tree internals never cross that boundary.
use serde::{Deserialize, Serialize};

use crate::types::edge::Fare;
use crate::types::network::Network;
use crate::types::waypoint::{ExplorationTree, WaypointId};

/// What a search returns: the exploration tree and, when the
/// destination was reached, the goal waypoint inside it.
///
/// The root is always present (it is allocated before the search loop
/// starts); the goal is present iff a route was found. Dropping the
/// outcome releases the entire tree in one pass, superseded branches
/// included.
#[derive(Debug)]
pub struct SearchOutcome {
    tree: ExplorationTree,
    goal: Option<WaypointId>,
}

impl SearchOutcome {
    /// An outcome whose search reached the destination.
    pub(crate) fn found(tree: ExplorationTree, goal: WaypointId) -> Self {
        Self {
            tree,
            goal: Some(goal),
        }
    }

    /// An outcome whose frontier drained without reaching the
    /// destination. This is a normal result, not an error.
    pub(crate) fn exhausted(tree: ExplorationTree) -> Self {
        Self { tree, goal: None }
    }

    /// True when the destination was reached.
    pub fn is_route_found(&self) -> bool {
        self.goal.is_some()
    }

    /// The goal waypoint, when the destination was reached.
    pub fn goal(&self) -> Option<WaypointId> {
        self.goal
    }

    /// The root waypoint of the search.
    pub fn root(&self) -> WaypointId {
        self.tree.root()
    }

    /// The exploration tree grown by the search.
    pub fn tree(&self) -> &ExplorationTree {
        &self.tree
    }

    /// Cumulative cost of the found route in the dimension the search
    /// ran under, read off the goal waypoint.
    pub fn total_cost(&self) -> Option<u32> {
        self.goal.map(|goal| self.tree.get(goal).partial_cost)
    }

    /// Renders the found route into presentation data.
    ///
    /// Walks parent links from the goal back to the root, reverses into
    /// root-to-goal order, and emits one [`Leg`] per consecutive pair.
    /// Each leg carries the step cost recorded by the search and the
    /// full fare of the matching edge, so the caller can display the
    /// non-active dimension alongside the active one. Totals are
    /// computed in the same pass.
    ///
    /// Returns `None` when no route was found, or when the network no
    /// longer matches the tree (a vertex or edge the route relies on is
    /// missing; searches over an unmodified network never hit this).
    pub fn itinerary(&self, network: &Network) -> Option<Itinerary> {
        let goal = self.goal?;
        let path = self.tree.path_to(goal);

        let mut stops = Vec::with_capacity(path.len());
        for id in &path {
            let vertex = network.vertex(self.tree.get(*id).vertex)?;
            stops.push(vertex.name.clone());
        }

        let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
        let mut total_price = 0;
        let mut total_time = 0;
        for (index, pair) in path.windows(2).enumerate() {
            let from = self.tree.get(pair[0]);
            let to = self.tree.get(pair[1]);
            let fare = network.fare_between(from.vertex, to.vertex)?;

            total_price += fare.price;
            total_time += fare.time;
            legs.push(Leg {
                from: stops[index].clone(),
                to: stops[index + 1].clone(),
                step_cost: to.step_cost,
                fare,
            });
        }

        Some(Itinerary {
            stops,
            legs,
            total_price,
            total_time,
        })
    }
}

/// One flight segment of a rendered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Name of the departure vertex.
    pub from: String,

    /// Name of the arrival vertex.
    pub to: String,

    /// The cost the search accumulated for this segment, in the
    /// dimension the search ran under.
    pub step_cost: u32,

    /// The full weight pair of the segment, for displaying both
    /// dimensions.
    pub fare: Fare,
}

/// A rendered route, ready for presentation: an ordered list of stop
/// names, the legs between them and the aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Vertex names from start to destination, in travel order.
    pub stops: Vec<String>,

    /// The segments between consecutive stops.
    pub legs: Vec<Leg>,

    /// Summed ticket price over all legs.
    pub total_price: u32,

    /// Summed flight time over all legs, in minutes.
    pub total_time: u32,
}

impl Itinerary {
    /// Number of flight segments in the route.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}
