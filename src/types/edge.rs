//! Definition of the `Fare` edge weight, the `CostDimension` selector
//! and the `Edge` view type.
use serde::{Deserialize, Serialize};

use crate::types::vertex::VertexId;

/// The two independent weights carried by every flight segment.
///
/// Both weights are non-negative integers; negative weights are outside
/// the contract of the search engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fare {
    /// Ticket price of the segment.
    pub price: u32,

    /// Flight time of the segment, in minutes. Display conversion to
    /// hours is the presentation layer's business.
    pub time: u32,
}

impl Fare {
    /// Returns the weight this fare carries in the given dimension.
    pub fn cost(&self, dimension: CostDimension) -> u32 {
        match dimension {
            CostDimension::Price => self.price,
            CostDimension::Time => self.time,
        }
    }
}

/// Which of the two segment weights a search accumulates.
///
/// The dimension is fixed for the duration of one search and recorded on
/// the exploration tree it produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostDimension {
    /// Sum ticket prices.
    Price,
    /// Sum flight times.
    Time,
}

/// An edge is a directed connection between two vertices, carrying the
/// fare of that segment. An undirected connection is stored as two edges
/// sharing the same fare.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// The vertex this edge leaves from.
    pub from: VertexId,

    /// The vertex this edge arrives at.
    pub to: VertexId,

    /// The weight pair of the edge.
    pub fare: Fare,
}

#[cfg(test)]
mod fare_tests {
    use super::*;

    #[test]
    fn test_cost_selects_the_active_dimension() {
        let fare = Fare {
            price: 120,
            time: 95,
        };
        assert_eq!(fare.cost(CostDimension::Price), 120);
        assert_eq!(fare.cost(CostDimension::Time), 95);
    }
}
