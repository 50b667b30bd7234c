//! Flight Route Search Library.
//!
//! Builds a weighted airport network and answers route queries over it:
//! fewest stops, cheapest price, or shortest time. Queries return a
//! [`SearchOutcome`](types::itinerary::SearchOutcome) that owns the full
//! exploration tree of the search and renders into an
//! [`Itinerary`](types::itinerary::Itinerary) for presentation.
#[macro_use]
extern crate log;

mod types {
    pub mod edge;
    pub mod itinerary;
    pub mod network;
    pub mod vertex;
    pub mod waypoint;
}

mod utils {
    pub mod graph;

    #[cfg(feature = "mock")]
    #[allow(dead_code)]
    pub mod mock;
}

pub use types::*;
pub use utils::*;
