//! A number of methods to generate random data for testing.

use rand::Rng;

use crate::types::edge::Fare;
use crate::types::network::Network;
use crate::types::vertex::VertexId;

/// Generate a random fare with realistic magnitudes: prices between 50
/// and 1000, times between 30 and 600 minutes.
pub fn generate_fare() -> Fare {
    let mut rng = rand::thread_rng();
    Fare {
        price: rng.gen_range(50..=1000),
        time: rng.gen_range(30..=600),
    }
}

/// Generate a network of `vertex_count` airports with synthetic names
/// (`AP000`, `AP001`, ...) and roughly `fanout` undirected connections
/// out of each, with random fares.
///
/// Connectivity is not guaranteed; property tests compare against brute
/// force, which handles unreachable pairs the same way the searches do.
pub fn generate_network(vertex_count: usize, fanout: usize) -> Network {
    let mut rng = rand::thread_rng();
    let mut network = Network::new();

    let ids: Vec<VertexId> = (0..vertex_count)
        .map(|index| network.add_vertex(format!("AP{:03}", index)))
        .collect();

    for &from in &ids {
        for _ in 0..fanout {
            let to = ids[rng.gen_range(0..vertex_count)];
            if to == from {
                continue;
            }
            let fare = generate_fare();
            network.add_edge(from, to, fare.price, fare.time);
        }
    }

    network
}

#[cfg(test)]
mod mock_tests {
    use super::*;

    #[test]
    fn test_generate_network_respects_the_vertex_count() {
        let network = generate_network(12, 2);
        assert_eq!(network.vertex_count(), 12);
    }

    #[test]
    fn test_generate_fare_stays_in_range() {
        for _ in 0..100 {
            let fare = generate_fare();
            assert!((50..=1000).contains(&fare.price));
            assert!((30..=600).contains(&fare.time));
        }
    }
}
