//! Helper functions for assembling a network from loader output.

use crate::types::network::Network;
use crate::types::vertex::VertexId;

/// Build a network from named vertices and indexed links.
///
/// Loaders hand over vertex names in a stable order and links as
/// `(from, to, price, time)` tuples whose positions reference that
/// order. Vertices are inserted in slice order, so positional
/// addressing by the caller keeps working afterwards. Every link is
/// inserted undirected, one edge in each direction sharing the fare.
///
/// # Arguments
/// * `names` - Vertex names in insertion order.
/// * `links` - `(from, to, price, time)` tuples indexing into `names`.
///
/// # Returns
/// The populated network.
///
/// # Panics
/// Panics if a link references an out-of-range vertex position. Index
/// validation is the loader's contract, not this crate's.
pub fn build_network(names: &[impl AsRef<str>], links: &[(usize, usize, u32, u32)]) -> Network {
    info!(
        "building network: {} vertices, {} links",
        names.len(),
        links.len()
    );

    let mut network = Network::new();
    let ids: Vec<VertexId> = names
        .iter()
        .map(|name| network.add_vertex(name.as_ref()))
        .collect();

    for &(from, to, price, time) in links {
        network.add_edge(ids[from], ids[to], price, time);
    }

    info!(
        "network ready: {} vertices, {} edges",
        network.vertex_count(),
        network.edge_count()
    );
    network
}

#[cfg(test)]
mod build_network_tests {
    use super::*;
    use crate::types::edge::Fare;

    #[test]
    fn test_build_network_preserves_insertion_order() {
        let network = build_network(
            &["A", "B", "C"],
            &[(0, 1, 100, 5), (1, 2, 50, 2), (0, 2, 500, 1)],
        );

        assert_eq!(network.vertex_count(), 3);
        // every link lands as two directed edges
        assert_eq!(network.edge_count(), 6);

        let names: Vec<&str> = network
            .vertices()
            .map(|(_, vertex)| vertex.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let a = VertexId::new(0);
        let c = VertexId::new(2);
        assert_eq!(
            network.fare_between(a, c),
            Some(Fare {
                price: 500,
                time: 1
            })
        );
        assert_eq!(
            network.fare_between(c, a),
            Some(Fare {
                price: 500,
                time: 1
            })
        );
    }
}
