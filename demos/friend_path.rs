//! Build a small friend network and compare hop-count and weighted paths.

use friend_network::*;

fn main() -> NetworkResult<()> {
    let mut plain = Graph::new();
    let mut weighted = WeightedGraph::new();

    let people = ["Ana", "Ben", "Cleo", "Dev", "Eli"];
    for name in people {
        plain.add_vertex(name.to_string());
        weighted.add_vertex(name.to_string());
    }

    // (a, b, how hard it is to get an introduction)
    let friendships = [
        ("Ana", "Ben", 1),
        ("Ben", "Cleo", 1),
        ("Cleo", "Eli", 1),
        ("Ana", "Dev", 5),
        ("Dev", "Eli", 4),
    ];
    for (a, b, w) in friendships {
        let (a, b) = (a.to_string(), b.to_string());
        plain.add_edge(&a, &b)?;
        weighted.add_weighted_edge(&a, &b, w)?;
    }

    println!(
        "Graph created with {} people and {} friendships",
        plain.vertex_count(),
        plain.edge_count()
    );

    let (from, to) = ("Ana".to_string(), "Eli".to_string());

    let hops = plain.shortest_path(&from, &to)?;
    println!("Fewest introductions: {:?}", hops);

    let easiest = weighted.shortest_path(&from, &to)?;
    println!("Easiest introductions: {:?}", easiest);

    let snapshot = weighted.snapshot_with_path(100, &easiest);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
