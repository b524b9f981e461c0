//! CLI command implementations.

use std::path::Path;

use crate::loader::{load_friend_network, FriendNetwork, LoadOptions};
use crate::types::{EdgeList, NetworkError, NetworkResult};

/// Input files plus loader settings shared by every command.
pub struct NetworkSource<'a> {
    pub names: &'a Path,
    pub edges: &'a Path,
    pub options: LoadOptions,
}

impl NetworkSource<'_> {
    fn load(&self) -> NetworkResult<FriendNetwork> {
        load_friend_network(self.names, self.edges, &self.options)
    }
}

/// Display summary counts for the network.
pub fn cmd_info(source: &NetworkSource<'_>, json: bool) -> NetworkResult<()> {
    let net = source.load()?;

    if json {
        let info = serde_json::json!({
            "names_file": source.names.display().to_string(),
            "edges_file": source.edges.display().to_string(),
            "seed": source.options.seed,
            "members": net.graph.vertex_count(),
            "friendships": net.graph.edge_count(),
            "max_weight": source.options.max_weight,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Names file: {}", source.names.display());
        println!("Edges file: {}", source.edges.display());
        println!("Seed: {}", source.options.seed);
        println!("Members: {}", net.graph.vertex_count());
        println!("Friendships: {}", net.graph.edge_count());
        println!("Max weight: {}", source.options.max_weight);
    }
    Ok(())
}

/// List every member of the network.
pub fn cmd_members(source: &NetworkSource<'_>, json: bool) -> NetworkResult<()> {
    let net = source.load()?;
    let members = net.members();

    if json {
        println!("{}", serde_json::to_string_pretty(&members)?);
    } else {
        println!("People in the network:");
        for name in &members {
            println!("- {}", name);
        }
    }
    Ok(())
}

/// Find the shortest chain of friends between two members.
pub fn cmd_path(
    source: &NetworkSource<'_>,
    from: &str,
    to: &str,
    weighted: bool,
    json: bool,
) -> NetworkResult<()> {
    let net = source.load()?;
    let edges = net.shortest_path(from, to, weighted)?;
    let names = path_names(&edges);

    if json {
        let out = serde_json::json!({
            "from": from,
            "to": to,
            "weighted": weighted,
            "path": names,
            "edges": edges,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if names.is_empty() {
        println!("No path from {} to {}", from, to);
    } else {
        println!("Path to target: {}", names.join(", "));
    }
    Ok(())
}

/// Export a bounded snapshot of the network as JSON for a renderer.
pub fn cmd_export(
    source: &NetworkSource<'_>,
    max_vertices: usize,
    highlight: Option<(&str, &str)>,
    weighted: bool,
    pretty: bool,
) -> NetworkResult<()> {
    let net = source.load()?;
    let path = match highlight {
        Some((from, to)) => net.shortest_path(from, to, weighted)?,
        None => Vec::new(),
    };
    let snapshot = if weighted {
        net.weighted.snapshot_with_path(max_vertices, &path)
    } else {
        net.graph.snapshot_with_path(max_vertices, &path)
    };

    let text = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", text);
    Ok(())
}

/// Member names along an edge list, in order.
pub fn path_names(edges: &EdgeList<String>) -> Vec<String> {
    let mut names: Vec<String> = edges.iter().map(|(a, _)| a.clone()).collect();
    if let Some((_, last)) = edges.last() {
        names.push(last.clone());
    }
    names
}

/// Process exit code for an error.
pub fn exit_code(err: &NetworkError) -> i32 {
    match err {
        NetworkError::Io(_) => 1,
        NetworkError::Parse { .. } | NetworkError::EmptyNameList => 2,
        NetworkError::UnknownVertex(_) => 4,
        _ => 5,
    }
}
