//! Basic build -> traverse -> lookup flow.

use graph_trie::*;

fn main() -> GraphResult<()> {
    // Build a small graph from an edge list
    let graph: Graph<String> = "E-A, A-B, A-C, C-D".parse()?;
    print!("{}", graph);

    let start = "E".to_string();
    println!("bfs: {:?}", bfs(&graph, &start));
    println!("dfs: {:?}", dfs(&graph, &start));

    for (depth, layer) in bfs_layers(&graph, &start).iter().enumerate() {
        println!("  depth {}: {}", depth, layer.join(" "));
    }

    let limited = traverse(
        &graph,
        &start,
        &TraversalParams::breadth_first().with_max_depth(2),
    )?;
    println!("within 2 hops: {:?}", limited.visited);

    if let Some(path) = shortest_path(&graph, &"B".to_string(), &"D".to_string())? {
        println!("B to D: {}", path.join(" -> "));
    }

    // Prefix lookups
    let trie: Trie = [
        "hello",
        "help",
        "helicopter",
        "hero",
        "hope",
        "echo",
        "hotel",
        "hot",
        "hop",
    ]
    .into_iter()
    .collect();

    println!("starts_with(\"he\"): {}", trie.starts_with("he"));
    println!("starts_with(\"xyz\"): {}", trie.starts_with("xyz"));
    println!("prefix_match(\"he\"): {:?}", trie.prefix_match("he"));

    Ok(())
}
