use super::*;

/// Discovers every vertex connected to `start` by a breadth-first search.
pub fn reachable_set(graph: &Graph, start: Vertex) -> BTreeSet<Vertex> {
    let mut reached = BTreeSet::from([start]);
    let mut todo = VecDeque::from([start]);

    while let Some(u) = todo.pop_front() {
        for &w in graph.neighbours(u) {
            if reached.insert(w) {
                todo.push_back(w);
            }
        }
    }
    reached
}

/// Splits the graph into its connected components, ordered by their smallest vertex.
///
/// Every vertex lands in exactly one component; a component is searched once, from its first unvisited member.
pub fn connected_components(graph: &Graph) -> Vec<BTreeSet<Vertex>> {
    let mut visited: BTreeSet<Vertex> = BTreeSet::new();
    let mut components = vec![];

    for v in graph.vertices() {
        if visited.contains(&v) {
            continue;
        }
        let component = reachable_set(graph, v);
        visited.extend(component.iter().copied());
        components.push(component);
    }
    components
}
