use super::*;

impl Graph {
    /// Determines if any component of the graph contains a simple cycle.
    ///
    /// Depth-first from every undiscovered vertex, remembering the vertex each one was discovered from; meeting an
    /// already-discovered vertex along any edge other than the one back to the parent closes a cycle.
    pub fn is_cyclic(&self) -> bool {
        let mut discovered: BTreeSet<Vertex> = BTreeSet::new();

        for root in self.vertices() {
            if discovered.contains(&root) {
                continue;
            }
            discovered.insert(root);

            let mut stack: Vec<(Vertex, Option<Vertex>)> = vec![(root, None)];
            while let Some((v, parent)) = stack.pop() {
                for &w in self.neighbours(v) {
                    if parent == Some(w) {
                        continue;
                    }
                    if !discovered.insert(w) {
                        return true;
                    }
                    stack.push((w, Some(v)));
                }
            }
        }
        false
    }
}
