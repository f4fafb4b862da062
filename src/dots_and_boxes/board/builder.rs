use super::*;

fn ensure_dimensions(columns: usize, rows: usize) -> Result<()> {
    if columns < MIN_DIMENSION || rows < MIN_DIMENSION {
        return Err(anyhow!("board must have at least one column and one row; received {columns}x{rows}"));
    }
    Ok(())
}

/// The four lines around box `b`: top, left, right, bottom.
///
/// Boxes are numbered row-major; the top-left dot of box `b` sits `b / columns` dots further along than `b`,
/// since every row of dots has one more dot than the row of boxes below it.
pub(crate) fn box_boundary(b: usize, columns: usize) -> [Edge; 4] {
    let dot = b + b / columns;
    let below = dot + columns + 1;
    [
        Edge::new(dot, dot + 1),
        Edge::new(dot, below),
        Edge::new(dot + 1, below + 1),
        Edge::new(below, below + 1),
    ]
}

/// Builds the dot graph, its coordinate map, and both copies of the box-boundary sets.
///
/// Dots are numbered row-major from the top-left and start with no lines between them.
pub fn build_geometric_graph(columns: usize, rows: usize) -> Result<GeometricBoard> {
    ensure_dimensions(columns, rows)?;

    let mut graph = Graph::new();
    let mut coords = Vec::with_capacity((columns + 1) * (rows + 1));
    for row in 0..=rows {
        for col in 0..=columns {
            graph.add_vertex(coords.len())?;
            coords.push(Coord::new(col, row));
        }
    }

    let boxes: Vec<BTreeSet<Edge>> = (0..columns * rows)
        .map(|b| BTreeSet::from(box_boundary(b, columns)))
        .collect();
    let chain_boxes = boxes.clone();

    Ok(GeometricBoard { graph, coords, boxes, chain_boxes })
}

/// Builds the chain graph: one vertex per box, each joined to the box on its right and the box below it.
pub fn build_chain_graph(columns: usize, rows: usize) -> Result<Graph> {
    ensure_dimensions(columns, rows)?;

    let mut chains = Graph::new();
    for v in 0..columns * rows {
        chains.add_vertex(v)?;
    }
    for row in 0..rows {
        for col in 0..columns {
            let v = row * columns + col;
            if col + 1 < columns {
                chains.add_edge(Edge::new(v, v + 1))?;
            }
            if row + 1 < rows {
                chains.add_edge(Edge::new(v, v + columns))?;
            }
        }
    }
    Ok(chains)
}

/// Maps every chain-graph edge to the line between its two boxes.
///
/// A horizontal join (boxes in the same row) is severed by the right side of its left box; a vertical join by the
/// bottom side of its upper box.
pub fn build_edge_intersection_map(columns: usize, rows: usize) -> Result<Crossings> {
    let chains = build_chain_graph(columns, rows)?;

    let crossings = chains.edges().map(|join| {
        let (v, w) = (join.low(), join.high());
        let [_, _, right, bottom] = box_boundary(v, columns);
        let line = if v / columns == w / columns { right } else { bottom };
        (join, Some(line))
    }).collect();
    Ok(crossings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn grid_lines(columns: usize, rows: usize) -> usize {
        2 * columns * rows + columns + rows
    }

    #[test_case(1, 1)]
    #[test_case(1, 4)]
    #[test_case(3, 1)]
    #[test_case(3, 3)]
    #[test_case(5, 2)]
    #[test_case(7, 8)]
    fn geometric_graph_counts(columns: usize, rows: usize) {
        let GeometricBoard { graph, coords, boxes, chain_boxes } = build_geometric_graph(columns, rows).unwrap();

        assert_eq!(graph.vertex_count(), (columns + 1) * (rows + 1));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(coords.len(), graph.vertex_count());
        assert_eq!(boxes.len(), columns * rows);
        assert!(boxes.iter().all(|lines| lines.len() == 4));
        assert_eq!(boxes, chain_boxes);

        let candidates: BTreeSet<Edge> = boxes.iter().flatten().copied().collect();
        assert_eq!(candidates.len(), grid_lines(columns, rows));
    }

    #[test_case(2, 2)]
    #[test_case(4, 3)]
    #[test_case(1, 5)]
    fn coordinates_are_row_major(columns: usize, rows: usize) {
        let GeometricBoard { coords, .. } = build_geometric_graph(columns, rows).unwrap();
        for (v, coord) in coords.iter().enumerate() {
            assert_eq!(coord.row * (columns + 1) + coord.col, v);
        }
        assert_eq!(coords.iter().collect::<BTreeSet<_>>().len(), coords.len());
    }

    #[test_case(1, 1)]
    #[test_case(2, 3)]
    #[test_case(4, 4)]
    #[test_case(6, 2)]
    fn boundary_lines_are_unit_segments(columns: usize, rows: usize) {
        let GeometricBoard { coords, boxes, .. } = build_geometric_graph(columns, rows).unwrap();
        for line in boxes.iter().flatten() {
            assert!(coords[line.low()].is_orthogonal_to(&coords[line.high()]));
        }
    }

    #[test_case(1, 1)]
    #[test_case(3, 2)]
    #[test_case(5, 5)]
    fn perimeter_lines_bound_one_box_and_interior_lines_two(columns: usize, rows: usize) {
        let GeometricBoard { coords, boxes, .. } = build_geometric_graph(columns, rows).unwrap();
        let mut owners: BTreeMap<Edge, usize> = BTreeMap::new();
        boxes.iter().flatten().for_each(|&line| { *owners.entry(line).or_default() += 1; });

        for (line, count) in owners {
            let [a, b] = [coords[line.low()], coords[line.high()]];
            let on_perimeter = (a.row == b.row && (a.row == 0 || a.row == rows))
                || (a.col == b.col && (a.col == 0 || a.col == columns));
            assert_eq!(count, if on_perimeter { 1 } else { 2 }, "line {line:?}");
        }
    }

    #[test_case(1, 1)]
    #[test_case(1, 3)]
    #[test_case(3, 1)]
    #[test_case(3, 3)]
    #[test_case(5, 4)]
    fn chain_graph_counts(columns: usize, rows: usize) {
        let chains = build_chain_graph(columns, rows).unwrap();
        assert_eq!(chains.vertex_count(), columns * rows);
        assert_eq!(chains.edge_count(), (columns - 1) * rows + columns * (rows - 1));
        assert!(chains.vertices().all(|v| chains.neighbours(v).len() <= 4));
    }

    #[test_case(1, 1)]
    #[test_case(1, 4)]
    #[test_case(4, 1)]
    #[test_case(2, 2)]
    #[test_case(3, 5)]
    #[test_case(6, 3)]
    fn crossings_are_the_shared_side(columns: usize, rows: usize) {
        let GeometricBoard { boxes, .. } = build_geometric_graph(columns, rows).unwrap();
        let chains = build_chain_graph(columns, rows).unwrap();
        let crossings = build_edge_intersection_map(columns, rows).unwrap();

        assert_eq!(crossings.keys().copied().collect::<Vec<_>>(), chains.edges().collect::<Vec<_>>());

        let mut seen = BTreeSet::new();
        for (join, crossing) in crossings {
            let line = crossing.unwrap();
            let shared: Vec<Edge> = boxes[join.low()].intersection(&boxes[join.high()]).copied().collect();
            assert_eq!(shared, vec![line], "join {join:?}");
            assert!(seen.insert(line), "line {line:?} severs two joins");
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(build_geometric_graph(0, 3).is_err());
        assert!(build_chain_graph(2, 0).is_err());
        assert!(build_edge_intersection_map(0, 0).is_err());
    }
}
