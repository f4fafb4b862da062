pub mod builder;
pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod pretty;

use super::prelude::*;

/// Maps each chain-graph edge to the line that severs it; `None` once that line has been drawn.
pub type Crossings = BTreeMap<Edge, Option<Edge>>;

/// Everything the geometric half of the board is built from.
#[derive(Clone, Debug)]
pub struct GeometricBoard {
    /// The dots, with an edge for every line drawn so far.
    pub graph: Graph,
    /// Dot vertex to (column, row).
    pub coords: Vec<Coord>,
    /// The undrawn lines around each box, indexed by box number.
    pub boxes: Vec<BTreeSet<Edge>>,
    /// The same sets again, owned by the chain graph.
    pub chain_boxes: Vec<BTreeSet<Edge>>,
}

/// The result of a line being drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub line: Edge,
    /// Boxes closed by this line, by box number; at most two.
    pub closed: Vec<usize>,
    pub game_over: bool,
}

/// A Dots and Boxes board, carrying both the geometric and the topological view of play.
///
/// All fields change together through [`Board::play`]; nothing else mutates them.
#[derive(Clone, Debug)]
pub struct Board {
    columns: usize,
    rows: usize,

    /// The dots, with an edge for every drawn line.
    lines: Graph,

    /// Dot vertex to coordinate; a bijection for the lifetime of the game.
    coords: Vec<Coord>,

    /// The undrawn lines around each box. A box is closed when its set is empty.
    boxes: Vec<BTreeSet<Edge>>,

    /// The chain graph's own copy of the box-boundary sets, kept in lockstep with `boxes`.
    chain_boxes: Vec<BTreeSet<Edge>>,

    /// One vertex per box, joined to grid neighbours until the line between them is drawn.
    chains: Graph,

    /// Chain edge to severing line.
    crossings: Crossings,

    /// Lines left to draw before the game ends.
    moves_left: usize,
}

impl Board {
    /// Builds a fresh board of the given number of box columns and rows.
    pub fn new(columns: usize, rows: usize) -> Result<Board> {
        let GeometricBoard { graph, coords, boxes, chain_boxes } = build_geometric_graph(columns, rows)?;
        let chains = build_chain_graph(columns, rows)?;
        let crossings = build_edge_intersection_map(columns, rows)?;

        let board = Board {
            columns,
            rows,
            lines: graph,
            coords,
            boxes,
            chain_boxes,
            chains,
            crossings,
            moves_left: Board::total_lines(columns, rows),
        };
        log::debug!("built {}x{} board with {} lines to play", columns, rows, board.moves_left);
        Ok(board)
    }

    /// The number of lines on a board; also the number of moves in a game.
    pub fn total_lines(columns: usize, rows: usize) -> usize {
        (columns + 1) * (rows + 1) + columns * rows - 1
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of dots on the board.
    pub fn dots(&self) -> usize {
        (self.columns + 1) * (self.rows + 1)
    }

    pub fn box_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn moves_left(&self) -> usize {
        self.moves_left
    }

    pub fn is_over(&self) -> bool {
        self.moves_left == 0
    }

    /// The geometric graph of drawn lines.
    pub fn lines(&self) -> &Graph {
        &self.lines
    }

    /// The topological graph of boxes still strategically joined.
    pub fn chains(&self) -> &Graph {
        &self.chains
    }

    pub fn crossings(&self) -> &Crossings {
        &self.crossings
    }

    /// Determines if a line has already been drawn.
    pub fn is_drawn(&self, line: Edge) -> bool {
        self.lines.is_edge(line)
    }

    /// The undrawn lines around a box.
    pub fn box_lines(&self, b: usize) -> &BTreeSet<Edge> {
        &self.boxes[b]
    }

    /// The undrawn lines around a chain-graph vertex.
    pub fn chain_box_lines(&self, v: Vertex) -> &BTreeSet<Edge> {
        &self.chain_boxes[v]
    }

    pub fn is_closed(&self, b: usize) -> bool {
        self.boxes[b].is_empty()
    }

    /// Every line not yet drawn, gathered from the boxes that are still open.
    pub fn undrawn_lines(&self) -> BTreeSet<Edge> {
        self.boxes.iter()
            .filter(|lines| !lines.is_empty())
            .flat_map(|lines| lines.iter().copied())
            .collect()
    }

    /// The chain graph restricted to `component`, keeping only the joins whose severing line is undrawn.
    pub fn chain_subgraph(&self, component: &BTreeSet<Vertex>) -> std::result::Result<Graph, GraphError> {
        let mut subgraph = Graph::new();
        for &v in component {
            subgraph.add_vertex(v)?;
        }
        for (&join, crossing) in self.crossings.iter() {
            if crossing.is_some() && subgraph.is_vertex(join.low()) && subgraph.is_vertex(join.high()) {
                subgraph.add_edge(join)?;
            }
        }
        Ok(subgraph)
    }
}
