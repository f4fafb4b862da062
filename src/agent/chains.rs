use crate::dots_and_boxes::prelude::*;

/// Chains of at least this many boxes are long.
pub const LONG_CHAIN: usize = 3;

/// A run of boxes in the chain graph with no loop in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    pub boxes: BTreeSet<Vertex>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn is_long(&self) -> bool {
        self.len() >= LONG_CHAIN
    }

    /// Determines if the whole chain can be captured in one uninterrupted run.
    pub fn is_open(&self, board: &Board) -> bool {
        chain_is_open(&self.boxes, board)
    }
}

/// Determines if a chain can be captured in one uninterrupted run.
///
/// Boxes are counted by the lines left in the chain graph's boundary sets: `threes` have one line left, `ones` have
/// three, `zeroes` are untouched. The chain is open when `threes - 1 >= 2 * zeroes + ones`.
pub fn chain_is_open(chain: &BTreeSet<Vertex>, board: &Board) -> bool {
    let [mut threes, mut ones, mut zeroes] = [0i64; 3];
    for &v in chain {
        match board.chain_box_lines(v).len() {
            1 => threes += 1,
            3 => ones += 1,
            4 => zeroes += 1,
            _ => {}
        }
    }
    threes - 1 >= 2 * zeroes + ones
}

/// Finds a box in the chain with exactly one line left, and that line.
pub fn closing_line(chain: &BTreeSet<Vertex>, board: &Board) -> Option<(Edge, Vertex)> {
    chain.iter().find_map(|&v| {
        let lines = board.chain_box_lines(v);
        match lines.len() {
            1 => lines.first().map(|&line| (line, v)),
            _ => None,
        }
    })
}

/// Finds a line that leaves a box in the chain one line short of closing.
///
/// Either of the two undrawn lines of a two-line box opens the chain; the lower one is taken. Neither line closes
/// a box when the chain is not open: a neighbour across either line would be in the same chain, and a neighbour
/// with one line left would make the chain open.
pub fn opening_line(chain: &BTreeSet<Vertex>, board: &Board) -> Option<Edge> {
    chain.iter().find_map(|&v| {
        let lines = board.chain_box_lines(v);
        match lines.len() {
            2 => lines.first().copied(),
            _ => None,
        }
    })
}

/// Determines whether the computer controls the endgame, i.e. whether its opponent will be the one forced to
/// open the next long chain.
pub fn has_control(dots: usize, long_chains: usize, moved_first: bool) -> bool {
    let even = (dots + long_chains) % 2 == 0;
    even == moved_first
}

/// The chain structure of a board at one moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainCensus {
    /// Chains of three or more boxes, longest first.
    pub long: Vec<Chain>,
    /// Chains of exactly two boxes.
    pub short: Vec<Chain>,
    /// Components skipped because they contain a loop.
    pub loops: usize,
}

impl ChainCensus {
    /// Decomposes the chain graph into components and classifies each one.
    ///
    /// Single boxes are not chains and are dropped. Components with a loop in them are counted but otherwise
    /// ignored.
    pub fn take(board: &Board) -> std::result::Result<ChainCensus, GraphError> {
        let mut census = ChainCensus::default();

        for component in connected_components(board.chains()) {
            if component.len() < 2 {
                continue;
            }
            let subgraph = board.chain_subgraph(&component)?;
            if subgraph.is_cyclic() {
                log::trace!("skipping loop {:?}", component);
                census.loops += 1;
                continue;
            }

            let chain = Chain { boxes: component };
            if chain.is_long() {
                census.long.push(chain);
            } else {
                census.short.push(chain);
            }
        }

        // stable, so equal lengths keep component order
        census.long.sort_by(|a, b| b.len().cmp(&a.len()));
        Ok(census)
    }

    /// Whether the computer has control, given the census and its seat.
    pub fn control(&self, board: &Board, moved_first: bool) -> bool {
        has_control(board.dots(), self.long.len(), moved_first)
    }
}
