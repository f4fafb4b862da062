mod chains;
mod session;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::dots_and_boxes::prelude::*;

pub use chains::{Chain, ChainCensus, LONG_CHAIN, chain_is_open, closing_line, has_control, opening_line};
pub use session::{GameSession, MoveReport};

/// How the agent arrived at a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tactic {
    /// Carrying on with a chain being captured over consecutive turns.
    ResumeChain,
    /// Starting to capture an open long chain.
    TakeLongChain,
    /// Capturing an open short chain while in control.
    TakeShortChain,
    /// Offering a short chain to the opponent while out of control.
    BaitShortChain,
    /// No chain move applied.
    Random,
}

impl Tactic {
    pub fn notate(&self) -> &'static str {
        match self {
            Tactic::ResumeChain    => "resume",
            Tactic::TakeLongChain  => "take-long",
            Tactic::TakeShortChain => "take-short",
            Tactic::BaitShortChain => "bait",
            Tactic::Random         => "random",
        }
    }
}

/// A line chosen by the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub line: Edge,
    pub tactic: Tactic,
}

/// A long-chain-rule player.
///
/// The only state it carries between turns is the chain it is partway through capturing, so a capture started on
/// one turn runs on through the turns after it. The random source for fallback moves is a type parameter so that
/// play can be made reproducible.
pub struct ChainAgent<R: Rng = StdRng> {
    moved_first: bool,
    harvesting: Option<BTreeSet<Vertex>>,
    rng: R,
}

impl ChainAgent<StdRng> {
    /// Creates an agent seeded from the operating system.
    pub fn new(moved_first: bool) -> ChainAgent<StdRng> {
        ChainAgent::with_rng(moved_first, StdRng::from_os_rng())
    }

    /// Creates an agent whose fallback moves are fixed by `seed`.
    pub fn seeded(moved_first: bool, seed: u64) -> ChainAgent<StdRng> {
        ChainAgent::with_rng(moved_first, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ChainAgent<R> {
    /// Creates an agent drawing fallback moves from `rng`.
    pub fn with_rng(moved_first: bool, rng: R) -> ChainAgent<R> {
        ChainAgent { moved_first, harvesting: None, rng }
    }

    pub fn moved_first(&self) -> bool {
        self.moved_first
    }

    /// The boxes of the chain being captured that are not yet taken, if any.
    pub fn harvesting(&self) -> Option<&BTreeSet<Vertex>> {
        self.harvesting.as_ref()
    }

    /// Chooses the next line to draw by the long chain rule:
    /// 1. keep capturing the chain from the previous turn,
    /// 2. start capturing the longest open long chain,
    /// 3. in control, capture an open short chain,
    /// 4. out of control, open a closed short chain to bait the opponent,
    /// 5. otherwise, draw any undrawn line at random.
    ///
    /// The board is not changed; the caller plays the returned line.
    pub fn choose_line(&mut self, board: &Board) -> std::result::Result<Decision, StrategyError> {
        let decision = self.decide(board)?;
        debug_assert!(!board.is_drawn(decision.line), "agent chose drawn line {:?}", decision.line);
        log::debug!("{} {:?}", decision.tactic.notate(), board.line_coords(decision.line));
        Ok(decision)
    }

    fn decide(&mut self, board: &Board) -> std::result::Result<Decision, StrategyError> {
        if let Some(line) = self.continue_harvest(board) {
            return Ok(Decision { line, tactic: Tactic::ResumeChain });
        }

        let census = ChainCensus::take(board)?;
        let control = census.control(board, self.moved_first);
        log::debug!(
            "{} long chains, {} short chains, {} loops; control: {}",
            census.long.len(), census.short.len(), census.loops, control
        );

        for chain in census.long.iter().filter(|chain| chain.is_open(board)) {
            if let Some(line) = self.start_harvest(chain, board) {
                return Ok(Decision { line, tactic: Tactic::TakeLongChain });
            }
        }

        if control {
            for chain in census.short.iter().filter(|chain| chain.is_open(board)) {
                if let Some(line) = self.start_harvest(chain, board) {
                    return Ok(Decision { line, tactic: Tactic::TakeShortChain });
                }
            }
        } else {
            for chain in census.short.iter().filter(|chain| !chain.is_open(board)) {
                if let Some(line) = opening_line(&chain.boxes, board) {
                    return Ok(Decision { line, tactic: Tactic::BaitShortChain });
                }
            }
        }

        let line = self.random_line(board)?;
        Ok(Decision { line, tactic: Tactic::Random })
    }

    /// Makes `chain` the capture in progress and takes its first box.
    fn start_harvest(&mut self, chain: &Chain, board: &Board) -> Option<Edge> {
        self.harvesting = Some(chain.boxes.clone());
        self.continue_harvest(board)
    }

    /// Takes the next box of the capture in progress. The capture ends when no box is left to take.
    fn continue_harvest(&mut self, board: &Board) -> Option<Edge> {
        let chain = self.harvesting.as_mut()?;
        let taken = closing_line(chain, board);
        if let Some((_, v)) = taken {
            chain.remove(&v);
        }
        if taken.is_none() || chain.is_empty() {
            self.harvesting = None;
        }
        taken.map(|(line, _)| line)
    }

    /// Picks uniformly among the lines around boxes that are still open.
    fn random_line(&mut self, board: &Board) -> std::result::Result<Edge, StrategyError> {
        let candidates: Vec<Edge> = board.undrawn_lines().into_iter().collect();
        if candidates.is_empty() {
            log::error!("no undrawn line with {} moves left", board.moves_left());
            return Err(StrategyError::NoLegalMove);
        }
        Ok(candidates[self.rng.random_range(0..candidates.len())])
    }
}
