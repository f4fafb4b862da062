use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{ChainAgent, Tactic};
use crate::dots_and_boxes::prelude::*;

/// What a move did, in coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Player,
    pub line: Edge,
    pub from: Coord,
    pub to: Coord,
    /// Each closed box, by the coordinate of its top-left dot.
    pub closed: Vec<Coord>,
    pub game_over: bool,
    /// Set for computer moves.
    pub tactic: Option<Tactic>,
    /// The player to move next.
    pub next: Player,
}

/// One game of Dots and Boxes: the board, whose turn it is, the tally of boxes, and the computer player if any.
///
/// This is the single owner of game state; every move, human or computer, goes through it.
pub struct GameSession<R: Rng = StdRng> {
    board: Board,
    mode: GameMode,
    agent: Option<ChainAgent<R>>,
    to_move: Player,
    scores: [usize; 2],
}

impl GameSession<StdRng> {
    /// Starts a game whose computer player, if any, is seeded from the operating system.
    pub fn new_game(columns: usize, rows: usize, mode: GameMode) -> Result<GameSession<StdRng>> {
        GameSession::with_rng(columns, rows, mode, StdRng::from_os_rng())
    }

    /// Starts a game whose computer player, if any, plays reproducibly from `seed`.
    pub fn seeded(columns: usize, rows: usize, mode: GameMode, seed: u64) -> Result<GameSession<StdRng>> {
        GameSession::with_rng(columns, rows, mode, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a game with the given random source for the computer's fallback moves.
    pub fn with_rng(columns: usize, rows: usize, mode: GameMode, rng: R) -> Result<GameSession<R>> {
        let board = Board::new(columns, rows)?;
        let agent = match mode {
            GameMode::HumanVsHuman                   => None,
            GameMode::HumanVsComputer { computer }   => Some(ChainAgent::with_rng(computer == Player::First, rng)),
        };
        log::info!("new {}x{} game, {:?}", columns, rows, mode);

        Ok(GameSession { board, mode, agent, to_move: Player::First, scores: [0, 0] })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The computer's seat, if it is playing.
    pub fn computer(&self) -> Option<Player> {
        match self.mode {
            GameMode::HumanVsHuman                 => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.computer() == Some(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Boxes closed by each player, indexed by [`Player::index`].
    pub fn scores(&self) -> [usize; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> usize {
        self.scores[player.index()]
    }

    /// The player with more boxes, or `None` for a tie.
    pub fn leader(&self) -> Option<Player> {
        let [first, second] = self.scores;
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Player::First),
            std::cmp::Ordering::Less    => Some(Player::Second),
            std::cmp::Ordering::Equal   => None,
        }
    }

    /// The computer player, if any.
    pub fn agent(&self) -> Option<&ChainAgent<R>> {
        self.agent.as_ref()
    }

    /// Plays a human move joining the dots at `from` and `to`.
    pub fn apply_move(&mut self, from: &Coord, to: &Coord) -> std::result::Result<MoveReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(MoveError::OutOfTurn);
        }
        let line = self.board.line_between(from, to)?;
        self.commit(line, None)
    }

    /// Lets the computer choose and play a line.
    pub fn computer_move(&mut self) -> Result<MoveReport> {
        if self.is_over() {
            return Err(MoveError::GameOver.into());
        }
        if !self.is_computer_turn() {
            return Err(StrategyError::NotComputerTurn.into());
        }
        let Some(agent) = self.agent.as_mut() else {
            return Err(StrategyError::NotComputerTurn.into());
        };

        let decision = agent.choose_line(&self.board)?;
        let report = self.commit(decision.line, Some(decision.tactic))
            .with_context(|| format!("computer chose an unplayable line {:?}", decision.line))?;
        Ok(report)
    }

    /// Plays a line for the player to move, credits any closed boxes, and passes the turn if none closed.
    fn commit(&mut self, line: Edge, tactic: Option<Tactic>) -> std::result::Result<MoveReport, MoveError> {
        let mover = self.to_move;
        let MoveOutcome { line, closed, game_over } = self.board.play(line)?;

        self.scores[mover.index()] += closed.len();
        if closed.is_empty() {
            self.to_move = -self.to_move;
        }

        let (from, to) = self.board.line_coords(line);
        let closed = closed.iter().map(|&b| self.board.box_coord(b)).collect::<Vec<_>>();
        log::debug!(
            "{} drew {}{}",
            mover.notate(), LineString::notate(&from, &to),
            if closed.is_empty() { String::new() } else { format!(", closing {}", closed.len()) }
        );
        if game_over {
            log::info!("game over: {} to {}", self.scores[0], self.scores[1]);
        }

        Ok(MoveReport { mover, line, from, to, closed, game_over, tactic, next: self.to_move })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(col: usize, row: usize) -> Coord {
        Coord::new(col, row)
    }

    #[test]
    fn single_box_game_alternates_then_ends() {
        let mut session = GameSession::seeded(1, 1, GameMode::HumanVsHuman, 0).unwrap();
        let sides = [(at(0, 0), at(1, 0)), (at(1, 0), at(1, 1)), (at(1, 1), at(0, 1)), (at(0, 1), at(0, 0))];

        let movers = sides.iter().map(|(a, b)| {
            let report = session.apply_move(a, b).unwrap();
            (report.mover, report.closed.clone(), report.game_over)
        }).collect::<Vec<_>>();

        let expected: Vec<(Player, Vec<Coord>, bool)> = vec![
            (Player::First, vec![], false),
            (Player::Second, vec![], false),
            (Player::First, vec![], false),
            (Player::Second, vec![at(0, 0)], true),
        ];
        assert_eq!(movers, expected);
        assert_eq!(session.scores(), [0, 1]);
        assert_eq!(session.leader(), Some(Player::Second));
        assert_eq!(session.apply_move(&at(0, 0), &at(1, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn closing_a_box_keeps_the_turn() {
        let mut session = GameSession::seeded(2, 1, GameMode::HumanVsHuman, 0).unwrap();
        for (a, b) in [(at(0, 0), at(1, 0)), (at(0, 0), at(0, 1)), (at(0, 1), at(1, 1))] {
            session.apply_move(&a, &b).unwrap();
        }
        assert_eq!(session.to_move(), Player::Second);

        let report = session.apply_move(&at(1, 0), &at(1, 1)).unwrap();
        assert_eq!(report.closed, vec![at(0, 0)]);
        assert_eq!(report.next, Player::Second);
        assert_eq!(session.score(Player::Second), 1);
    }

    #[test]
    fn invalid_moves_keep_the_turn() {
        let mut session = GameSession::seeded(2, 2, GameMode::HumanVsHuman, 0).unwrap();
        session.apply_move(&at(0, 0), &at(1, 0)).unwrap();

        assert!(matches!(session.apply_move(&at(1, 0), &at(0, 0)), Err(MoveError::AlreadyDrawn(_))));
        assert!(matches!(session.apply_move(&at(0, 0), &at(1, 1)), Err(MoveError::NotAGridLine(_))));
        assert!(matches!(session.apply_move(&at(1, 1), &at(1, 1)), Err(MoveError::SelfReferencing(_))));
        assert_eq!(session.apply_move(&at(0, 0), &at(0, 9)), Err(MoveError::UnknownCoord(at(0, 9))));
        assert_eq!(session.to_move(), Player::Second);
        assert_eq!(session.board().moves_left(), Board::total_lines(2, 2) - 1);
    }

    #[test]
    fn computer_moving_first_goes_first() {
        let mode = GameMode::HumanVsComputer { computer: Player::First };
        let mut session = GameSession::seeded(3, 3, mode, 5).unwrap();

        assert!(session.is_computer_turn());
        assert_eq!(session.apply_move(&at(0, 0), &at(1, 0)), Err(MoveError::OutOfTurn));

        let report = session.computer_move().unwrap();
        assert_eq!(report.mover, Player::First);
        assert_eq!(report.tactic, Some(Tactic::Random));
        assert!(report.closed.is_empty());
        assert!(!session.is_computer_turn());
        assert!(session.agent().is_some_and(|agent| agent.moved_first()));

        let err = session.computer_move().unwrap_err();
        assert_eq!(err.downcast_ref::<StrategyError>(), Some(&StrategyError::NotComputerTurn));
    }

    #[test]
    fn humans_have_no_computer_to_ask() {
        let mut session = GameSession::seeded(2, 2, GameMode::HumanVsHuman, 0).unwrap();
        assert!(session.computer_move().is_err());
        assert!(session.agent().is_none());
    }

    #[test]
    fn full_games_tally_every_box() {
        let mut rng = StdRng::seed_from_u64(99);
        for seed in 0..10u64 {
            let computer = if seed % 2 == 0 { Player::First } else { Player::Second };
            let mode = GameMode::HumanVsComputer { computer };
            let (columns, rows) = (rng.random_range(1..=5), rng.random_range(1..=5));
            let mut session = GameSession::seeded(columns, rows, mode, seed).unwrap();

            while !session.is_over() {
                if session.is_computer_turn() {
                    session.computer_move().unwrap();
                } else {
                    let undrawn: Vec<Edge> = session.board().undrawn_lines().into_iter().collect();
                    let (from, to) = session.board().line_coords(undrawn[rng.random_range(0..undrawn.len())]);
                    session.apply_move(&from, &to).unwrap();
                }
            }
            assert_eq!(session.scores().iter().sum::<usize>(), columns * rows);
        }
    }
}
