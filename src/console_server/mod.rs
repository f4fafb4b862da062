mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::ConsoleOptions;

use crate::prelude::*;

/// A line-oriented command loop around one game session at a time.
///
/// Every command answers with its output followed by `ok`; a rejected command answers `err`, the reason, then `ok`,
/// and leaves the game as it was.
pub struct ConsoleServer<W: Write> {
    session: Option<GameSession>,
    options: ConsoleOptions,
    out: W,
}

impl<W: Write> ConsoleServer<W> {
    /// Produces a new server writing its answers to `out`.
    pub fn new(options: ConsoleOptions, out: W) -> ConsoleServer<W> {
        ConsoleServer { session: None, options, out }
    }

    /// Serves commands from `input` until it runs dry or asks to quit.
    pub fn run<I: BufRead>(&mut self, input: I) -> Result<()> {
        for line in input.lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");
            if cmd == "quit" {
                break;
            }
            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Runs a command. Only a broken engine is an error here; anything else is reported and served past.
    pub fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bestmove" => self.best_move(args),
            | "board" => self.board(args),
            | "chains" => self.chains(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "score" => self.score(args),
            | "validmoves" => self.valid_moves(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) if is_fatal(&err) => {
                log::error!("fatal error: {err:#}");
                Err(err)
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    fn best_move(&mut self, _args: &[&str]) -> Result<()> {
        let report = self.ensure_started()?.computer_move()?;
        self.report(&report)
    }

    fn board(&mut self, _args: &[&str]) -> Result<()> {
        let notation = self.ensure_started()?.board().notate();
        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    fn chains(&mut self, _args: &[&str]) -> Result<()> {
        let board = self.ensure_started()?.board();
        let census = ChainCensus::take(board).map_err(StrategyError::from)?;
        let controller = if census.control(board, true) { Player::First } else { Player::Second };

        let notate = |chains: &Vec<Chain>| chains.iter()
            .map(|chain| chain.boxes.iter().map(|&b| board.box_coord(b).notate()).join(" "))
            .join("; ");
        let [long, short] = [notate(&census.long), notate(&census.short)];

        writeln!(self.out, "long {}: {}", census.long.len(), long)?;
        writeln!(self.out, "short {}: {}", census.short.len(), short)?;
        writeln!(self.out, "loops {}", census.loops)?;
        writeln!(self.out, "control {}", controller.notate())?;
        Ok(())
    }

    /// Starts a new game: `newgame <columns> <rows> [pvp|first|second]`, where the mode gives the computer's seat.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let [columns, rows] = match args {
            [columns, rows, ..] => [columns, rows].map(|s| s.parse::<usize>()),
            _                   => return Err(anyhow!("expected newgame <columns> <rows> [pvp|first|second]")),
        };
        let (columns, rows) = (columns.context("bad column count")?, rows.context("bad row count")?);
        let mode = args.get(2).map_or(Ok(GameMode::HumanVsComputer { computer: Player::Second }), |s| s.parse())?;

        let session = match self.options.seed {
            Some(seed) => GameSession::seeded(columns, rows, mode, seed)?,
            None       => GameSession::new_game(columns, rows, mode)?,
        };
        let notation = session.board().notate();
        self.session = Some(session);

        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    /// Plays a human move: `play c,r-c,r` or `play c,r c,r`.
    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            return Err(anyhow!("no move provided"));
        }
        let LineString { repr: _, from, to } = args.join(" ").parse::<LineString>()?;
        let report = self.ensure_started()?.apply_move(&from, &to)?;
        self.report(&report)
    }

    fn score(&mut self, _args: &[&str]) -> Result<()> {
        let session = self.ensure_started()?;
        let [first, second] = session.scores();
        let status = match (session.is_over(), session.leader()) {
            (false, _)            => format!("to-move {}", session.to_move().notate()),
            (true, Some(leader))  => format!("winner {}", leader.notate()),
            (true, None)          => "draw".to_owned(),
        };
        writeln!(self.out, "first {first}\nsecond {second}\n{status}")?;
        Ok(())
    }

    fn valid_moves(&mut self, _args: &[&str]) -> Result<()> {
        let board = self.ensure_started()?.board();
        let lines = board.undrawn_lines();
        let movestr = lines.iter().map(|&line| {
            let (from, to) = board.line_coords(line);
            LineString::notate(&from, &to)
        }).join("; ");

        writeln!(self.out, "{}", lines.len())?;
        writeln!(self.out, "{}", movestr)?;
        Ok(())
    }

    // accessors

    /// Retrieves the session, or complains that no game has been started.
    fn ensure_started(&mut self) -> Result<&mut GameSession> {
        self.session.as_mut().ok_or_else(|| MoveError::NoGame.into())
    }

    // basic printers

    /// Prints the consequences of a move.
    fn report(&mut self, report: &MoveReport) -> Result<()> {
        writeln!(self.out, "line {}", LineString::notate(&report.from, &report.to))?;
        writeln!(self.out, "boxes {}", report.closed.len())?;
        for coord in &report.closed {
            writeln!(self.out, "box {}", coord.notate())?;
        }
        writeln!(self.out, "over {}", report.game_over as u8)?;
        Ok(())
    }

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()>
    {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the stream.
    fn err(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.out, "err\n{}", err)?;
        self.ok()
    }

    /// Prints the ok footer to the stream.
    fn ok(&mut self) -> Result<()>
    {
        writeln!(self.out, "ok")?;
        Ok(())
    }
}

/// Errors that mean the engine's books no longer add up.
fn is_fatal(err: &Error) -> bool {
    matches!(
        err.downcast_ref::<StrategyError>(),
        Some(StrategyError::NoLegalMove | StrategyError::Structure(_))
    )
}
