use super::*;

impl Board {
    /// Checks that a line may be drawn on this board right now.
    pub fn validate(&self, line: Edge) -> std::result::Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if line.is_loop() {
            return Err(MoveError::SelfReferencing(line.low()));
        }
        if line.high() >= self.coords.len()
            || !self.coord_of(line.low()).is_orthogonal_to(&self.coord_of(line.high())) {
            return Err(MoveError::NotAGridLine(line));
        }
        if self.is_drawn(line) {
            return Err(MoveError::AlreadyDrawn(line));
        }
        Ok(())
    }

    /// Draws a line, if valid, and reports the boxes it closed.
    ///
    /// This is the only path that mutates a board once built:
    /// 1. the line joins the geometric graph,
    /// 2. it leaves both copies of every box-boundary set that holds it, and
    /// 3. the chain-graph join it crosses (if any) is removed and its crossing marked severed.
    pub fn play(&mut self, line: Edge) -> std::result::Result<MoveOutcome, MoveError> {
        self.validate(line)?;

        { // geometric view
            if let Err(e) = self.lines.add_edge(line) {
                unreachable!("validated line {line:?} rejected by the line graph: {e}");
            }
            self.moves_left -= 1;
        }

        let mut closed = vec![];
        { // box bookkeeping; both copies in lockstep
            for (b, (lines, chain_lines)) in self.boxes.iter_mut().zip(self.chain_boxes.iter_mut()).enumerate() {
                if lines.remove(&line) && lines.is_empty() {
                    closed.push(b);
                }
                chain_lines.remove(&line);
            }
        }

        { // topological view
            for (join, crossing) in self.crossings.iter_mut() {
                if *crossing == Some(line) {
                    self.chains.remove_edge(*join);
                    *crossing = None;
                    log::trace!("line {line:?} severs chain join {join:?}");
                }
            }
        }

        Ok(MoveOutcome { line, closed, game_over: self.is_over() })
    }
}
