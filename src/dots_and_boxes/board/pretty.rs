use itertools::Itertools;

use super::*;

impl Board {
    /// Returns the board as `columns x rows; drawn lines; closed boxes`, with lines and boxes in notation.
    pub fn notate(&self) -> String {
        let drawn = self.lines.edges()
            .map(|line| {
                let (from, to) = self.line_coords(line);
                LineString::notate(&from, &to)
            })
            .join(" ");
        let closed = (0..self.box_count())
            .filter(|&b| self.is_closed(b))
            .map(|b| self.box_coord(b).notate())
            .join(" ");
        format!("{}x{}; {}; {}", self.columns, self.rows, drawn, closed)
    }
}
