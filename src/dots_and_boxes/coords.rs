use crate::dots_and_boxes::prelude::*;

/// A dot position on the board, as (column, row) from the top-left dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((col, row)) = s.trim().split_once(',') else {
            return Err(anyhow!("expected a coordinate of the form col,row; received {s}"));
        };
        let col = col.trim().parse::<usize>().with_context(|| format!("bad column in {s}"))?;
        let row = row.trim().parse::<usize>().with_context(|| format!("bad row in {s}"))?;
        Ok(Coord { col, row })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(col: usize, row: usize) -> Coord {
        Coord { col, row }
    }

    /// The canonical notation of the coord.
    pub fn notate(&self) -> String {
        format!("{},{}", self.col, self.row)
    }

    /// Whether two dots are joined by a single line segment on the grid.
    pub fn is_orthogonal_to(&self, other: &Coord) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn parses_and_notates() {
        let coord = "3, 2".parse::<Coord>().unwrap();
        assert_eq!(coord, Coord::new(3, 2));
        assert_eq!(coord.notate(), "3,2");
        assert!("32".parse::<Coord>().is_err());
        assert!("-1,2".parse::<Coord>().is_err());
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let origin = Coord::new(1, 1);
        assert!(origin.is_orthogonal_to(&Coord::new(1, 0)));
        assert!(origin.is_orthogonal_to(&Coord::new(2, 1)));
        assert!(!origin.is_orthogonal_to(&Coord::new(2, 2)));
        assert!(!origin.is_orthogonal_to(&origin));
    }
}
