use super::*;

impl Board {
    /// Gets the dot vertex at a given coordinate.
    pub fn vertex_of(&self, coord: &Coord) -> std::result::Result<Vertex, MoveError> {
        if coord.col <= self.columns && coord.row <= self.rows {
            Ok(coord.row * (self.columns + 1) + coord.col)
        } else {
            Err(MoveError::UnknownCoord(*coord))
        }
    }

    /// Gets the coordinate of a dot vertex.
    ///
    /// # Panics
    /// If `v` is not a dot on this board.
    pub fn coord_of(&self, v: Vertex) -> Coord {
        self.coords[v]
    }

    /// The line joining two dots given by coordinate, in either order.
    pub fn line_between(&self, from: &Coord, to: &Coord) -> std::result::Result<Edge, MoveError> {
        Ok(Edge::new(self.vertex_of(from)?, self.vertex_of(to)?))
    }

    /// The coordinate a box is reported by: that of its top-left dot.
    pub fn box_coord(&self, b: usize) -> Coord {
        let [top, ..] = builder::box_boundary(b, self.columns);
        self.coord_of(top.low())
    }

    /// Both ends of a line, as coordinates.
    pub fn line_coords(&self, line: Edge) -> (Coord, Coord) {
        (self.coord_of(line.low()), self.coord_of(line.high()))
    }
}
