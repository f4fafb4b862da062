/*
 *  The board model for Dots and Boxes: a line graph over the dots, and a chain graph over the boxes.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod errors;
pub mod graph;
pub mod notation;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{
            Board, Crossings, GeometricBoard, MoveOutcome,
            builder::{build_chain_graph, build_edge_intersection_map, build_geometric_graph}
        },
        consts::*,
        coords::Coord,
        errors::*,
        graph::{Edge, Graph, Vertex, traversal::{connected_components, reachable_set}},
        notation::*,
    };
}
