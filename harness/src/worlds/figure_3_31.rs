//! The polygon field of AIMA Figure 3.31.
//!
//! Eight convex obstacles between `S` at (0.0, 0.7) and `G` at (9.1, 5.0).
//! Polygon sides are connected automatically; every cross-polygon edge is
//! asserted by hand, so the graph does not depend on visibility sampling.

use super::geometry::Point;
use super::visibility::{PolygonPathProblem, VisibilityGraph};
use crate::contract::WorldError;

/// World identifier used in reports.
pub const WORLD_ID: &str = "figure_3_31";

type Corner = (&'static str, f64, f64);

const POLYGONS: &[(&str, &[Corner])] = &[
    (
        "Rect1",
        &[
            ("rec1", 0.5, 0.0),
            ("rec2", 0.5, 1.4),
            ("rec3", 4.6, 1.4),
            ("rec4", 4.6, 0.0),
        ],
    ),
    (
        "Pent",
        &[
            ("pent1", 1.7, 2.0),
            ("pent2", 0.3, 2.3),
            ("pent3", 0.0, 3.8),
            ("pent4", 1.5, 5.1),
            ("pent5", 2.6, 3.7),
        ],
    ),
    (
        "Tri1",
        &[("tri1", 2.5, 1.8), ("tri2", 3.1, 4.0), ("tri3", 3.7, 1.8)],
    ),
    (
        "Quad1",
        &[
            ("quad1", 3.9, 3.3),
            ("quad2", 3.7, 4.9),
            ("quad3", 4.8, 5.1),
            ("quad4", 5.7, 4.4),
        ],
    ),
    (
        "Tri2",
        &[
            ("tri_2_1", 5.4, 0.7),
            ("tri_2_2", 4.9, 2.6),
            ("tri_2_3", 6.3, 1.5),
        ],
    ),
    (
        "Rect2",
        &[
            ("rec_2_1", 5.8, 2.2),
            ("rec_2_2", 5.8, 5.0),
            ("rec_2_3", 7.5, 5.0),
            ("rec_2_4", 7.5, 2.2),
        ],
    ),
    (
        "Hex",
        &[
            ("hex1", 7.7, 0.0),
            ("hex2", 6.8, 0.6),
            ("hex3", 6.8, 1.5),
            ("hex4", 7.7, 2.2),
            ("hex5", 8.5, 1.5),
            ("hex6", 8.5, 0.4),
        ],
    ),
    (
        "Quad2",
        &[
            ("quad_2_1", 8.7, 1.8),
            ("quad_2_2", 7.8, 4.7),
            ("quad_2_3", 8.6, 5.0),
            ("quad_2_4", 8.9, 4.5),
        ],
    ),
];

/// Hand-asserted cross-polygon visibility, in assertion order.
const CROSS_EDGES: &[(&str, &[&str])] = &[
    ("S", &["rec1", "rec2", "pent2", "pent3"]),
    ("rec1", &["pent2", "pent3"]),
    ("rec2", &["pent1", "pent2", "tri1", "tri3"]),
    (
        "rec3",
        &["pent1", "tri1", "tri2", "tri3", "quad1", "tri_2_1", "tri_2_2"],
    ),
    (
        "rec4",
        &["tri_2_1", "tri_2_2", "tri_2_3", "hex1", "hex2", "hex3", "rec_2_4"],
    ),
    ("pent1", &["tri1", "tri2"]),
    ("pent4", &["tri2", "quad2", "quad3"]),
    ("pent5", &["tri1", "tri2", "quad2"]),
    ("tri2", &["quad1", "quad2", "tri_2_1"]),
    ("tri3", &["quad1", "quad2", "quad4", "tri_2_2"]),
    ("quad1", &["tri_2_1", "tri_2_2", "rec_2_1"]),
    ("quad3", &["rec_2_2", "rec_2_3", "quad_2_3"]),
    ("quad4", &["tri_2_2", "rec_2_1", "rec_2_2"]),
    ("tri_2_1", &["rec_2_4", "hex1", "hex2", "hex3", "hex4"]),
    ("tri_2_2", &["rec_2_1", "hex3"]),
    ("tri_2_3", &["rec_2_1", "rec_2_4", "hex2", "hex3", "hex4"]),
    ("rec_2_1", &["hex3", "hex4"]),
    ("rec_2_2", &["quad_2_3"]),
    (
        "rec_2_3",
        &["quad_2_1", "quad_2_2", "quad_2_3", "hex4", "hex5"],
    ),
    ("rec_2_4", &["hex3", "hex4", "quad_2_1", "quad_2_2"]),
    ("hex4", &["quad_2_1", "quad_2_2"]),
    ("hex5", &["quad_2_1", "quad_2_2"]),
    ("hex6", &["quad_2_1", "G"]),
    ("quad_2_1", &["G"]),
    ("quad_2_3", &["G"]),
    ("quad_2_4", &["G"]),
];

/// Build the Figure 3.31 visibility graph.
///
/// # Errors
///
/// Only if the tables above are inconsistent; the shipped tables build.
pub fn build() -> Result<VisibilityGraph, WorldError> {
    let mut graph = VisibilityGraph::new();
    graph.set_start("S", Point::new(0.0, 0.7))?;

    for &(label, corners) in POLYGONS {
        for &(name, x, y) in corners {
            graph.add_vertex(name, Point::new(x, y))?;
        }
        let names: Vec<&str> = corners.iter().map(|&(name, _, _)| name).collect();
        graph.connect_polygon(&names, Some(label))?;
    }

    graph.set_goal("G", Point::new(9.1, 5.0))?;

    for &(from, to) in CROSS_EDGES {
        graph.assert_reachable(from, to)?;
    }
    Ok(graph)
}

/// The `S` to `G` path problem over [`build`].
///
/// # Errors
///
/// See [`build`].
pub fn problem() -> Result<PolygonPathProblem, WorldError> {
    Ok(PolygonPathProblem::new(build()?)?.with_world_id(WORLD_ID))
}
