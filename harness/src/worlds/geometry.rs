//! Planar geometry for visibility checks.
//!
//! Segment intersection uses orientation tests with a collinearity tolerance
//! of [`COLLINEAR_EPSILON`]. Point-in-polygon is plain ray casting, so points
//! on a polygon boundary may land on either side.

use std::fmt;

/// Cross products smaller than this are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-9;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at parameter `t` along the segment `self -> other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val.abs() < COLLINEAR_EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies within the bounding box of `p` and `r`.
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    p.x.min(r.x) <= q.x && q.x <= p.x.max(r.x) && p.y.min(r.y) <= q.y && q.y <= p.y.max(r.y)
}

/// Whether segments `p1 -> q1` and `p2 -> q2` intersect, touching included.
#[must_use]
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Ray-casting containment test. An empty polygon contains nothing.
#[must_use]
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if crossing_x > point.x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Interior sample points along `p1 -> p2` at `i / samples` for
/// `i in 1..samples`. Endpoints are never yielded.
#[allow(clippy::cast_precision_loss)]
pub fn sample_line(p1: Point, p2: Point, samples: usize) -> impl Iterator<Item = Point> {
    let denom = samples as f64;
    (1..samples).map(move |i| p1.lerp(p2, i as f64 / denom))
}

/// Whether `p1 -> p2` crosses no polygon edge and no interior sample point
/// lies inside a polygon.
///
/// Edges sharing an endpoint with the segment are ignored, so a segment may
/// start or end on a polygon corner.
#[must_use]
pub fn line_clear(p1: Point, p2: Point, polygons: &[Vec<Point>], samples: usize) -> bool {
    for polygon in polygons {
        let n = polygon.len();
        for i in 0..n {
            let v1 = polygon[i];
            let v2 = polygon[(i + 1) % n];
            if v1 == p1 || v1 == p2 || v2 == p1 || v2 == p2 {
                continue;
            }
            if segments_intersect(p1, p2, v1, v2) {
                return false;
            }
        }
    }

    !sample_line(p1, p2, samples)
        .any(|pt| polygons.iter().any(|polygon| point_in_polygon(pt, polygon)))
}
