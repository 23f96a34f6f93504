//! Coordinate value type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A 2D position or size in millimetres.
///
/// Equality is exact: two points are equal only when both coordinates are
/// bitwise identical (`-0.0` is treated as `0.0`). No tolerance is applied, so
/// layouts that should share a hole must use identical coordinates. `Hash` and
/// `Ord` follow the same rule, which keeps sets of points consistent.
///
/// Serialized as a two-element array, `[x, y]`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pointwise maximum of two points.
    pub fn max(self, other: Point2D) -> Point2D {
        Point2D::new(self.x.max(other.x), self.y.max(other.y))
    }

    fn canonical(&self) -> (f64, f64) {
        (canonical(self.x), canonical(self.y))
    }
}

fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        let (ax, ay) = self.canonical();
        let (bx, by) = other.canonical();
        ax.to_bits() == bx.to_bits() && ay.to_bits() == by.to_bits()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.canonical();
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.canonical();
        let (bx, by) = other.canonical();
        ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
    }
}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}mm, {}mm)", self.x, self.y)
    }
}
