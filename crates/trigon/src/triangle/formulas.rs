//! Closed-form formulas over `Sides`.
//!
//! Every metric is total: an invalid triangle yields `0.0` instead of an
//! error, and no square root is taken on the invalid path.

use super::types::{Label, Point, Sides};

/// Strict triangle inequality over any three lengths.
#[inline]
pub(crate) fn strict_inequality(x: f64, y: f64, z: f64) -> bool {
    x + y > z && x + z > y && y + z > x
}

/// True iff `a+b>c`, `a+c>b`, `b+c>a` (collinear is invalid).
#[inline]
pub fn is_valid(s: &Sides) -> bool {
    strict_inequality(s.a, s.b, s.c)
}

/// `a+b+c`, or 0 when invalid.
pub fn perimeter(s: &Sides) -> f64 {
    if !is_valid(s) {
        return 0.0;
    }
    s.a + s.b + s.c
}

/// Heron's formula with `s = perimeter/2`; 0 when invalid.
pub fn area(s: &Sides) -> f64 {
    if !is_valid(s) {
        return 0.0;
    }
    let p = perimeter(s) / 2.0;
    (p * (p - s.a) * (p - s.b) * (p - s.c)).sqrt()
}

/// Median to the side named `label`: `0.5 * sqrt(2y² + 2z² - x²)`.
pub fn median(s: &Sides, label: Label) -> f64 {
    if !is_valid(s) {
        return 0.0;
    }
    let (x, y, z) = s.rotated(label);
    0.5 * (2.0 * y * y + 2.0 * z * z - x * x).sqrt()
}

/// Midline parallel to the side named `label`: half that side; 0 when invalid.
pub fn midline(s: &Sides, label: Label) -> f64 {
    if !is_valid(s) {
        return 0.0;
    }
    s.get(label) / 2.0
}

/// The three medians `(ma, mb, mc)`; all zero when invalid.
pub fn medians_of(s: &Sides) -> [f64; 3] {
    Label::ALL.map(|l| median(s, l))
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    nalgebra::distance(&p, &q)
}

/// `a = |v2 v3|`, `b = |v1 v3|`, `c = |v1 v2|`.
pub fn sides_from_vertices(v: &[Point; 3]) -> Sides {
    Sides::new(distance(v[1], v[2]), distance(v[0], v[2]), distance(v[0], v[1]))
}

/// Necessary condition for three medians to belong to a triangle.
#[inline]
pub fn medians_feasible(ma: f64, mb: f64, mc: f64) -> bool {
    strict_inequality(ma, mb, mc)
}

/// Median inversion: `a = (2/3) * sqrt(2mb² + 2mc² - ma²)` and symmetric.
///
/// Pre: `medians_feasible(ma, mb, mc)`; feasible medians keep every radicand
/// positive.
pub fn sides_from_medians(ma: f64, mb: f64, mc: f64) -> Sides {
    let inv = |x: f64, y: f64, z: f64| (2.0 / 3.0) * (2.0 * y * y + 2.0 * z * z - x * x).sqrt();
    Sides::new(inv(ma, mb, mc), inv(mb, ma, mc), inv(mc, ma, mb))
}

/// Sides sorted ascending.
pub(crate) fn sorted(s: &Sides) -> [f64; 3] {
    let mut arr = s.as_array();
    arr.sort_by(|x, y| x.total_cmp(y));
    arr
}
