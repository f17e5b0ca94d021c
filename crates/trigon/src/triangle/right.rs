//! Right-triangle facet: Pythagorean check and circle radii.
//!
//! Nothing here is cached. `right_facet` re-sorts the sides on every call so
//! the answer is always a pure function of `(a, b, c)`.

use super::cfg::RIGHT_ANGLE_EPS;
use super::formulas::sorted;
use super::types::Sides;
use super::Triangle;

/// Legs and hypotenuse of a right triangle, ascending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RightFacet {
    pub cathetus1: f64,
    pub cathetus2: f64,
    pub hypotenuse: f64,
}

impl RightFacet {
    /// `(c1 + c2 - h) / 2`.
    #[inline]
    pub fn inscribed_radius(&self) -> f64 {
        (self.cathetus1 + self.cathetus2 - self.hypotenuse) / 2.0
    }
    /// `h / 2`.
    #[inline]
    pub fn circumscribed_radius(&self) -> f64 {
        self.hypotenuse / 2.0
    }
}

/// `Some` iff `|s0² + s1² - s2²| < RIGHT_ANGLE_EPS` for the sorted sides.
///
/// The tolerance is absolute, not scaled by the side lengths.
pub fn right_facet(s: &Sides) -> Option<RightFacet> {
    let [s0, s1, s2] = sorted(s);
    if (s0 * s0 + s1 * s1 - s2 * s2).abs() < RIGHT_ANGLE_EPS {
        Some(RightFacet {
            cathetus1: s0,
            cathetus2: s1,
            hypotenuse: s2,
        })
    } else {
        None
    }
}

/// Borrowed view of a triangle built with `Triangle::right`.
///
/// Obtained through `Triangle::as_right`; radius queries are only reachable
/// here.
#[derive(Clone, Copy, Debug)]
pub struct RightTriangle<'a> {
    pub(super) tri: &'a Triangle,
}

impl<'a> RightTriangle<'a> {
    #[inline]
    pub fn triangle(&self) -> &'a Triangle {
        self.tri
    }
    #[inline]
    pub fn is_right_angled(&self) -> bool {
        self.facet().is_some()
    }
    /// Recomputed from the sides on every call.
    #[inline]
    pub fn facet(&self) -> Option<RightFacet> {
        right_facet(&self.tri.sides())
    }
    /// Facet of a valid triangle only; radii read from this.
    #[inline]
    fn measurable_facet(&self) -> Option<RightFacet> {
        self.facet().filter(|_| self.tri.is_valid())
    }
    /// 0 when invalid or not right-angled.
    pub fn inscribed_radius(&self) -> f64 {
        self.measurable_facet().map_or(0.0, |f| f.inscribed_radius())
    }
    /// 0 when invalid or not right-angled.
    pub fn circumscribed_radius(&self) -> f64 {
        self.measurable_facet().map_or(0.0, |f| f.circumscribed_radius())
    }
}
