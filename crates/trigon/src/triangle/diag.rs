//! Non-fatal construction diagnostics.
//!
//! Diagnostics are data attached to a `Triangle`; logging them is up to the
//! caller (`Triangle::log_diagnostics`).

use std::fmt;

/// Condition detected while deriving sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Vertex-derived sides violate the triangle inequality (collinear points).
    VerticesNotTriangle,
    /// Given sides violate the triangle inequality.
    SidesNotTriangle,
    /// Medians fail the feasibility check; sides were zeroed.
    MediansNotTriangle,
    /// Medians were feasible but the derived sides fail re-validation.
    DerivedSidesInconsistent,
    /// Pythagorean relation does not hold within tolerance.
    NotRightAngled,
}

impl Diagnostic {
    /// Stable short code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::VerticesNotTriangle => "vertices_not_triangle",
            Diagnostic::SidesNotTriangle => "sides_not_triangle",
            Diagnostic::MediansNotTriangle => "medians_not_triangle",
            Diagnostic::DerivedSidesInconsistent => "derived_sides_inconsistent",
            Diagnostic::NotRightAngled => "not_right_angled",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Diagnostic::VerticesNotTriangle => "the given vertices do not form a triangle",
            Diagnostic::SidesNotTriangle => "the given side lengths do not form a triangle",
            Diagnostic::MediansNotTriangle => "the given medians do not form a triangle",
            Diagnostic::DerivedSidesInconsistent => {
                "sides derived from the medians do not form a triangle (rounding?)"
            }
            Diagnostic::NotRightAngled => "the triangle is not right-angled",
        };
        f.write_str(msg)
    }
}
