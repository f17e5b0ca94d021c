//! Triangles from vertices, sides, or medians, plus the right-triangle facet.
//!
//! Purpose
//! - Derive a canonical `Sides` triple eagerly at construction, whatever the
//!   input kind, and answer every metric query from that triple alone.
//! - Never fail: invalid input leaves a degenerate triangle (metrics read 0)
//!   and records a `Diagnostic` the caller may log or ignore.
//!
//! Variants
//! - `Kind::Vertices`: Euclidean distances between three points.
//! - `Kind::Sides`: sides given directly.
//! - `Kind::Medians`: feasibility check on the medians, then median inversion,
//!   then re-validation of the derived sides.
//! - `Kind::Right`: built like `Sides`, plus the Pythagorean check; radii are
//!   reachable through `Triangle::as_right`.
//!
//! Code cross-refs: `formulas`, `right::{right_facet, RightTriangle}`, `Diagnostic`

mod cfg;
mod diag;
pub mod formulas;
mod right;
mod types;

use std::fmt;

pub use diag::Diagnostic;
pub use right::{right_facet, RightFacet, RightTriangle};
pub use types::{Label, Point, Sides};

/// How the triangle was specified, with the defining inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    Vertices([Point; 3]),
    Sides,
    Medians { ma: f64, mb: f64, mc: f64 },
    Right,
}

impl Kind {
    /// Short name, used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Vertices(_) => "vertices",
            Kind::Sides => "sides",
            Kind::Medians { .. } => "medians",
            Kind::Right => "right",
        }
    }
}

/// A triangle with eagerly derived sides.
///
/// Invariants:
/// - `sides` never changes after construction.
/// - Either `is_valid()` holds, or `diagnostics` names why not.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    sides: Sides,
    kind: Kind,
    diagnostics: Vec<Diagnostic>,
}

impl Triangle {
    /// Sides from three points: `a = |v2 v3|`, `b = |v1 v3|`, `c = |v1 v2|`.
    pub fn by_vertices(v1: Point, v2: Point, v3: Point) -> Self {
        let verts = [v1, v2, v3];
        let sides = formulas::sides_from_vertices(&verts);
        let mut diagnostics = Vec::new();
        if !formulas::is_valid(&sides) {
            diagnostics.push(Diagnostic::VerticesNotTriangle);
        }
        Self {
            sides,
            kind: Kind::Vertices(verts),
            diagnostics,
        }
    }

    /// Sides taken as given.
    pub fn by_sides(a: f64, b: f64, c: f64) -> Self {
        Self::from_given_sides(Sides::new(a, b, c), Kind::Sides)
    }

    /// Sides from three medians (two-stage check).
    pub fn by_medians(ma: f64, mb: f64, mc: f64) -> Self {
        let kind = Kind::Medians { ma, mb, mc };
        if !formulas::medians_feasible(ma, mb, mc) {
            return Self {
                sides: Sides::zero(),
                kind,
                diagnostics: vec![Diagnostic::MediansNotTriangle],
            };
        }
        let sides = formulas::sides_from_medians(ma, mb, mc);
        let mut diagnostics = Vec::new();
        if !formulas::is_valid(&sides) {
            diagnostics.push(Diagnostic::DerivedSidesInconsistent);
        }
        Self {
            sides,
            kind,
            diagnostics,
        }
    }

    /// Sides taken as given, then checked for a right angle.
    pub fn right(a: f64, b: f64, c: f64) -> Self {
        let mut tri = Self::from_given_sides(Sides::new(a, b, c), Kind::Right);
        if right_facet(&tri.sides).is_none() {
            tri.diagnostics.push(Diagnostic::NotRightAngled);
        }
        tri
    }

    fn from_given_sides(sides: Sides, kind: Kind) -> Self {
        let mut diagnostics = Vec::new();
        if !formulas::is_valid(&sides) {
            diagnostics.push(Diagnostic::SidesNotTriangle);
        }
        Self {
            sides,
            kind,
            diagnostics,
        }
    }

    #[inline]
    pub fn sides(&self) -> Sides {
        self.sides
    }
    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }
    /// Conditions recorded at construction; empty for a clean derivation.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        formulas::is_valid(&self.sides)
    }
    pub fn perimeter(&self) -> f64 {
        formulas::perimeter(&self.sides)
    }
    pub fn area(&self) -> f64 {
        formulas::area(&self.sides)
    }
    /// Median to side `label` (case-insensitive); 0 for unknown labels.
    pub fn median(&self, label: char) -> f64 {
        Label::from_char(label).map_or(0.0, |l| formulas::median(&self.sides, l))
    }
    /// Midline parallel to side `label` (case-insensitive); 0 for unknown labels.
    pub fn midline(&self, label: char) -> f64 {
        Label::from_char(label).map_or(0.0, |l| formulas::midline(&self.sides, l))
    }

    /// Right-triangle capability; `None` unless built with `Triangle::right`.
    pub fn as_right(&self) -> Option<RightTriangle<'_>> {
        match self.kind {
            Kind::Right => Some(RightTriangle { tri: self }),
            _ => None,
        }
    }

    /// Multi-line human-readable summary. Same text as `Display`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Emit each recorded diagnostic as a `warn` event.
    pub fn log_diagnostics(&self) {
        let Sides { a, b, c } = self.sides;
        for d in &self.diagnostics {
            tracing::warn!(code = d.code(), kind = self.kind.name(), a, b, c, "{d}");
        }
    }
}

fn write_sides(f: &mut fmt::Formatter<'_>, label: &str, s: &Sides) -> fmt::Result {
    writeln!(f, "  {label}: a={}, b={}, c={}", s.a, s.b, s.c)
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Vertices([v1, v2, v3]) => {
                writeln!(f, "  Kind: triangle by vertices")?;
                writeln!(
                    f,
                    "  Vertices: V1({}, {}), V2({}, {}), V3({}, {})",
                    v1.x, v1.y, v2.x, v2.y, v3.x, v3.y
                )?;
                write_sides(f, "Sides", &self.sides)
            }
            Kind::Sides => {
                writeln!(f, "  Kind: triangle by sides")?;
                write_sides(f, "Sides", &self.sides)
            }
            Kind::Medians { ma, mb, mc } => {
                writeln!(f, "  Kind: triangle by medians")?;
                writeln!(f, "  Medians: ma={ma}, mb={mb}, mc={mc}")?;
                write_sides(f, "Sides (derived)", &self.sides)
            }
            Kind::Right => match right_facet(&self.sides).filter(|_| self.is_valid()) {
                Some(rf) => {
                    writeln!(f, "  Kind: right triangle")?;
                    writeln!(
                        f,
                        "  Sides: catheti {}, {}; hypotenuse {}",
                        rf.cathetus1, rf.cathetus2, rf.hypotenuse
                    )
                }
                None => {
                    writeln!(f, "  Kind: triangle by sides")?;
                    write_sides(f, "Sides", &self.sides)?;
                    writeln!(f, "  (not a valid right triangle; radii not computed)")
                }
            },
        }
    }
}
