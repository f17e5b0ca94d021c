//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   callers (the CLI, benches). Breaking changes are allowed.

// Triangle variants and the right-triangle capability
pub use crate::triangle::{
    right_facet, Diagnostic, Kind, Label, Point, RightFacet, RightTriangle, Sides, Triangle,
};
// Shared formulas over side triples
pub use crate::triangle::formulas::{
    area, distance, is_valid, median, medians_feasible, medians_of, midline, perimeter,
    sides_from_medians, sides_from_vertices,
};
// Seeded sampling
pub use crate::sample::{draw_right, draw_sides, draw_vertices, ReplayToken, SampleCfg};

/// Sample triangles shown by the demonstration driver, one per kind.
pub fn demo_triangles() -> Vec<Triangle> {
    vec![
        Triangle::by_vertices(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ),
        Triangle::by_sides(5.0, 6.0, 7.0),
        Triangle::by_medians(7.5, 6.0, 4.5),
        Triangle::right(3.0, 4.0, 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn demo_set_is_clean() {
        let tris = demo_triangles();
        assert_eq!(tris.len(), 4);
        for t in &tris {
            assert!(t.is_valid(), "{}", t.describe());
            assert!(t.diagnostics().is_empty());
        }
        assert_eq!(tris.iter().filter(|t| t.as_right().is_some()).count(), 1);
    }

    #[test]
    fn scaling_scales_metrics_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let t = draw_sides(SampleCfg::default(), ReplayToken { seed: 42, index: 0 });
        let k: f64 = rng.gen_range(0.5..4.0);
        let s = t.sides();
        let scaled = Triangle::by_sides(k * s.a, k * s.b, k * s.c);
        assert!((scaled.perimeter() - k * t.perimeter()).abs() < 1e-9);
        assert!((scaled.area() - k * k * t.area()).abs() < 1e-9 * k * k * t.area().max(1.0));
        assert!((scaled.median('b') - k * t.median('b')).abs() < 1e-9);
    }
}
