//! Triangle metrics from vertices, sides, or medians.
//!
//! Every triangle derives its sides `(a, b, c)` eagerly and answers
//! perimeter/area/median/midline queries from them. Invalid input never fails:
//! metrics read 0 and the triangle carries a `Diagnostic`.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer `api` or `prelude` imports over deep module paths in callers.

pub mod api;
pub mod sample;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use triangle::{Diagnostic, Kind, Label, Point, RightTriangle, Sides, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_right, draw_sides, draw_vertices, ReplayToken, SampleCfg};
    pub use crate::triangle::{
        right_facet, Diagnostic, Kind, Label, Point, RightFacet, RightTriangle, Sides, Triangle,
    };
}
