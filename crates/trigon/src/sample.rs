//! Random valid triangles (seeded, replayable).
//!
//! Purpose
//! - Deterministic inputs for tests and benchmarks. Every draw is addressed by
//!   a `ReplayToken { seed, index }`, so a failing case can be rebuilt alone.
//!
//! Model
//! - Sides: two lengths uniform in `[min_len, max_len]`, the third uniform in
//!   the open interval allowed by the triangle inequality, pulled inwards by
//!   `margin` (relative) to stay clear of degenerate shapes.
//! - Vertices: three points uniform in the square `[-max_len, max_len]²`,
//!   redrawn while the triangle is too thin (`min_area`).
//! - Right: two legs as for sides, hypotenuse from `hypot`.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::triangle::Triangle;

/// Smallest relative margin; keeps `c` strictly inside `(|a-b|, a+b)`.
pub const MIN_MARGIN: f64 = 1e-6;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub min_len: f64,
    pub max_len: f64,
    /// Relative margin kept from the inequality bounds. Clamped to [MIN_MARGIN, 0.49].
    pub margin: f64,
    /// Minimum area for vertex draws.
    pub min_area: f64,
    /// Redraw budget for vertex draws.
    pub max_tries: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            min_len: 0.5,
            max_len: 10.0,
            margin: 0.05,
            min_area: 1e-3,
            max_tries: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index).
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn len_range(cfg: &SampleCfg) -> (f64, f64) {
    let lo = cfg.min_len.max(1e-9);
    let hi = cfg.max_len.max(lo * 2.0);
    (lo, hi)
}

/// Valid triangle built with `Triangle::by_sides`.
pub fn draw_sides(cfg: SampleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = len_range(&cfg);
    let m = cfg.margin.clamp(MIN_MARGIN, 0.49);
    let a = rng.gen_range(lo..hi);
    let b = rng.gen_range(lo..hi);
    let c_lo = (a - b).abs();
    let c_hi = a + b;
    let span = c_hi - c_lo;
    // Half-open range includes its start, so the margin must stay positive.
    let c = rng.gen_range((c_lo + m * span)..(c_hi - m * span));
    Triangle::by_sides(a, b, c)
}

/// Valid triangle built with `Triangle::by_vertices`; `None` if the redraw
/// budget runs out.
pub fn draw_vertices(cfg: SampleCfg, tok: ReplayToken) -> Option<Triangle> {
    let mut rng = tok.to_std_rng();
    let (_, hi) = len_range(&cfg);
    for _ in 0..cfg.max_tries.max(1) {
        let mut pt = || Point2::new(rng.gen_range(-hi..hi), rng.gen_range(-hi..hi));
        let (p, q, r) = (pt(), pt(), pt());
        let t = Triangle::by_vertices(p, q, r);
        if t.is_valid() && t.area() >= cfg.min_area {
            return Some(t);
        }
    }
    None
}

/// Right triangle built with `Triangle::right`; legs in `[min_len, max_len]`.
pub fn draw_right(cfg: SampleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = len_range(&cfg);
    let p = rng.gen_range(lo..hi);
    let q = rng.gen_range(lo..hi);
    Triangle::right(p, q, p.hypot(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_valid_and_replayable() {
        let cfg = SampleCfg::default();
        for index in 0..200 {
            let tok = ReplayToken { seed: 7, index };
            let t = draw_sides(cfg, tok);
            assert!(t.is_valid(), "sides draw {index} invalid: {:?}", t.sides());
            assert_eq!(t, draw_sides(cfg, tok));
            let v = draw_vertices(cfg, tok).expect("vertex draw within budget");
            assert!(v.is_valid());
            assert!(v.diagnostics().is_empty());
        }
    }

    #[test]
    fn zero_margin_still_draws_valid_sides() {
        let cfg = SampleCfg {
            margin: 0.0,
            ..SampleCfg::default()
        };
        for index in 0..500 {
            let t = draw_sides(cfg, ReplayToken { seed: 19, index });
            let s = t.sides();
            assert!(s.c > (s.a - s.b).abs(), "index {index}: {s:?}");
            assert!(t.is_valid());
            assert!(t.diagnostics().is_empty());
        }
    }

    #[test]
    fn right_draws_pass_the_check() {
        let cfg = SampleCfg::default();
        for index in 0..100 {
            let t = draw_right(cfg, ReplayToken { seed: 3, index });
            let r = t.as_right().expect("right kind");
            assert!(r.is_right_angled(), "index {index}: {:?}", t.sides());
            assert!(r.inscribed_radius() > 0.0);
        }
    }
}
