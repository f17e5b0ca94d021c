//! Basic value types shared by every triangle variant.
//!
//! - `Point`: 2D position (`nalgebra::Point2<f64>`).
//! - `Sides`: the canonical `(a, b, c)` representation.
//! - `Label`: side/vertex name parsed case-insensitively from a `char`.

use nalgebra::Point2;

/// 2D point; value type.
pub type Point = Point2<f64>;

/// Side lengths `(a, b, c)`; `a` is opposite vertex 1, `b` opposite vertex 2,
/// `c` opposite vertex 3.
///
/// Invariants:
/// - Non-negative for every constructor in this crate.
/// - Not necessarily a valid triangle; see `formulas::is_valid`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Sides {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    /// Degenerate sentinel used when derivation is abandoned.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }
    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
    /// Side named by `label`.
    #[inline]
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::A => self.a,
            Label::B => self.b,
            Label::C => self.c,
        }
    }
    /// The named side followed by the other two, in `(x, y, z)` order.
    #[inline]
    pub(crate) fn rotated(&self, label: Label) -> (f64, f64, f64) {
        match label {
            Label::A => (self.a, self.b, self.c),
            Label::B => (self.b, self.a, self.c),
            Label::C => (self.c, self.a, self.b),
        }
    }
}

impl From<[f64; 3]> for Sides {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self { a, b, c }
    }
}

/// Side (or opposite vertex) name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    /// Case-insensitive parse; `None` for anything outside `{a, b, c}`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(Label::A),
            'b' => Some(Label::B),
            'c' => Some(Label::C),
            _ => None,
        }
    }
}

impl TryFrom<char> for Label {
    type Error = char;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Label::from_char(ch).ok_or(ch)
    }
}
