//! Tolerance defaults for triangle checks (internal).
//!
//! Policy
//! - Fixed constants, no runtime configuration. The right-angle check uses an
//!   absolute tolerance, so very large or very small triangles may be
//!   misclassified; this is a known limitation and kept on purpose.

/// Absolute tolerance for `|s0² + s1² - s2²|` in the right-angle check.
pub(crate) const RIGHT_ANGLE_EPS: f64 = 1e-9;
