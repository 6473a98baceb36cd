//! `mathcore::floats` submodule implements floating point equality that is used
//! throughout `ggui` crate.
//!

/// Constant that is used in floating point equality.
///
/// It represents relative amount of difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// This function implements floating point equality for `ggui` crate.
///
/// It is used for implementing `PartialEq` on types that are based on float
/// and for comparing derived values such as composed opacities.
///
/// # Example
/// ```rust
/// # use ggui::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(0.5 * 0.5, 0.25));
/// assert!(!almost_equal(0.5, 0.25));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff < (norm * EPSILON).max(f32::MIN_POSITIVE)
}

#[cfg(test)]
mod tests {
    #[test]
    fn float_equality() {
        use super::almost_equal;

        assert!(almost_equal(0.0, 0.0));
        assert!(almost_equal(-0.0, 0.0));
        assert!(almost_equal(1600.0, 1600.000001));
        assert!(!almost_equal(1.0, 1.001));
        assert!(!almost_equal(0.0, 0.1));
    }
}
