#![forbid(unsafe_code)]

//! Easing and counter interpolation.
//!
//! Counters ease out cubically: fast at first, settling gently on the
//! target. All functions clamp their progress input to `[0.0, 1.0]`.

/// Cubic ease-out: `1 - (1 - t)^3`.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Integer shown by a counter running from `from` to `to` at `progress`.
///
/// The result is rounded and never leaves the closed range spanned by
/// `from` and `to`; at `progress >= 1.0` it is exactly `to`.
#[must_use]
pub fn counter_value(from: u32, to: u32, progress: f64) -> u32 {
    if progress >= 1.0 {
        return to;
    }
    let eased = ease_out_cubic(progress);
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * eased;
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    (value.round() as u32).clamp(lo, hi)
}

/// Text rendered by a percentage counter.
#[must_use]
pub fn percent_text(value: u32) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn ease_out_cubic_clamps_input() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn counter_value_hits_endpoints() {
        assert_eq!(counter_value(0, 100, 0.0), 0);
        assert_eq!(counter_value(0, 100, 1.0), 100);
        assert_eq!(counter_value(0, 100, 2.5), 100);
        assert_eq!(counter_value(0, 100, 0.5), 88);
    }

    #[test]
    fn counter_value_counts_down() {
        assert_eq!(counter_value(100, 0, 0.0), 100);
        assert_eq!(counter_value(100, 0, 1.0), 0);
        let mid = counter_value(100, 0, 0.5);
        assert!(mid < 100 && mid > 0);
    }

    #[test]
    fn percent_text_formats() {
        assert_eq!(percent_text(0), "0%");
        assert_eq!(percent_text(85), "85%");
    }
}
