//! The periodic lamp-state predicate.
//!
//! A lamp repeats a `bright + dark` duty cycle forever from `t = 0`:
//! lit on `[0, bright)`, unlit on `[bright, bright + dark)`. The
//! predicate here samples that cycle at a single instant.
//!
//! # The epsilon tie-break
//!
//! The comparison is `phase + eps < bright`, so a phase exactly equal
//! to `bright` (the falling edge of the lit window) resolves to NOT
//! lit. The same slack means a phase that *should* equal `bright` but
//! underestimates it due to floating-point rounding can still flip to
//! lit. This asymmetry is a deliberate product decision carried over
//! from the original service; do not "correct" it without a product
//! call.

/// Whether a lamp is in its bright phase at time `t`.
///
/// Degenerate lamps are never lit: `bright <= 0` or a non-positive
/// period (`bright + dark <= 0`) always returns `false`. Otherwise the
/// phase is `t` reduced modulo the period into `[0, period)`, and the
/// lamp is lit iff `phase + eps < bright`.
///
/// Pure function of its four inputs; safe to call from any thread.
pub fn is_lit(t: f64, bright: f64, dark: f64, eps: f64) -> bool {
    if bright <= 0.0 {
        return false;
    }
    let period = bright + dark;
    if period <= 0.0 {
        return false;
    }
    let phase = t.rem_euclid(period);
    phase + eps < bright
}

#[cfg(test)]
mod tests {
    use pathlamps_types::DEFAULT_EPSILON;

    use super::*;

    fn lit(t: f64, bright: f64, dark: f64) -> bool {
        is_lit(t, bright, dark, DEFAULT_EPSILON)
    }

    #[test]
    fn non_positive_bright_is_never_lit() {
        for t in [0.0, 0.5, 1.0, 100.0] {
            assert!(!lit(t, 0.0, 1.0));
            assert!(!lit(t, -1.0, 1.0));
        }
    }

    #[test]
    fn non_positive_period_is_never_lit() {
        // bright > 0 but dark drags the period to zero or below.
        for t in [0.0, 0.5, 1.0, 100.0] {
            assert!(!lit(t, 1.0, -1.0));
            assert!(!lit(t, 1.0, -2.0));
        }
    }

    #[test]
    fn lit_during_bright_window() {
        assert!(lit(0.0, 1.0, 1.0));
        assert!(lit(0.5, 1.0, 1.0));
        assert!(lit(0.3, 0.8, 1.2));
    }

    #[test]
    fn unlit_during_dark_window() {
        assert!(!lit(1.0, 1.0, 1.0));
        assert!(!lit(1.5, 1.0, 1.0));
        assert!(!lit(1.55, 0.8, 1.2));
    }

    #[test]
    fn falling_edge_resolves_to_not_lit() {
        // phase == bright exactly: the eps slack pushes it out of the
        // lit window.
        assert!(!lit(0.8, 0.8, 1.2));
        assert!(!lit(2.8, 0.8, 1.2));
    }

    #[test]
    fn predicate_is_periodic() {
        let cases = [(0.3, 0.8, 1.2), (1.1, 1.5, 0.5), (0.0, 1.0, 1.0), (1.9, 0.7, 1.3)];
        for (t, bright, dark) in cases {
            let period = bright + dark;
            assert_eq!(lit(t, bright, dark), lit(t + period, bright, dark));
            assert_eq!(lit(t, bright, dark), lit(t + 3.0 * period, bright, dark));
        }
    }

    #[test]
    fn scenario_single_node_at_time_zero() {
        // Lamp {1, 1}, arrival at t = 0: lit.
        assert!(lit(0.0, 1.0, 1.0));
    }
}
