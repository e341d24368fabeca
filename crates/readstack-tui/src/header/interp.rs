//! Range-to-range linear mapping
//!
//! The header derivation is built entirely out of these mappings: each style
//! property declares an input band of scroll offsets and an output range, and
//! is re-evaluated on every offset sample.

/// Behavior outside the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Pin the output to the range bounds
    Clamp,
    /// Continue the line past the bounds
    Extend,
}

/// Map `x` from `[input.0, input.1]` to `[output.0, output.1]` linearly.
///
/// A zero-width input range would divide by zero; it resolves to the start of
/// the output range instead (with `Clamp`, inputs past the degenerate point
/// still pin to the end of the range). The output range may run in either
/// direction.
#[inline]
pub fn interpolate(x: f64, input: (f64, f64), output: (f64, f64), mode: Extrapolate) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;

    let width = in_hi - in_lo;
    if width == 0.0 {
        return match mode {
            Extrapolate::Clamp if x >= in_hi => out_hi,
            _ => out_lo,
        };
    }

    let t = (x - in_lo) / width;
    let t = match mode {
        Extrapolate::Clamp => t.clamp(0.0, 1.0),
        Extrapolate::Extend => t,
    };

    out_lo + (out_hi - out_lo) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_linear_inside_range() {
        let v = interpolate(5.0, (0.0, 10.0), (0.0, 100.0), Extrapolate::Clamp);
        assert!((v - 50.0).abs() < EPS);
    }

    #[test]
    fn test_clamp_both_ends() {
        assert!(
            (interpolate(-5.0, (0.0, 10.0), (0.0, 100.0), Extrapolate::Clamp) - 0.0).abs() < EPS
        );
        assert!(
            (interpolate(15.0, (0.0, 10.0), (0.0, 100.0), Extrapolate::Clamp) - 100.0).abs() < EPS
        );
    }

    #[test]
    fn test_extend_overshoots() {
        let below = interpolate(-5.0, (0.0, 10.0), (1.0, 0.0), Extrapolate::Extend);
        let above = interpolate(15.0, (0.0, 10.0), (1.0, 0.0), Extrapolate::Extend);
        assert!(below > 1.0);
        assert!(above < 0.0);
    }

    #[test]
    fn test_descending_output() {
        let v = interpolate(2.5, (0.0, 10.0), (100.0, 0.0), Extrapolate::Clamp);
        assert!((v - 75.0).abs() < EPS);
    }

    #[test]
    fn test_negative_input_range() {
        // Overscroll band: [-300, 0] -> [600, 300]
        let v = interpolate(-150.0, (-300.0, 0.0), (600.0, 300.0), Extrapolate::Clamp);
        assert!((v - 450.0).abs() < EPS);
    }

    #[test]
    fn test_zero_width_range() {
        // Degenerate band resolves without dividing by zero
        let at = interpolate(5.0, (5.0, 5.0), (50.0, 38.0), Extrapolate::Clamp);
        assert!((at - 38.0).abs() < EPS);
        let below = interpolate(4.0, (5.0, 5.0), (50.0, 38.0), Extrapolate::Clamp);
        assert!((below - 50.0).abs() < EPS);
        let extend = interpolate(9.0, (5.0, 5.0), (50.0, 38.0), Extrapolate::Extend);
        assert!((extend - 50.0).abs() < EPS);
    }

    #[test]
    fn test_continuous_at_band_edges() {
        // Clamped value at the band edge equals the limit approached from outside
        let band = (10.0, 40.0);
        let out = (1.0, 0.0);
        let inside = interpolate(10.0 + 1e-9, band, out, Extrapolate::Clamp);
        let edge = interpolate(10.0, band, out, Extrapolate::Clamp);
        assert!((inside - edge).abs() < 1e-6);
    }
}
