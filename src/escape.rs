//! Escape-time evaluation of the Mandelbrot recurrence `z ← z² + c`.

use crate::complex::Complex;

/// `|z|²` above which an orbit is known to diverge (escape radius 2).
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/**
Number of iterations of `z ← z² + c`, starting at `z = 0`, before `|z|² > 4`.

The escape test runs on the value of `z` *before* each update, so iteration
`n` tests `z_n`. The first test always sees `z_0 = 0` and cannot trigger;
a point whose first iterate `z_1 = c` is already outside the radius-2 circle
returns `1`, not `0`.

Returns `max_iterations` when the orbit stays bounded for the whole budget.
The result is always in `0..=max_iterations`.
*/
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        let r2 = z.real * z.real;
        let i2 = z.imaginary * z.imaginary;

        if r2 + i2 > ESCAPE_RADIUS_SQR {
            return iteration;
        }

        z = Complex::new(r2 - i2 + c.real, 2.0 * z.real * z.imaginary + c.imaginary);
    }

    max_iterations
}

#[cfg(test)]
mod test {
    use super::escape_count;
    use crate::complex::Complex;

    #[test]
    fn origin_never_escapes() {
        for max_iterations in [1, 2, 50, 400] {
            assert_eq!(escape_count(Complex::ZERO, max_iterations), max_iterations);
        }
    }

    #[test]
    fn far_point_escapes_after_first_update() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 400), 1);
        assert_eq!(escape_count(Complex::new(-2.0, 1.0), 400), 1);
    }

    #[test]
    fn budget_of_one_only_checks_origin() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 1), 1);
    }

    #[test]
    fn threshold_is_strict() {
        // The orbit of -2 is 0, -2, 2, 2, ... which sits exactly on |z|² = 4.
        assert_eq!(escape_count(Complex::new(-2.0, 0.0), 400), 400);
    }

    #[test]
    fn slow_escape() {
        // z_1 = 1, z_2 = 2, z_3 = 5.
        assert_eq!(escape_count(Complex::new(1.0, 0.0), 400), 3);
    }

    #[test]
    fn main_cardioid_is_bounded() {
        assert_eq!(escape_count(Complex::new(-0.5, 0.0), 400), 400);
        assert_eq!(escape_count(Complex::new(0.0, 0.5), 400), 400);
    }

    #[test]
    fn zero_budget() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 0), 0);
    }
}
