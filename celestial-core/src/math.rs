use crate::constants::TWOPI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Normalizes an angle in radians to `[0, 2π)`.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Lagrange basis polynomial `L_i(x)` over the nodes `xs`.
///
/// Nodes must be distinct.
pub fn lagrange_basis(xs: &[f64], i: usize, x: f64) -> f64 {
    let xi = xs[i];
    xs.iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(1.0, |acc, (_, &xj)| acc * (x - xj) / (xi - xj))
}

/// Evaluates the Lagrange polynomial through `(xs[k], ys[k])` at `x`.
pub fn lagrange_interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    ys.iter()
        .enumerate()
        .map(|(i, &yi)| yi * lagrange_basis(xs, i, x))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lagrange_reproduces_cubic() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let f = |x: f64| 2.0 * x * x * x - x + 4.0;
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        for x in [0.5, 1.25, 2.9, -0.5] {
            assert!((lagrange_interpolate(&xs, &ys, x) - f(x)).abs() < 1e-12);
        }
        assert_eq!(lagrange_interpolate(&xs, &ys, 2.0), f(2.0));
    }

    #[test]
    fn test_lagrange_basis_sums_to_one() {
        let xs = [10.0, 11.0, 12.5];
        let total: f64 = (0..xs.len()).map(|i| lagrange_basis(&xs, i, 11.7)).sum();
        assert!((total - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(0.0), 0.0);
        assert!((wrap_0_2pi(-0.5) - (TWOPI - 0.5)).abs() < 1e-15);
        assert!((wrap_0_2pi(TWOPI + 0.25) - 0.25).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI) < 1e-15);
    }
}
