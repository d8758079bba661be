//! Special functions and the absorption factors shared by the spectral models

use statrs::function::gamma as sf;

/// Spectral index of the free-free optical depth, `tau ∝ nu^-2.1`
pub const FREE_FREE_INDEX: f64 = 2.1;

/// Gamma function `Γ(x)`
pub fn gamma(x: f64) -> f64 {
    sf::gamma(x)
}

/// Regularized lower incomplete gamma function `P(a, x) = γ(a, x)/Γ(a)`
///
/// `P(a, 0) = 0` and `P(a, ∞) = 1` for `a > 0`.
/// Outside of the domain (`a <= 0`, `x < 0`) the result is `NaN`.
pub fn gammainc(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if a > 0f64 && a.is_finite() {
        if x == 0f64 {
            return 0f64;
        }
        if x == f64::INFINITY {
            return 1f64;
        }
    }
    sf::checked_gamma_lr(a, x).unwrap_or_else(|e| {
        log::debug!("incomplete gamma P({a}, {x}) out of domain: {e}");
        f64::NAN
    })
}

/// Free-free optical depth `(nu/nu_p)^-2.1`
pub fn free_free_depth(freq: f64, freq_peak: f64) -> f64 {
    (freq / freq_peak).powf(-FREE_FREE_INDEX)
}

/// Escape fraction of a uniform slab of optical depth `tau`: `(1-e^-tau)/tau`
///
/// Evaluates to the limit 1 at `tau = 0`.
pub fn slab_escape(tau: f64) -> f64 {
    if tau == 0f64 {
        1f64
    } else {
        -(-tau).exp_m1() / tau
    }
}

/// Inhomogeneous free-free absorption factor `P(p+1, tau) Γ(p+1)`
pub fn inhomogeneous_absorption(p: f64, tau: f64) -> f64 {
    gammainc(p + 1f64, tau) * gamma(p + 1f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gamma_factorials() {
        assert_relative_eq!(gamma(1f64), 1f64, max_relative = 1e-12);
        assert_relative_eq!(gamma(5f64), 24f64, max_relative = 1e-12);
        assert_relative_eq!(gamma(0.5), std::f64::consts::PI.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn gammainc_exponential() {
        for x in [0.01f64, 0.5, 1., 3., 10.] {
            assert_relative_eq!(gammainc(1f64, x), 1f64 - (-x).exp(), max_relative = 1e-10);
        }
    }

    #[test]
    fn gammainc_limits() {
        assert_eq!(gammainc(2.5, 0f64), 0f64);
        assert_eq!(gammainc(2.5, f64::INFINITY), 1f64);
        assert!(gammainc(-1.5, 1f64).is_nan());
        assert!(gammainc(1f64, f64::NAN).is_nan());
    }

    #[test]
    fn slab_escape_limit() {
        assert_eq!(slab_escape(0f64), 1f64);
        assert_relative_eq!(slab_escape(1e-12), 1f64, max_relative = 1e-11);
        assert_relative_eq!(slab_escape(2f64), (1f64 - (-2f64).exp()) / 2f64, max_relative = 1e-14);
        assert_eq!(slab_escape(f64::INFINITY), 0f64);
    }

    #[test]
    fn free_free_depth_at_peak() {
        assert_eq!(free_free_depth(150f64, 150f64), 1f64);
        assert!(free_free_depth(10f64, 100f64) > 1f64);
    }
}
