use super::{curvature, exp_break, injection_index};
use crate::Spectrum;

parameter_set! {
    /// Power law `S = a nu^-alpha`
    PowerLaw {
        /// flux density at unit frequency
        a,
        /// spectral index
        alpha,
    }
}
impl Spectrum for PowerLaw {
    fn flux(&self, freq: f64) -> f64 {
        self.a * freq.powf(-self.alpha)
    }
}

parameter_set! {
    /// Curved power law `S = S_norm nu^-alpha exp(q ln(nu)^2)`
    CurvedPowerLaw {
        s_norm,
        alpha,
        /// spectral curvature
        q,
    }
}
impl Spectrum for CurvedPowerLaw {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm * freq.powf(-self.alpha) * curvature(freq, self.q)
    }
}

parameter_set! {
    /// Continuous injection power law
    ///
    /// The spectral index steepens from `alpha` to `alpha+0.5` above the break
    /// frequency and the spectrum is normalized at the break frequency:
    /// `S = S_norm (nu/nu_b)^-alpha'`
    PowerLawBreak {
        s_norm,
        alpha,
        break_freq,
    }
}
impl Spectrum for PowerLawBreak {
    fn flux(&self, freq: f64) -> f64 {
        let alpha = injection_index(freq, self.alpha, self.break_freq);
        self.s_norm * (freq / self.break_freq).powf(-alpha)
    }
}

parameter_set! {
    /// Power law with an exponential cut-off `S = S_norm nu^-alpha exp(-nu/nu_b)`
    PowerLawExpBreak {
        s_norm,
        alpha,
        break_freq,
    }
}
impl Spectrum for PowerLawExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm * freq.powf(-self.alpha) * exp_break(freq, self.break_freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn power_law_values() {
        let p = PowerLaw { a: 5.0, alpha: 2.0 };
        assert_eq!(p.flux(1.0), 5.0);
        let p = PowerLaw { a: 1.0, alpha: 1.0 };
        assert_eq!(p.flux(2.0), 0.5);
    }

    #[test]
    fn power_law_scale_invariance() {
        let p = PowerLaw { a: 3.2, alpha: 0.8 };
        let freqs = [76f64, 150., 843., 1400., 20e3];
        for k in [0.5f64, 2., 10.] {
            for &freq in &freqs {
                assert_relative_eq!(
                    p.flux(k * freq),
                    p.flux(freq) * k.powf(-p.alpha),
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn curved_power_law_without_curvature() {
        let curved = CurvedPowerLaw {
            s_norm: 10.,
            alpha: 0.7,
            q: 0.,
        };
        let plain = PowerLaw { a: 10., alpha: 0.7 };
        let freqs = [0.07, 0.15, 1.4, 5., 20.];
        assert_eq!(curved.fluxes(&freqs), plain.fluxes(&freqs));
    }

    #[test]
    fn curved_power_law_is_concave_for_negative_q() {
        let curved = CurvedPowerLaw {
            s_norm: 1.,
            alpha: 0.,
            q: -0.2,
        };
        assert_eq!(curved.flux(1.), 1.);
        assert!(curved.flux(0.1) < 1.);
        assert!(curved.flux(10.) < 1.);
    }

    #[test]
    fn curved_power_law_reference_value() {
        let curved = CurvedPowerLaw {
            s_norm: 1.,
            alpha: 0.7,
            q: 0.1,
        };
        let ln10 = std::f64::consts::LN_10;
        assert_relative_eq!(
            curved.flux(10.),
            10f64.powf(-0.7) * (0.1 * ln10 * ln10).exp(),
            max_relative = 1e-13
        );
        let curved = CurvedPowerLaw { q: -0.25, ..curved };
        let ln = 0.2f64.ln();
        assert_relative_eq!(
            curved.flux(0.2),
            0.2f64.powf(-0.7) * (-0.25 * ln * ln).exp(),
            max_relative = 1e-13
        );
    }

    #[test]
    fn break_normalization() {
        let p = PowerLawBreak {
            s_norm: 2.5,
            alpha: 0.6,
            break_freq: 1400.,
        };
        assert_eq!(p.flux(1400.), 2.5);
        assert_relative_eq!(p.flux(700.), 2.5 * 0.5f64.powf(-0.6), max_relative = 1e-12);
        assert_relative_eq!(p.flux(2800.), 2.5 * 2f64.powf(-1.1), max_relative = 1e-12);
    }

    #[test]
    fn exponential_break() {
        let p = PowerLawExpBreak {
            s_norm: 1.,
            alpha: 1.,
            break_freq: 2.,
        };
        assert_relative_eq!(p.flux(2.), 0.5 * (-1f64).exp(), max_relative = 1e-14);
        assert!(p.flux(100.) < PowerLaw { a: 1., alpha: 1. }.flux(100.) * 1e-20);
    }
}
