//! Duffy & Blundell (2012) curved spectrum
use crate::Spectrum;
use std::f64::consts::LN_10;

parameter_set! {
    /// Parabola in log-log space peaking at `freq_peak`
    ///
    /// `S = S_norm exp(-(q/4) ln(nu/nu_p)^2)`
    DuffyCurve {
        /// flux density at the peak
        s_norm,
        /// curvature
        q,
        freq_peak,
    }
}
impl Spectrum for DuffyCurve {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm * (-(self.q / 4f64) * (freq / self.freq_peak).ln().powi(2)).exp()
    }
}

parameter_set! {
    /// [DuffyCurve] fitted in log space
    ///
    /// Takes `log10(nu)` and returns `log10(S)`:
    /// `log10(S) = log10(S_norm) - (q/4) ln(10) (log10(nu) - log10(nu_p))^2`,
    /// such that `10^LogDuffyCurve(log10(nu))` is [DuffyCurve] with the same `q`.
    LogDuffyCurve {
        /// `log10` of the flux density at the peak
        log_s_norm,
        q,
        /// `log10` of the peak frequency
        log_freq_peak,
    }
}
impl Spectrum for LogDuffyCurve {
    fn flux(&self, log_freq: f64) -> f64 {
        self.log_s_norm - (self.q / 4f64) * LN_10 * (log_freq - self.log_freq_peak).powi(2)
    }
}
impl From<DuffyCurve> for LogDuffyCurve {
    fn from(m: DuffyCurve) -> Self {
        Self {
            log_s_norm: m.s_norm.log10(),
            q: m.q,
            log_freq_peak: m.freq_peak.log10(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak() {
        let m = DuffyCurve {
            s_norm: 7.,
            q: 1.3,
            freq_peak: 0.3,
        };
        assert_eq!(m.flux(0.3), 7.);
        assert!(m.flux(0.1) < 7.);
        assert!(m.flux(3.) < 7.);
    }

    #[test]
    fn symmetric_in_log_frequency() {
        let m = DuffyCurve {
            s_norm: 1.,
            q: 0.8,
            freq_peak: 1.,
        };
        assert_relative_eq!(m.flux(0.1), m.flux(10.), max_relative = 1e-14);
    }

    #[test]
    fn log_space_peak() {
        let m = LogDuffyCurve::from(DuffyCurve {
            s_norm: 100.,
            q: 0.5,
            freq_peak: 10.,
        });
        assert_relative_eq!(m.flux(1.), 2., max_relative = 1e-15);
        assert_relative_eq!(m.flux(0.), 2. - 0.125 * LN_10, max_relative = 1e-14);
    }
}
