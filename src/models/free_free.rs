//! Free-free absorbed power laws (Tingay & de Kool 2003)
//!
//! A nonthermal power law `S_norm nu^-alpha` seen through ionized gas with
//! optical depth `tau = (nu/nu_p)^-2.1`:
//!  - homogeneous screen: `exp(-tau)`
//!  - inhomogeneous screen, with a power law distribution of optical depths of index `p`:
//!    `(p+1) (nu/nu_p)^2.1(p+1) P(p+1, tau) Γ(p+1)`
//!  - internal absorption, emitter and absorber mixed: `(1-e^-tau)/tau`
//!
//! The double component models are the sum of two independent single components.

use super::{curvature, exp_break, injection_index};
use crate::{
    special::{free_free_depth, inhomogeneous_absorption, slab_escape, FREE_FREE_INDEX},
    Spectrum,
};

parameter_set! {
    /// Power law absorbed by a homogeneous free-free screen
    SingleHomogeneousFreeFree {
        s_norm,
        alpha,
        freq_peak,
    }
}
impl Spectrum for SingleHomogeneousFreeFree {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm * freq.powf(-self.alpha) * (-free_free_depth(freq, self.freq_peak)).exp()
    }
}

parameter_set! {
    /// Two power laws, each absorbed by its own homogeneous free-free screen
    DoubleHomogeneousFreeFree {
        s_norm1,
        s_norm2,
        alpha1,
        alpha2,
        freq_peak1,
        freq_peak2,
    }
}
impl DoubleHomogeneousFreeFree {
    /// Returns both components
    pub fn components(&self) -> (SingleHomogeneousFreeFree, SingleHomogeneousFreeFree) {
        (
            SingleHomogeneousFreeFree {
                s_norm: self.s_norm1,
                alpha: self.alpha1,
                freq_peak: self.freq_peak1,
            },
            SingleHomogeneousFreeFree {
                s_norm: self.s_norm2,
                alpha: self.alpha2,
                freq_peak: self.freq_peak2,
            },
        )
    }
}
impl Spectrum for DoubleHomogeneousFreeFree {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}

parameter_set! {
    /// Homogeneous free-free absorbed power law with curvature `exp(q ln(nu)^2)`
    SingleHomogeneousFreeFreeCurve {
        s_norm,
        alpha,
        freq_peak,
        q,
    }
}
impl Spectrum for SingleHomogeneousFreeFreeCurve {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm
            * freq.powf(-self.alpha)
            * curvature(freq, self.q)
            * (-free_free_depth(freq, self.freq_peak)).exp()
    }
}

parameter_set! {
    /// Two curved homogeneous free-free components, curvatures `q1` and `q2`
    DoubleHomogeneousFreeFreeCurve {
        s_norm1,
        s_norm2,
        alpha1,
        alpha2,
        freq_peak1,
        freq_peak2,
        q1,
        q2,
    }
}
impl DoubleHomogeneousFreeFreeCurve {
    /// Returns both components
    pub fn components(
        &self,
    ) -> (
        SingleHomogeneousFreeFreeCurve,
        SingleHomogeneousFreeFreeCurve,
    ) {
        (
            SingleHomogeneousFreeFreeCurve {
                s_norm: self.s_norm1,
                alpha: self.alpha1,
                freq_peak: self.freq_peak1,
                q: self.q1,
            },
            SingleHomogeneousFreeFreeCurve {
                s_norm: self.s_norm2,
                alpha: self.alpha2,
                freq_peak: self.freq_peak2,
                q: self.q2,
            },
        )
    }
}
impl Spectrum for DoubleHomogeneousFreeFreeCurve {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}

parameter_set! {
    /// Two curved homogeneous free-free components, curvatures `gamma1` and `gamma2`
    ///
    /// Same spectrum as [DoubleHomogeneousFreeFreeCurve] with `gamma_i = q_i`.
    DoubleHomogeneousFreeFreeCurveGamma {
        s_norm1,
        s_norm2,
        alpha1,
        alpha2,
        freq_peak1,
        freq_peak2,
        gamma1,
        gamma2,
    }
}
impl From<DoubleHomogeneousFreeFreeCurveGamma> for DoubleHomogeneousFreeFreeCurve {
    fn from(m: DoubleHomogeneousFreeFreeCurveGamma) -> Self {
        Self {
            s_norm1: m.s_norm1,
            s_norm2: m.s_norm2,
            alpha1: m.alpha1,
            alpha2: m.alpha2,
            freq_peak1: m.freq_peak1,
            freq_peak2: m.freq_peak2,
            q1: m.gamma1,
            q2: m.gamma2,
        }
    }
}
impl Spectrum for DoubleHomogeneousFreeFreeCurveGamma {
    fn flux(&self, freq: f64) -> f64 {
        DoubleHomogeneousFreeFreeCurve::from(*self).flux(freq)
    }
}

parameter_set! {
    /// Homogeneous free-free absorbed power law with a continuous injection break
    ///
    /// The power law is normalized at `break_freq` and steepens by 1/2 above it.
    SingleHomogeneousFreeFreeBreak {
        s_norm,
        alpha,
        freq_peak,
        break_freq,
    }
}
impl Spectrum for SingleHomogeneousFreeFreeBreak {
    fn flux(&self, freq: f64) -> f64 {
        let alpha = injection_index(freq, self.alpha, self.break_freq);
        self.s_norm
            * (freq / self.break_freq).powf(-alpha)
            * (-free_free_depth(freq, self.freq_peak)).exp()
    }
}

parameter_set! {
    /// Homogeneous free-free absorbed power law with an exponential cut-off
    SingleHomogeneousFreeFreeExpBreak {
        s_norm,
        alpha,
        freq_peak,
        break_freq,
    }
}
impl Spectrum for SingleHomogeneousFreeFreeExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm
            * freq.powf(-self.alpha)
            * exp_break(freq, self.break_freq)
            * (-free_free_depth(freq, self.freq_peak)).exp()
    }
}

parameter_set! {
    /// Two homogeneous free-free components, the exponential cut-off applies
    /// to the second one only
    DoubleHomogeneousFreeFreeExpBreak {
        s_norm1,
        s_norm2,
        alpha1,
        alpha2,
        freq_peak1,
        freq_peak2,
        break_freq,
    }
}
impl DoubleHomogeneousFreeFreeExpBreak {
    /// Returns both components
    pub fn components(
        &self,
    ) -> (
        SingleHomogeneousFreeFree,
        SingleHomogeneousFreeFreeExpBreak,
    ) {
        (
            SingleHomogeneousFreeFree {
                s_norm: self.s_norm1,
                alpha: self.alpha1,
                freq_peak: self.freq_peak1,
            },
            SingleHomogeneousFreeFreeExpBreak {
                s_norm: self.s_norm2,
                alpha: self.alpha2,
                freq_peak: self.freq_peak2,
                break_freq: self.break_freq,
            },
        )
    }
}
impl Spectrum for DoubleHomogeneousFreeFreeExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}

/// `(p+1) (nu/nu_p)^2.1(p+1)`, the inhomogeneous screen emission scaling
fn inhomogeneous_scaling(freq: f64, p: f64, freq_peak: f64) -> f64 {
    (p + 1f64) * (freq / freq_peak).powf(FREE_FREE_INDEX * (p + 1f64))
}

parameter_set! {
    /// Power law absorbed by an inhomogeneous free-free screen
    ///
    /// `S = S_norm (p+1) (nu/nu_p)^(2.1(p+1)-alpha) P(p+1, tau) Γ(p+1)`
    ///
    /// `p > -1` is required by the gamma functions, `NaN` is returned otherwise.
    SingleInhomogeneousFreeFree {
        s_norm,
        alpha,
        /// index of the optical depth distribution
        p,
        freq_peak,
    }
}
impl Spectrum for SingleInhomogeneousFreeFree {
    fn flux(&self, freq: f64) -> f64 {
        let x = freq / self.freq_peak;
        let tau = free_free_depth(freq, self.freq_peak);
        self.s_norm
            * (self.p + 1f64)
            * x.powf(FREE_FREE_INDEX * (self.p + 1f64) - self.alpha)
            * inhomogeneous_absorption(self.p, tau)
    }
}

parameter_set! {
    /// Two power laws, each absorbed by its own inhomogeneous free-free screen
    DoubleInhomogeneousFreeFree {
        s_norm1,
        s_norm2,
        alpha1,
        alpha2,
        p1,
        p2,
        freq_peak1,
        freq_peak2,
    }
}
impl DoubleInhomogeneousFreeFree {
    /// Returns both components
    pub fn components(&self) -> (SingleInhomogeneousFreeFree, SingleInhomogeneousFreeFree) {
        (
            SingleInhomogeneousFreeFree {
                s_norm: self.s_norm1,
                alpha: self.alpha1,
                p: self.p1,
                freq_peak: self.freq_peak1,
            },
            SingleInhomogeneousFreeFree {
                s_norm: self.s_norm2,
                alpha: self.alpha2,
                p: self.p2,
                freq_peak: self.freq_peak2,
            },
        )
    }
}
impl Spectrum for DoubleInhomogeneousFreeFree {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}

parameter_set! {
    /// Inhomogeneous free-free absorbed power law with curvature `exp(q ln(nu)^2)`
    ///
    /// The power law is normalized at unit frequency: `nu^-alpha nu_p^alpha`.
    SingleInhomogeneousFreeFreeCurve {
        s_norm,
        alpha,
        p,
        freq_peak,
        q,
    }
}
impl Spectrum for SingleInhomogeneousFreeFreeCurve {
    fn flux(&self, freq: f64) -> f64 {
        let tau = free_free_depth(freq, self.freq_peak);
        self.s_norm
            * inhomogeneous_scaling(freq, self.p, self.freq_peak)
            * freq.powf(-self.alpha)
            * self.freq_peak.powf(self.alpha)
            * curvature(freq, self.q)
            * inhomogeneous_absorption(self.p, tau)
    }
}

parameter_set! {
    /// Inhomogeneous free-free absorbed power law with a continuous injection break
    ///
    /// The steepened index applies to `(nu/nu_b)`, the peak frequency keeps
    /// the unbroken index: `(nu/nu_b)^-alpha' nu_p^alpha`.
    SingleInhomogeneousFreeFreeBreak {
        s_norm,
        alpha,
        p,
        freq_peak,
        break_freq,
    }
}
impl Spectrum for SingleInhomogeneousFreeFreeBreak {
    fn flux(&self, freq: f64) -> f64 {
        let alpha = injection_index(freq, self.alpha, self.break_freq);
        let tau = free_free_depth(freq, self.freq_peak);
        self.s_norm
            * inhomogeneous_scaling(freq, self.p, self.freq_peak)
            * (freq / self.break_freq).powf(-alpha)
            * self.freq_peak.powf(self.alpha)
            * inhomogeneous_absorption(self.p, tau)
    }
}

parameter_set! {
    /// Inhomogeneous free-free absorbed power law with an exponential cut-off
    SingleInhomogeneousFreeFreeExpBreak {
        s_norm,
        alpha,
        p,
        freq_peak,
        break_freq,
    }
}
impl Spectrum for SingleInhomogeneousFreeFreeExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        let tau = free_free_depth(freq, self.freq_peak);
        self.s_norm
            * inhomogeneous_scaling(freq, self.p, self.freq_peak)
            * freq.powf(-self.alpha)
            * self.freq_peak.powf(self.alpha)
            * exp_break(freq, self.break_freq)
            * inhomogeneous_absorption(self.p, tau)
    }
}

parameter_set! {
    /// Power law with internal free-free absorption
    ///
    /// `S = S_norm nu^-alpha (1-e^-tau)/tau`
    InternalFreeFree {
        s_norm,
        alpha,
        freq_peak,
    }
}
impl Spectrum for InternalFreeFree {
    fn flux(&self, freq: f64) -> f64 {
        self.s_norm * freq.powf(-self.alpha) * slab_escape(free_free_depth(freq, self.freq_peak))
    }
}
