//! Synchrotron self-absorption
//!
//! A homogeneous synchrotron source with electron energy index `beta`:
//! `S = S_norm (nu/nu_p)^-(beta-1)/2 (1-e^-tau)/tau` with `tau = (nu/nu_p)^-(beta+4)/2`

use super::exp_break;
use crate::{special::slab_escape, Spectrum};

parameter_set! {
    /// Single synchrotron self-absorbed component
    SingleSsa {
        s_norm,
        /// power law index of the electron energy distribution
        beta,
        freq_peak,
    }
}
impl Spectrum for SingleSsa {
    fn flux(&self, freq: f64) -> f64 {
        let x = freq / self.freq_peak;
        let tau = x.powf(-(self.beta + 4f64) / 2f64);
        self.s_norm * x.powf(-(self.beta - 1f64) / 2f64) * slab_escape(tau)
    }
}

parameter_set! {
    /// Two synchrotron self-absorbed components
    DoubleSsa {
        s_norm1,
        s_norm2,
        beta1,
        beta2,
        freq_peak1,
        freq_peak2,
    }
}
impl DoubleSsa {
    /// Returns both components
    pub fn components(&self) -> (SingleSsa, SingleSsa) {
        (
            SingleSsa {
                s_norm: self.s_norm1,
                beta: self.beta1,
                freq_peak: self.freq_peak1,
            },
            SingleSsa {
                s_norm: self.s_norm2,
                beta: self.beta2,
                freq_peak: self.freq_peak2,
            },
        )
    }
}
impl Spectrum for DoubleSsa {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}

parameter_set! {
    /// Synchrotron self-absorbed component with an exponential cut-off
    SingleSsaExpBreak {
        s_norm,
        beta,
        freq_peak,
        break_freq,
    }
}
impl Spectrum for SingleSsaExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        let ssa = SingleSsa {
            s_norm: self.s_norm,
            beta: self.beta,
            freq_peak: self.freq_peak,
        };
        ssa.flux(freq) * exp_break(freq, self.break_freq)
    }
}

parameter_set! {
    /// Two synchrotron self-absorbed components, the exponential cut-off
    /// applies to the second (high frequency) one only
    DoubleSsaExpBreak {
        s_norm1,
        s_norm2,
        beta1,
        beta2,
        freq_peak1,
        freq_peak2,
        break_freq,
    }
}
impl DoubleSsaExpBreak {
    /// Returns both components
    pub fn components(&self) -> (SingleSsa, SingleSsaExpBreak) {
        (
            SingleSsa {
                s_norm: self.s_norm1,
                beta: self.beta1,
                freq_peak: self.freq_peak1,
            },
            SingleSsaExpBreak {
                s_norm: self.s_norm2,
                beta: self.beta2,
                freq_peak: self.freq_peak2,
                break_freq: self.break_freq,
            },
        )
    }
}
impl Spectrum for DoubleSsaExpBreak {
    fn flux(&self, freq: f64) -> f64 {
        let (first, second) = self.components();
        first.flux(freq) + second.flux(freq)
    }
}
