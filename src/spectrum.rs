use nalgebra::DVector;
use rayon::prelude::*;

/// Flux density spectrum `S(nu)`
///
/// Only [Spectrum::flux] is required, the vectorized evaluators apply it
/// elementwise and return as many fluxes as there are frequencies.
pub trait Spectrum {
    /// Flux density at frequency `freq`
    fn flux(&self, freq: f64) -> f64;
    /// Flux densities at each of the frequencies `freqs`
    fn fluxes(&self, freqs: &[f64]) -> Vec<f64> {
        freqs.iter().map(|&freq| self.flux(freq)).collect()
    }
    /// Same as [Spectrum::fluxes] but spread over the rayon thread pool
    fn par_fluxes(&self, freqs: &[f64]) -> Vec<f64>
    where
        Self: Sync,
    {
        freqs.par_iter().map(|&freq| self.flux(freq)).collect()
    }
    /// Flux densities at each of the frequencies of a [DVector]
    fn flux_vector(&self, freqs: &DVector<f64>) -> DVector<f64> {
        freqs.map(|freq| self.flux(freq))
    }
}

impl<F> Spectrum for F
where
    F: Fn(f64) -> f64,
{
    fn flux(&self, freq: f64) -> f64 {
        self(freq)
    }
}
