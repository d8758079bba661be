use crate::Spectrum;

parameter_set! {
    /// Generic peaked spectrum (Tschager et al. 2003)
    ///
    /// An empirical shape with an optically thick slope `alphathick` below the
    /// peak and an optically thin slope `alphathin` above it:
    ///
    /// `S = nu_p/(1-e^-1) (nu/nu_p)^alphathick (1 - exp(-(nu/nu_p)^(alphathin-alphathick)))`
    ///
    /// `freq_peak` sets both the turnover and the flux scale.
    PeakedCurve {
        freq_peak,
        alphathick,
        alphathin,
    }
}
impl Spectrum for PeakedCurve {
    fn flux(&self, freq: f64) -> f64 {
        let x = freq / self.freq_peak;
        let thin = -(-x.powf(self.alphathin - self.alphathick)).exp_m1();
        self.freq_peak / (1f64 - (-1f64).exp()) * x.powf(self.alphathick) * thin
    }
}
