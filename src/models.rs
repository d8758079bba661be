//! Spectral models
//!
//! Each model is a set of named parameters implementing [Spectrum](crate::Spectrum).
//! The parameters also have a fixed positional order, the one used by the
//! fitting engines, given by [Parameters::NAMES].

/// Fixed order parameter set of a spectral model
pub trait Parameters: Sized {
    /// Parameter names in positional order
    const NAMES: &'static [&'static str];
    /// Builds the parameter set from positional parameters
    ///
    /// Returns `None` if the number of parameters does not match [Parameters::NAMES]
    fn from_params(params: &[f64]) -> Option<Self>;
    /// Returns the parameters in positional order
    fn to_params(&self) -> Vec<f64>;
    /// Number of parameters
    fn arity() -> usize {
        Self::NAMES.len()
    }
}

macro_rules! parameter_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: f64,
            )+
        }
        impl $crate::models::Parameters for $name {
            const NAMES: &'static [&'static str] = &[$(stringify!($field)),+];
            fn from_params(params: &[f64]) -> Option<Self> {
                let &[$($field),+] = params else {
                    return None;
                };
                Some(Self { $($field),+ })
            }
            fn to_params(&self) -> Vec<f64> {
                vec![$(self.$field),+]
            }
        }
    };
}

pub mod duffy;
pub mod free_free;
pub mod peaked;
pub mod power_law;
pub mod ssa;

/// Spectral curvature factor `exp(q ln(nu)^2)`
pub(crate) fn curvature(freq: f64, q: f64) -> f64 {
    (q * freq.ln().powi(2)).exp()
}

/// Continuous injection spectral index: `alpha` steepened by 1/2 above the break
pub(crate) fn injection_index(freq: f64, alpha: f64, break_freq: f64) -> f64 {
    if freq <= break_freq {
        alpha
    } else {
        alpha + 0.5
    }
}

/// Exponential cut-off factor `exp(-nu/nu_b)`
pub(crate) fn exp_break(freq: f64, break_freq: f64) -> f64 {
    (-freq / break_freq).exp()
}
