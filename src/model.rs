//! Model registry
//!
//! [ModelKind] names every spectral model and [Model] holds the parameters of
//! any of them. A fitting engine that only deals with a model name and a
//! vector of positional parameters goes through [Model::from_name]:
//! ```
//! use radio_spectra::{Model, Spectrum};
//!
//! let model = Model::from_name("powlaw", &[5., 2.]).unwrap();
//! assert_eq!(model.flux(1.), 5.);
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    error::{Result, SpectraError},
    models::{
        duffy::*, free_free::*, peaked::*, power_law::*, ssa::*, Parameters,
    },
    Spectrum,
};

macro_rules! registry {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => $name:tt $(| $alias:tt)*
        ),+ $(,)?
    ) => {
        /// Spectral model names
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
        pub enum ModelKind {
            $(
                $(#[$doc])*
                #[strum(to_string = $name $(, serialize = $alias)*)]
                $variant,
            )+
        }
        impl ModelKind {
            /// Parameter names in positional order
            pub fn param_names(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => $variant::NAMES,)+
                }
            }
        }

        /// Spectral model parameters
        ///
        /// Serialized as a map of the named parameters tagged with the model name:
        /// `{"model": "powlaw", "a": 5.0, "alpha": 2.0}`
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "model")]
        pub enum Model {
            $(
                $(#[$doc])*
                #[serde(rename = $name $(, alias = $alias)*)]
                $variant($variant),
            )+
        }
        impl Model {
            /// Returns the model name
            pub fn kind(&self) -> ModelKind {
                match self {
                    $(Self::$variant(_) => ModelKind::$variant,)+
                }
            }
            /// Returns the parameters in positional order
            pub fn to_params(&self) -> Vec<f64> {
                match self {
                    $(Self::$variant(m) => m.to_params(),)+
                }
            }
            fn try_from_params(kind: ModelKind, params: &[f64]) -> Option<Self> {
                match kind {
                    $(ModelKind::$variant => $variant::from_params(params).map(Self::$variant),)+
                }
            }
        }
        impl Spectrum for Model {
            fn flux(&self, freq: f64) -> f64 {
                match self {
                    $(Self::$variant(m) => m.flux(freq),)+
                }
            }
        }
        $(
            impl From<$variant> for Model {
                fn from(m: $variant) -> Self {
                    Self::$variant(m)
                }
            }
        )+
    };
}

registry! {
    /// Generic peaked spectrum
    PeakedCurve => "curve",
    /// Power law
    PowerLaw => "powlaw",
    /// Homogeneous free-free absorption
    SingleHomogeneousFreeFree => "singhomobremss",
    /// Double homogeneous free-free absorption
    DoubleHomogeneousFreeFree => "doubhomobremss",
    /// Double homogeneous free-free absorption with curvatures `gamma1`, `gamma2`
    DoubleHomogeneousFreeFreeCurveGamma => "doubhomobremsscurve_gamma",
    /// Double homogeneous free-free absorption with curvatures `q1`, `q2`
    DoubleHomogeneousFreeFreeCurve => "doubhomobremsscurve" | "doubhomobremsscurve_q",
    /// Inhomogeneous free-free absorption
    SingleInhomogeneousFreeFree => "singinhomobremss",
    /// Double inhomogeneous free-free absorption
    DoubleInhomogeneousFreeFree => "doubinhomobremss",
    /// Internal free-free absorption
    InternalFreeFree => "internalbremss",
    /// Synchrotron self-absorption
    SingleSsa => "singSSA",
    /// Double synchrotron self-absorption
    DoubleSsa => "doubSSA",
    /// Curved homogeneous free-free absorption
    SingleHomogeneousFreeFreeCurve => "singhomobremsscurve",
    /// Curved power law
    CurvedPowerLaw => "curvepowlaw",
    /// Curved inhomogeneous free-free absorption
    SingleInhomogeneousFreeFreeCurve => "singinhomobremsscurve",
    /// Duffy & Blundell curved spectrum
    DuffyCurve => "duffcurve",
    /// Duffy & Blundell curved spectrum in log space
    LogDuffyCurve => "logduffcurve",
    /// Continuous injection power law
    PowerLawBreak => "powlawbreak",
    /// Homogeneous free-free absorption with continuous injection break
    SingleHomogeneousFreeFreeBreak => "singhomobremssbreak",
    /// Inhomogeneous free-free absorption with continuous injection break
    SingleInhomogeneousFreeFreeBreak => "singinhomobremssbreak",
    /// Power law with exponential break
    PowerLawExpBreak => "powlawexp",
    /// Inhomogeneous free-free absorption with exponential break
    SingleInhomogeneousFreeFreeExpBreak => "singinhomobremssbreakexp",
    /// Homogeneous free-free absorption with exponential break
    SingleHomogeneousFreeFreeExpBreak => "singhomobremssbreakexp",
    /// Double homogeneous free-free absorption with exponential break
    DoubleHomogeneousFreeFreeExpBreak => "doubhomobremssbreakexp",
    /// Synchrotron self-absorption with exponential break
    SingleSsaExpBreak => "singSSAbreakexp",
    /// Double synchrotron self-absorption with exponential break
    DoubleSsaExpBreak => "doubSSAbreakexp",
}

impl ModelKind {
    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.param_names().len()
    }
}

impl Model {
    /// Builds a model from its positional parameters
    pub fn from_params(kind: ModelKind, params: &[f64]) -> Result<Self> {
        log::debug!("{kind} {:?}", params);
        Self::try_from_params(kind, params).ok_or(SpectraError::Arity {
            model: kind,
            expected: kind.arity(),
            found: params.len(),
        })
    }
    /// Builds a model from its name and positional parameters
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self> {
        let kind: ModelKind = name.parse().map_err(|source| SpectraError::UnknownModel {
            name: name.to_owned(),
            source,
        })?;
        Self::from_params(kind, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names() {
        assert_eq!(ModelKind::SingleSsa.to_string(), "singSSA");
        assert_eq!(
            "doubhomobremsscurve_q".parse::<ModelKind>().unwrap(),
            ModelKind::DoubleHomogeneousFreeFreeCurve
        );
        assert_eq!(
            ModelKind::DoubleHomogeneousFreeFreeCurve.to_string(),
            "doubhomobremsscurve"
        );
        for kind in ModelKind::iter() {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
        }
        assert_eq!(ModelKind::iter().count(), 25);
    }

    #[test]
    fn arities() {
        assert_eq!(ModelKind::PowerLaw.arity(), 2);
        assert_eq!(ModelKind::PeakedCurve.arity(), 3);
        assert_eq!(ModelKind::SingleInhomogeneousFreeFree.arity(), 4);
        assert_eq!(ModelKind::DoubleInhomogeneousFreeFree.arity(), 8);
        assert_eq!(ModelKind::DoubleHomogeneousFreeFreeCurveGamma.arity(), 8);
        assert_eq!(ModelKind::DoubleSsaExpBreak.arity(), 7);
        assert_eq!(
            ModelKind::SingleInhomogeneousFreeFree.param_names(),
            &["s_norm", "alpha", "p", "freq_peak"]
        );
    }

    #[test]
    fn positional_round_trip() {
        for kind in ModelKind::iter() {
            let params: Vec<f64> = (1..=kind.arity()).map(|i| i as f64 * 0.25).collect();
            let model = Model::from_params(kind, &params).unwrap();
            assert_eq!(model.kind(), kind);
            assert_eq!(model.to_params(), params);
        }
    }

    #[test]
    fn arity_error() {
        let err = Model::from_name("singhomobremss", &[1., 0.7]).unwrap_err();
        match err {
            SpectraError::Arity {
                model,
                expected,
                found,
            } => {
                assert_eq!(model, ModelKind::SingleHomogeneousFreeFree);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("expected an arity error"),
        }
    }

    #[test]
    fn unknown_model() {
        let err = Model::from_name("triplehomobremss", &[]).unwrap_err();
        assert!(matches!(err, SpectraError::UnknownModel { .. }));
        assert_eq!(err.to_string(), "unknown spectral model `triplehomobremss`");
    }

    #[test]
    fn dispatch() {
        let model = Model::from_name("powlaw", &[1., 1.]).unwrap();
        assert_eq!(model.flux(2.), 0.5);
        let model: Model = DuffyCurve {
            s_norm: 2.,
            q: 1.,
            freq_peak: 1.,
        }
        .into();
        assert_eq!(model.kind(), ModelKind::DuffyCurve);
        assert_eq!(model.fluxes(&[1., 1.]), vec![2., 2.]);
    }
}
