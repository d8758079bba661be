//! Radio source flux density spectra
//!
//! Closed-form models of the flux density of a radio source versus frequency,
//! targeted at peaked-spectrum (GPS/CSS) sources: power laws, free-free and
//! synchrotron self-absorption turnovers, spectral curvature and breaks.
//! The models are the objective functions of an external fitting engine, they
//! neither validate their parameters nor trap floating point exceptions.
//!
//! Each model is a parameter set implementing [Spectrum]:
//! ```
//! use radio_spectra::{models::free_free::SingleHomogeneousFreeFree, Spectrum};
//!
//! let source = SingleHomogeneousFreeFree {
//!     s_norm: 10.,
//!     alpha: 0.7,
//!     freq_peak: 0.2,
//! };
//! let fluxes = source.fluxes(&[0.076, 0.15, 1.4]);
//! assert_eq!(fluxes.len(), 3);
//! ```
//! and [Model] gives access to every model by name.

pub mod error;
pub mod model;
pub mod models;
pub mod special;
mod spectrum;

pub use error::SpectraError;
pub use model::{Model, ModelKind};
pub use models::Parameters;
pub use spectrum::Spectrum;
