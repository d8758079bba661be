use crate::model::ModelKind;

#[derive(thiserror::Error, Debug)]
pub enum SpectraError {
    #[error("unknown spectral model `{name}`")]
    UnknownModel {
        name: String,
        #[source]
        source: strum::ParseError,
    },
    #[error("model `{model}` takes {expected} parameters, found {found}")]
    Arity {
        model: ModelKind,
        expected: usize,
        found: usize,
    },
}
pub type Result<T> = std::result::Result<T, SpectraError>;
