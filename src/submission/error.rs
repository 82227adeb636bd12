use crate::secondary_validation::IbanValidationError;
use thiserror::Error;

/// The input field a submission was rejected for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    RecipientName,
    Iban,
    Bic,
}

/// Messages are deliberately generic, one per field, so they can be shown to
/// the user as they are.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid recipient name")]
    EmptyRequiredField,

    #[error("invalid IBAN")]
    InvalidIban(#[source] IbanValidationError),

    #[error("invalid BIC")]
    MalformedBic,

    #[error("rendering the payment code failed")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SubmissionError {
    /// The rejected field, or `None` when validation passed and rendering failed.
    pub fn field(&self) -> Option<Field> {
        match self {
            SubmissionError::EmptyRequiredField => Some(Field::RecipientName),
            SubmissionError::InvalidIban(_) => Some(Field::Iban),
            SubmissionError::MalformedBic => Some(Field::Bic),
            SubmissionError::Render(_) => None,
        }
    }
}
