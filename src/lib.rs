// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod normalization;
mod payload;
mod secondary_validation;
mod submission;

// This is the public API of the girocode library
pub use normalization::{normalize, NormalizationError, NormalizedIban};
pub use payload::{
    encode, Payload, PaymentInstruction, CHARACTER_SET, PAYLOAD_FIELD_COUNT, PAYMENT_TYPE,
    SERVICE_TAG, VERSION,
};
pub use secondary_validation::{
    iban_check_digits, mod97, validate_iban, BicFormat, IbanChecksum, IbanValidationError,
    IdentifierValidator, Validator,
};
pub use submission::{
    config::{ErrorCorrectionLevel, SubmissionConfig},
    error::{Field, SubmissionError},
    renderer::{RenderOptions, Renderer},
    RawSubmission, Submission,
};
