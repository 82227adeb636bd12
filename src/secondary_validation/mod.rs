mod bic_format;
mod iban_checksum;

pub use crate::secondary_validation::bic_format::BicFormat;
pub use crate::secondary_validation::iban_checksum::{
    iban_check_digits, mod97, validate_iban, IbanChecksum, IbanValidationError,
};

use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

/// Selects one of the identifier validators, e.g. from a configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum IdentifierValidator {
    IbanChecksum,
    BicFormat,
}

impl Validator for IdentifierValidator {
    fn is_valid_match(&self, input: &str) -> bool {
        match self {
            IdentifierValidator::IbanChecksum => IbanChecksum.is_valid_match(input),
            IdentifierValidator::BicFormat => BicFormat.is_valid_match(input),
        }
    }
}
