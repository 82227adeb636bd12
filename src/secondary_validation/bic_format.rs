use crate::secondary_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // bank code, country code, location code, optional branch code
    static ref BIC_PATTERN: Regex =
        Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap();
}

/// Shape check for a bank identifier code (ISO 9362). BICs carry no check
/// digits, and an empty value is accepted since the BIC is optional.
pub struct BicFormat;

impl Validator for BicFormat {
    fn is_valid_match(&self, input: &str) -> bool {
        input.is_empty() || BIC_PATTERN.is_match(input)
    }
}
