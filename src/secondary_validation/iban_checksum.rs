use crate::normalization::{normalize, NormalizationError, NormalizedIban};
use crate::secondary_validation::Validator;
use thiserror::Error;

/// Shortest normalized IBAN that still has a country code and check digits.
const MIN_IBAN_LENGTH: usize = 4;

/// A remainder below 97 plus the appended digits must stay within 9 decimal
/// digits, so every intermediate value fits in a `u32`.
const MOD97_BUFFER_DIGITS: usize = 9;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum IbanValidationError {
    #[error("IBAN contains a disallowed character")]
    Malformed(#[from] NormalizationError),

    #[error("IBAN is too short ({length} characters)")]
    TooShort { length: usize },

    #[error("IBAN check digits are {found}, expected {expected}")]
    ChecksumMismatch { expected: String, found: String },
}

/// ISO 13616 IBAN check using ISO 7064 mod-97-10.
pub struct IbanChecksum;

impl Validator for IbanChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        validate_iban(input).is_ok()
    }
}

/// Same check as [IbanChecksum], but reports why an IBAN was rejected.
pub fn validate_iban(raw: &str) -> Result<NormalizedIban, IbanValidationError> {
    let iban = normalize(raw)?;
    if iban.len() < MIN_IBAN_LENGTH {
        return Err(IbanValidationError::TooShort { length: iban.len() });
    }

    let expected = iban_check_digits(&iban);
    let found = &iban.as_str()[2..4];
    if found != expected {
        return Err(IbanValidationError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        });
    }
    Ok(iban)
}

/// Computes the two check digits an IBAN should carry, ignoring the ones it has.
///
/// The country code is moved behind the BBAN with `00` as placeholder, letters
/// are expanded to `10..=35`, and the check value is `98 - (number mod 97)`.
/// Callers should check the length first: for IBANs shorter than four
/// characters the result is meaningless.
pub fn iban_check_digits(iban: &NormalizedIban) -> String {
    let iban = iban.as_str();
    let bban = iban.get(MIN_IBAN_LENGTH..).unwrap_or("");
    let country_code = iban.get(0..2).unwrap_or(iban);

    let mut expanded = String::with_capacity(2 * iban.len() + 2);
    for c in bban.chars().chain(country_code.chars()).chain("00".chars()) {
        expand_char(c, &mut expanded);
    }

    format!("{:02}", 98 - mod97(&expanded))
}

fn expand_char(c: char, out: &mut String) {
    match c {
        '0'..='9' => out.push(c),
        // A = 10, B = 11, ..., Z = 35
        'A'..='Z' => {
            let code = c as u32 - 'A' as u32 + 10;
            out.push_str(&code.to_string());
        }
        _ => {}
    }
}

/// Reduces an arbitrarily long decimal digit string modulo 97.
///
/// The digits are folded left to right: the running remainder (as text) is
/// topped up to nine digits from the input, parsed, reduced, and written back.
/// Non-digit characters are skipped.
pub fn mod97(digits: &str) -> u32 {
    let digits: Vec<char> = digits.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut position = 0;
    let mut remainder = String::new();
    while position < digits.len() {
        let take = (digits.len() - position).min(MOD97_BUFFER_DIGITS - remainder.len());
        remainder.extend(&digits[position..position + take]);
        position += take;

        let value = remainder
            .chars()
            .fold(0u32, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0));
        remainder = (value % 97).to_string();
    }

    remainder
        .chars()
        .fold(0u32, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0))
}
