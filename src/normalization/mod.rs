use std::fmt;
use thiserror::Error;


#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum NormalizationError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// An IBAN with all spaces removed. Every character is an ASCII digit or an
/// uppercase ASCII letter. The only way to get one is through [normalize].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedIban(String);

impl NormalizedIban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first two characters, if present.
    pub fn country_code(&self) -> Option<&str> {
        self.0.get(0..2)
    }

    /// Characters 3 and 4, if present.
    pub fn check_digits(&self) -> Option<&str> {
        self.0.get(2..4)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedIban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Prints the grouped "paper" form, e.g. `AT61 1904 3002 3457 3201`.
impl fmt::Display for NormalizedIban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // all characters are ASCII, so byte chunks are char chunks
        for (i, group) in self.0.as_bytes().chunks(4).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for &b in group {
                write!(f, "{}", b as char)?;
            }
        }
        Ok(())
    }
}

/// Strips spaces from an account identifier. Only ASCII digits, uppercase
/// ASCII letters and spaces are accepted; anything else is rejected.
pub fn normalize(raw: &str) -> Result<NormalizedIban, NormalizationError> {
    let mut normalized = String::with_capacity(raw.len());
    for (position, character) in raw.chars().enumerate() {
        match character {
            '0'..='9' | 'A'..='Z' => normalized.push(character),
            ' ' => {}
            _ => {
                return Err(NormalizationError::InvalidCharacter {
                    character,
                    position,
                })
            }
        }
    }
    Ok(NormalizedIban(normalized))
}

/// Removes spaces without checking the remaining characters.
pub(crate) fn strip_spaces(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ').collect()
}
