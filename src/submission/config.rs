use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// QR error correction level handed to the renderer.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum ErrorCorrectionLevel {
    /// ~7% of codewords can be restored
    L,
    /// ~15%
    #[default]
    M,
    /// ~25%
    Q,
    /// ~30%
    H,
}

impl ErrorCorrectionLevel {
    pub fn all() -> Vec<ErrorCorrectionLevel> {
        ErrorCorrectionLevel::iter().collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub error_correction_level: ErrorCorrectionLevel,
}

impl SubmissionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_correction_level(&self, error_correction_level: ErrorCorrectionLevel) -> Self {
        self.mutate_clone(|x| x.error_correction_level = error_correction_level)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
