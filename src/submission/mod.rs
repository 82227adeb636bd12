pub mod config;
pub mod error;
mod metrics;
pub mod renderer;

#[cfg(test)]
mod test;

use crate::payload::{encode, Payload, PaymentInstruction};
use crate::secondary_validation::{validate_iban, BicFormat, Validator};
use crate::submission::config::SubmissionConfig;
use crate::submission::error::SubmissionError;
use crate::submission::metrics::Metrics;
use crate::submission::renderer::{RenderOptions, Renderer};
use serde::{Deserialize, Serialize};

/// The six values of the payment form, exactly as typed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSubmission {
    #[serde(rename = "recipient-name")]
    pub recipient_name: String,
    #[serde(rename = "recipient-iban")]
    pub iban: String,
    #[serde(rename = "recipient-bic")]
    pub bic: String,
    pub amount: String,
    #[serde(rename = "payment-reference")]
    pub reference: String,
    #[serde(rename = "payment-reason")]
    pub reason: String,
}

/// Validates form input and hands the encoded payload to a renderer.
///
/// Fields are checked in form order (recipient name, IBAN, BIC) and the first
/// failure ends the submission: nothing is encoded and the renderer is not
/// called.
pub struct Submission {
    config: SubmissionConfig,
    metrics: Metrics,
}

impl Submission {
    pub fn new(config: SubmissionConfig) -> Self {
        Self {
            config,
            metrics: Metrics::new(),
        }
    }

    pub fn config(&self) -> &SubmissionConfig {
        &self.config
    }

    /// Checks the raw input and turns it into an instruction ready for encoding.
    pub fn validate(&self, raw: &RawSubmission) -> Result<PaymentInstruction, SubmissionError> {
        let result = validate_fields(raw);
        if let Err(err) = &result {
            if let Some(field) = err.field() {
                self.metrics.rejected(field).increment(1);
            }
        }
        result
    }

    /// Validates, encodes and renders one submission. Returns the payload
    /// that was rendered.
    pub fn submit<R: Renderer>(
        &self,
        raw: &RawSubmission,
        renderer: &mut R,
    ) -> Result<Payload, SubmissionError> {
        let instruction = self.validate(raw)?;
        let payload = encode(&instruction);
        let text = payload.to_string();
        self.metrics.payload_size.record(text.len() as f64);

        let options = RenderOptions {
            error_correction_level: self.config.error_correction_level,
        };
        renderer.render(&text, &options).map_err(|err| {
            self.metrics.render_failures.increment(1);
            SubmissionError::Render(Box::new(err))
        })?;

        self.metrics.accepted.increment(1);
        Ok(payload)
    }
}

impl Default for Submission {
    fn default() -> Self {
        Submission::new(SubmissionConfig::default())
    }
}

fn validate_fields(raw: &RawSubmission) -> Result<PaymentInstruction, SubmissionError> {
    if raw.recipient_name.is_empty() {
        return Err(SubmissionError::EmptyRequiredField);
    }
    validate_iban(&raw.iban).map_err(SubmissionError::InvalidIban)?;
    if !BicFormat.is_valid_match(&raw.bic) {
        return Err(SubmissionError::MalformedBic);
    }

    Ok(PaymentInstruction {
        recipient_name: raw.recipient_name.clone(),
        iban: raw.iban.clone(),
        bic: raw.bic.clone(),
        amount: raw.amount.clone(),
        reference: raw.reference.clone(),
        reason: raw.reason.clone(),
    })
}
