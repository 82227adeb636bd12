use crate::normalization::strip_spaces;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service tag that identifies an EPC payment code.
pub const SERVICE_TAG: &str = "BCD";
/// Version 002 makes the BIC optional inside the EEA.
pub const VERSION: &str = "002";
/// `1` is UTF-8.
pub const CHARACTER_SET: &str = "1";
/// SEPA credit transfer.
pub const PAYMENT_TYPE: &str = "SCT";

pub const PAYLOAD_FIELD_COUNT: usize = 12;

/// A credit transfer whose recipient name, IBAN and BIC have already been
/// validated. Empty strings stand for absent optional values.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentInstruction {
    pub recipient_name: String,
    pub iban: String,
    pub bic: String,
    /// Passed through verbatim.
    pub amount: String,
    /// Structured creditor reference.
    pub reference: String,
    /// Unstructured remittance text, dropped when `reference` is set.
    pub reason: String,
}

/// The twelve lines of an EPC payment code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    fields: [String; PAYLOAD_FIELD_COUNT],
}

impl Payload {
    pub fn fields(&self) -> &[String; PAYLOAD_FIELD_COUNT] {
        &self.fields
    }

    /// Returns the field at the 1-based `position` used by the format description.
    pub fn field(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.fields.get(index))
            .map(String::as_str)
    }

    pub fn service_tag(&self) -> &str {
        &self.fields[0]
    }

    pub fn bic(&self) -> &str {
        &self.fields[4]
    }

    pub fn recipient_name(&self) -> &str {
        &self.fields[5]
    }

    pub fn iban(&self) -> &str {
        &self.fields[6]
    }

    pub fn amount(&self) -> &str {
        &self.fields[7]
    }

    pub fn reference(&self) -> &str {
        &self.fields[9]
    }

    pub fn reason(&self) -> &str {
        &self.fields[10]
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join("\n"))
    }
}

impl From<Payload> for String {
    fn from(payload: Payload) -> Self {
        payload.to_string()
    }
}

/// Builds the payload for an already validated instruction. Nothing is
/// checked here.
pub fn encode(instruction: &PaymentInstruction) -> Payload {
    // reference and reason are mutually exclusive, the reference wins
    let reason = if instruction.reference.is_empty() {
        instruction.reason.clone()
    } else {
        String::new()
    };

    Payload {
        fields: [
            SERVICE_TAG.to_string(),
            VERSION.to_string(),
            CHARACTER_SET.to_string(),
            PAYMENT_TYPE.to_string(),
            instruction.bic.clone(),
            instruction.recipient_name.clone(),
            strip_spaces(&instruction.iban),
            instruction.amount.clone(),
            // purpose code, not supported
            String::new(),
            instruction.reference.clone(),
            reason,
            // beneficiary to originator note, left for the client
            String::new(),
        ],
    }
}
