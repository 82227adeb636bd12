use crate::submission::error::Field;
use metrics::{counter, histogram, Counter, Histogram};

const FIELD: &str = "field";

pub struct Metrics {
    pub accepted: Counter,
    pub render_failures: Counter,
    pub payload_size: Histogram,
    rejected_recipient_name: Counter,
    rejected_iban: Counter,
    rejected_bic: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Metrics {
            accepted: counter!("submission.accepted"),
            render_failures: counter!("submission.render_failed"),
            payload_size: histogram!("payload.size"),
            rejected_recipient_name: rejected(Field::RecipientName),
            rejected_iban: rejected(Field::Iban),
            rejected_bic: rejected(Field::Bic),
        }
    }

    pub fn rejected(&self, field: Field) -> &Counter {
        match field {
            Field::RecipientName => &self.rejected_recipient_name,
            Field::Iban => &self.rejected_iban,
            Field::Bic => &self.rejected_bic,
        }
    }
}

fn rejected(field: Field) -> Counter {
    let field: &'static str = field.into();
    counter!("submission.rejected", FIELD => field)
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new()
    }
}
