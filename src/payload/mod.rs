mod encoder;

pub use encoder::{
    encode, Payload, PaymentInstruction, CHARACTER_SET, PAYLOAD_FIELD_COUNT, PAYMENT_TYPE,
    SERVICE_TAG, VERSION,
};
