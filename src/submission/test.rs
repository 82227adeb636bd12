use crate::submission::config::{ErrorCorrectionLevel, SubmissionConfig};
use crate::submission::error::{Field, SubmissionError};
use crate::submission::renderer::{RenderOptions, Renderer};
use crate::submission::{RawSubmission, Submission};
use metrics::{Key, Label};
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use metrics_util::CompositeKey;
use metrics_util::MetricKind;
use std::error::Error;
use std::fmt;

#[derive(Default)]
struct RecordingRenderer {
    rendered: Vec<(String, RenderOptions)>,
}

impl Renderer for RecordingRenderer {
    type Error = fmt::Error;

    fn render(&mut self, payload: &str, options: &RenderOptions) -> Result<(), Self::Error> {
        self.rendered.push((payload.to_string(), *options));
        Ok(())
    }
}

#[derive(Debug)]
struct CanvasLost;

impl fmt::Display for CanvasLost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("canvas lost")
    }
}

impl Error for CanvasLost {}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    type Error = CanvasLost;

    fn render(&mut self, _payload: &str, _options: &RenderOptions) -> Result<(), Self::Error> {
        Err(CanvasLost)
    }
}

fn raw_submission() -> RawSubmission {
    RawSubmission {
        recipient_name: "Max Mustermann".to_string(),
        iban: "AT61 1904 3002 3457 3201".to_string(),
        bic: "GIBAATWWXXX".to_string(),
        amount: "EUR12.34".to_string(),
        reference: String::new(),
        reason: "rent".to_string(),
    }
}

#[test]
fn valid_submission_is_rendered_with_medium_error_correction() {
    let mut renderer = RecordingRenderer::default();
    let payload = Submission::default()
        .submit(&raw_submission(), &mut renderer)
        .unwrap();

    assert_eq!(renderer.rendered.len(), 1);
    let (text, options) = &renderer.rendered[0];
    assert_eq!(text, &payload.to_string());
    assert_eq!(options.error_correction_level, ErrorCorrectionLevel::M);
    assert_eq!(payload.iban(), "AT611904300234573201");
}

#[test]
fn configured_error_correction_level_is_passed_on() {
    let mut renderer = RecordingRenderer::default();
    let submission =
        Submission::new(SubmissionConfig::new().error_correction_level(ErrorCorrectionLevel::Q));
    submission.submit(&raw_submission(), &mut renderer).unwrap();
    assert_eq!(
        renderer.rendered[0].1.error_correction_level,
        ErrorCorrectionLevel::Q
    );
}

#[test]
fn empty_recipient_name_is_rejected() {
    let mut renderer = RecordingRenderer::default();
    let raw = RawSubmission {
        recipient_name: String::new(),
        ..raw_submission()
    };
    let err = Submission::default().submit(&raw, &mut renderer).unwrap_err();
    assert!(matches!(err, SubmissionError::EmptyRequiredField));
    assert_eq!(err.field(), Some(Field::RecipientName));
    assert_eq!(err.to_string(), "invalid recipient name");
    assert!(renderer.rendered.is_empty());
}

#[test]
fn invalid_iban_is_rejected() {
    let inputs = ["AT62 1904 3002 3457 3201", "at61 1904 3002 3457 3201", "AT6", ""];
    for iban in inputs {
        let mut renderer = RecordingRenderer::default();
        let raw = RawSubmission {
            iban: iban.to_string(),
            ..raw_submission()
        };
        let err = Submission::default().submit(&raw, &mut renderer).unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidIban(_)), "{}", iban);
        assert_eq!(err.to_string(), "invalid IBAN");
        assert!(err.source().is_some());
        assert!(renderer.rendered.is_empty());
    }
}

#[test]
fn malformed_bic_is_rejected() {
    let mut renderer = RecordingRenderer::default();
    let raw = RawSubmission {
        bic: "giboatww".to_string(),
        ..raw_submission()
    };
    let err = Submission::default().submit(&raw, &mut renderer).unwrap_err();
    assert!(matches!(err, SubmissionError::MalformedBic));
    assert_eq!(err.to_string(), "invalid BIC");
    assert!(renderer.rendered.is_empty());
}

#[test]
fn empty_bic_is_accepted() {
    let mut renderer = RecordingRenderer::default();
    let raw = RawSubmission {
        bic: String::new(),
        ..raw_submission()
    };
    let payload = Submission::default().submit(&raw, &mut renderer).unwrap();
    assert_eq!(payload.bic(), "");
}

#[test]
fn first_failing_field_wins() {
    let raw = RawSubmission {
        recipient_name: String::new(),
        iban: "nope".to_string(),
        bic: "nope".to_string(),
        ..raw_submission()
    };
    let err = Submission::default().validate(&raw).unwrap_err();
    assert_eq!(err.field(), Some(Field::RecipientName));

    let raw = RawSubmission {
        iban: "nope".to_string(),
        bic: "nope".to_string(),
        ..raw_submission()
    };
    let err = Submission::default().validate(&raw).unwrap_err();
    assert_eq!(err.field(), Some(Field::Iban));
}

#[test]
fn amount_is_not_validated() {
    let raw = RawSubmission {
        amount: "not a number".to_string(),
        ..raw_submission()
    };
    let instruction = Submission::default().validate(&raw).unwrap();
    assert_eq!(instruction.amount, "not a number");
}

#[test]
fn renderer_errors_are_propagated() {
    let err = Submission::default()
        .submit(&raw_submission(), &mut FailingRenderer)
        .unwrap_err();
    assert!(matches!(err, SubmissionError::Render(_)));
    assert_eq!(err.field(), None);
    assert_eq!(err.source().unwrap().to_string(), "canvas lost");
}

#[test]
fn raw_submission_deserializes_from_form_names() {
    let raw: RawSubmission = serde_json::from_str(
        r#"{
            "recipient-name": "Max Mustermann",
            "recipient-iban": "AT61 1904 3002 3457 3201",
            "amount": "EUR12.34",
            "payment-reference": "RF18000000000000000000000"
        }"#,
    )
    .unwrap();
    assert_eq!(raw.recipient_name, "Max Mustermann");
    assert_eq!(raw.bic, "");
    assert_eq!(raw.reason, "");
    assert_eq!(raw.reference, "RF18000000000000000000000");
}

#[test]
fn should_submit_submission_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let submission = Submission::default();
        let mut renderer = RecordingRenderer::default();

        submission.submit(&raw_submission(), &mut renderer).unwrap();
        let bad_iban = RawSubmission {
            iban: "AT62 1904 3002 3457 3201".to_string(),
            ..raw_submission()
        };
        submission.submit(&bad_iban, &mut renderer).unwrap_err();
        submission.submit(&bad_iban, &mut renderer).unwrap_err();
        submission
            .submit(&raw_submission(), &mut FailingRenderer)
            .unwrap_err();
    });

    let snapshot = snapshotter.snapshot().into_hashmap();

    let metric_value = snapshot
        .get(&CompositeKey::new(
            MetricKind::Counter,
            Key::from_name("submission.accepted"),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            MetricKind::Counter,
            Key::from_parts("submission.rejected", vec![Label::new("field", "iban")]),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            MetricKind::Counter,
            Key::from_name("submission.render_failed"),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    match &snapshot
        .get(&CompositeKey::new(
            MetricKind::Histogram,
            Key::from_name("payload.size"),
        ))
        .expect("metric not found")
        .2
    {
        DebugValue::Histogram(values) => assert_eq!(values.len(), 2),
        _ => panic!("payload.size is not a histogram"),
    }
}
