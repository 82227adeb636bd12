use crate::submission::config::ErrorCorrectionLevel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub error_correction_level: ErrorCorrectionLevel,
}

/// Draws an encoded payload as a scannable code, e.g. onto a canvas or into
/// an image buffer. Failures are passed back to the caller untouched.
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn render(&mut self, payload: &str, options: &RenderOptions) -> Result<(), Self::Error>;
}
