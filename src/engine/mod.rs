//! Engine layer: the seam between the CLI and whatever performs OCR.
//!
//! An `OcrCapability` is something that may or may not be installed; loading
//! it yields a `Recognizer` that turns an image path into a raw, loosely
//! shaped JSON result. `paddle` provides the PaddleOCR bridge.
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::types::RecognizerOptions;

pub mod paddle;
pub use paddle::PaddleBridge;

pub trait OcrCapability {
    /// Human-readable engine name used in messages.
    fn name(&self) -> &'static str;

    /// Obtain a usable recognizer, or `Error::CapabilityUnavailable`.
    fn load(&self) -> Result<Box<dyn Recognizer>>;
}

pub trait Recognizer {
    fn recognize(&self, image: &Path, options: &RecognizerOptions) -> Result<Value>;
}
