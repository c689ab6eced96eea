//! Shared types: the parsed `Invocation` and the `RecognizerOptions` handed
//! to the OCR engine when it is constructed.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANG: &str = "en";

/// One run of the tool: which image to read and in which language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input_path: PathBuf,
    pub lang: String,
}

impl Invocation {
    pub fn new(input_path: impl Into<PathBuf>, lang: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            lang: lang.into(),
        }
    }

    pub fn recognizer_options(&self) -> RecognizerOptions {
        RecognizerOptions {
            lang: self.lang.clone(),
            ..RecognizerOptions::default()
        }
    }
}

/// Engine construction options. Field names match the PaddleOCR keyword
/// arguments they are forwarded to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerOptions {
    pub lang: String,
    pub use_doc_orientation_classify: bool,
    pub use_doc_unwarping: bool,
    pub use_textline_orientation: bool,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            use_doc_orientation_classify: false,
            use_doc_unwarping: false,
            use_textline_orientation: false,
        }
    }
}
