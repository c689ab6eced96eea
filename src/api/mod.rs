//! High-level library API: load an engine, recognize one image, and flatten
//! the result. `run` is the whole command-line behavior against arbitrary
//! writers, returning the process exit status.
use std::io::Write;

use tracing::{debug, warn};

use crate::core::flatten_text;
use crate::engine::OcrCapability;
use crate::error::Result;
use crate::types::Invocation;

/// Load `capability`, recognize `invocation.input_path` and return the
/// flattened text (possibly empty).
pub fn extract_text<C: OcrCapability + ?Sized>(
    capability: &C,
    invocation: &Invocation,
) -> Result<String> {
    let recognizer = capability.load()?;
    debug!("{} loaded", capability.name());

    let raw = recognizer.recognize(&invocation.input_path, &invocation.recognizer_options())?;
    Ok(flatten_text(&raw))
}

/// Exit status: 0 on success, 1 on recognition failure, 2 when the engine is
/// unavailable. Text goes to `out` only when non-empty; failures go to `err`.
pub fn run<C, O, E>(capability: &C, invocation: &Invocation, out: &mut O, err: &mut E) -> u8
where
    C: OcrCapability + ?Sized,
    O: Write,
    E: Write,
{
    match extract_text(capability, invocation) {
        Ok(text) => {
            if text.is_empty() {
                debug!("No text found in {:?}", invocation.input_path);
                return 0;
            }
            match writeln!(out, "{text}").and_then(|_| out.flush()) {
                Ok(()) => 0,
                Err(e) => {
                    let _ = writeln!(err, "error: cannot write output: {e}");
                    1
                }
            }
        }
        Err(e) => {
            warn!("{:?}", e);
            let _ = writeln!(err, "error: {e}");
            e.exit_code()
        }
    }
}
