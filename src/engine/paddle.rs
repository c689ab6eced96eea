//! PaddleOCR reached through a Python bridge process.
//!
//! The bridge script (`bridge/paddle_ocr_bridge.py`, embedded at build time)
//! is run as `<python> -c <script> <mode> ...`. A script file on disk can be
//! used instead via [`PaddleBridge::with_script`], in which case it runs as
//! `<python> <file> <mode> ...`.
//!
//! Modes:
//! - `probe`: exits 0 if `paddleocr` imports, 2 otherwise.
//! - `recognize <image> <options-json>`: prints the result as JSON.
//!
//! Exit status 2 always means the engine is not installed; anything else
//! non-zero is a recognition failure.
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use super::{OcrCapability, Recognizer};
use crate::error::{Error, Result};
use crate::types::RecognizerOptions;

const ENGINE: &str = "PaddleOCR";
const EMBEDDED_BRIDGE: &str = include_str!("../../bridge/paddle_ocr_bridge.py");
const UNAVAILABLE_STATUS: i32 = 2;

pub const DEFAULT_PYTHON: &str = "python3";

#[derive(Debug, Clone)]
pub struct PaddleBridge {
    python: PathBuf,
    script: Option<PathBuf>,
}

impl Default for PaddleBridge {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl PaddleBridge {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            script: None,
        }
    }

    pub fn with_script(mut self, script: PathBuf) -> Self {
        self.script = Some(script);
        self
    }

    /// Check that the interpreter starts and `paddleocr` imports.
    pub fn probe(&self) -> Result<()> {
        debug!("Probing {} via {}", ENGINE, self.python.display());
        self.execute(self.command("probe"))?;
        Ok(())
    }

    fn command(&self, mode: &str) -> Command {
        let mut cmd = Command::new(&self.python);
        match &self.script {
            Some(script) => cmd.arg(script),
            None => cmd.arg("-c").arg(EMBEDDED_BRIDGE),
        };
        cmd.arg(mode).stdin(Stdio::null());
        cmd
    }

    fn execute(&self, mut cmd: Command) -> Result<Vec<u8>> {
        let output = cmd.output().map_err(|e| Error::CapabilityUnavailable {
            engine: ENGINE,
            message: format!("cannot start {}: {e}", self.python.display()),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("bridge stderr:\n{}", stderr.trim_end());
        }

        if output.status.success() {
            return Ok(output.stdout);
        }

        // The bridge reports its failure last; earlier lines are engine logs.
        let message = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("bridge exited with {}", output.status));

        match output.status.code() {
            Some(UNAVAILABLE_STATUS) => Err(Error::CapabilityUnavailable {
                engine: ENGINE,
                message,
            }),
            _ => Err(Error::Recognition(message)),
        }
    }
}

impl OcrCapability for PaddleBridge {
    fn name(&self) -> &'static str {
        ENGINE
    }

    fn load(&self) -> Result<Box<dyn Recognizer>> {
        self.probe()?;
        Ok(Box::new(self.clone()))
    }
}

impl Recognizer for PaddleBridge {
    fn recognize(&self, image: &Path, options: &RecognizerOptions) -> Result<Value> {
        if !image.is_file() {
            return Err(Error::Recognition(format!(
                "input image not found: {}",
                image.display()
            )));
        }

        let mut cmd = self.command("recognize");
        cmd.arg(image).arg(serde_json::to_string(options)?);

        info!("Recognizing {:?} (lang={})", image, options.lang);
        let started = Instant::now();
        let stdout = self.execute(cmd)?;
        debug!(
            "{} finished in {:.2?}, {} bytes of output",
            ENGINE,
            started.elapsed(),
            stdout.len()
        );

        Ok(serde_json::from_slice(&stdout)?)
    }
}
