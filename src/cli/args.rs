use clap::Parser;
use std::path::PathBuf;

use ocrtext::Invocation;
use ocrtext::engine::paddle::DEFAULT_PYTHON;
use ocrtext::types::DEFAULT_LANG;

#[derive(Parser, Debug)]
#[command(name = "ocrtext", version, about = "Print the text recognized in an image")]
pub struct CliArgs {
    /// Image file to recognize
    pub input: PathBuf,

    /// Language code passed to the OCR engine
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Python interpreter with paddleocr installed
    #[arg(long, env = "OCRTEXT_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: PathBuf,

    /// Bridge script to run instead of the built-in one
    #[arg(long)]
    pub bridge: Option<PathBuf>,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.input.clone(), self.lang.clone())
    }
}
