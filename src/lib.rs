#![doc = r#"
ocrtext: print the text PaddleOCR finds in an image.

The crate is a thin layer over an external OCR engine. It loads the engine,
runs it on one image, and flattens whatever shape of result the installed
engine version produced into plain newline-separated text.

Quickstart
----------
```rust,no_run
use ocrtext::{Invocation, PaddleBridge};

fn main() -> ocrtext::Result<()> {
    let engine = PaddleBridge::new("python3");
    let text = ocrtext::extract_text(&engine, &Invocation::new("receipt.png", "en"))?;
    println!("{text}");
    Ok(())
}
```

Flattening a result you already have:

```rust
use serde_json::json;

let raw = json!([{ "rec_texts": ["Hello", "World"] }]);
assert_eq!(ocrtext::flatten_text(&raw), "Hello\nWorld");
```

Errors
------
`Error::CapabilityUnavailable` means the engine is not installed (the CLI
exits with 2); every other variant is a failed recognition (exit 1).

Useful modules
--------------
- [`api`] — `extract_text` and the full command-line `run`.
- [`engine`] — the `OcrCapability`/`Recognizer` traits and the PaddleOCR bridge.
- [`core`] — result flattening.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod types;

pub use api::{extract_text, run};
pub use core::flatten_text;
pub use engine::{OcrCapability, PaddleBridge, Recognizer};
pub use error::{Error, Result};
pub use types::{Invocation, RecognizerOptions};
