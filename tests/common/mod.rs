#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Answers `probe` and prints a 3.x style result for `recognize`, saving the
/// options it was given next to the image.
pub const HELLO_BRIDGE: &str = r#"
case "$1" in
  probe) exit 0 ;;
  recognize)
    printf '%s' "$3" > "$(dirname "$2")/options.json"
    printf '[{"rec_texts": ["Hello", "World"], "rec_scores": [0.99, 0.98]}]'
    ;;
  *) exit 1 ;;
esac
"#;

pub const LEGACY_BRIDGE: &str = r#"
case "$1" in
  probe) exit 0 ;;
  recognize) printf '[[[[[0,0],[1,0],[1,1],[0,1]], ["Foo", 0.9]]]]' ;;
esac
"#;

pub const EMPTY_BRIDGE: &str = r#"
case "$1" in
  probe) exit 0 ;;
  recognize) printf '[]' ;;
esac
"#;

pub const UNAVAILABLE_BRIDGE: &str = r#"
echo "Traceback (most recent call last):" >&2
echo "cannot import paddleocr: No module named 'paddleocr'" >&2
exit 2
"#;

pub const FAILING_BRIDGE: &str = r#"
case "$1" in
  probe) exit 0 ;;
  recognize)
    echo "[2026/10/18 10:00:00] ppocr INFO: loading model" >&2
    echo "RuntimeError: model crashed" >&2
    exit 1
    ;;
esac
"#;

pub const GARBAGE_BRIDGE: &str = r#"
case "$1" in
  probe) exit 0 ;;
  recognize) echo "Downloading model..." ;;
esac
"#;

pub struct Fixture {
    pub dir: TempDir,
    pub script: PathBuf,
    pub image: PathBuf,
}

impl Fixture {
    pub fn new(bridge: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("bridge.sh");
        fs::write(&script, bridge).unwrap();
        let image = dir.path().join("scan.png");
        fs::write(&image, b"\x89PNG\r\n\x1a\n").unwrap();
        Self { dir, script, image }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Stand-in `paddleocr` package for running the real bridge. Like PaddleOCR
/// 2.x it binds a log handler to stdout at import time, and it also writes
/// to fd 1 directly the way native engine code does.
pub const FAKE_PADDLEOCR: &str = r#"
import logging
import os
import sys

logger = logging.getLogger("ppocr")
logger.addHandler(logging.StreamHandler(sys.stdout))
logger.setLevel(logging.DEBUG)
print("paddleocr imported")


class PaddleOCR:
    def __init__(self, **kwargs):
        assert kwargs["use_doc_orientation_classify"] is False
        assert kwargs["use_doc_unwarping"] is False
        assert kwargs["use_textline_orientation"] is False
        self.lang = kwargs["lang"]

    def ocr(self, path):
        logger.debug("dt_boxes num : 1, elapse : 0.01")
        os.write(1, b"native engine noise\n")
        text = "日本語" if self.lang == "japan" else "Foo"
        return [[[[[0, 0], [1, 0], [1, 1], [0, 1]], (text, 0.9)]]]
"#;

impl Fixture {
    /// Directory to put on `PYTHONPATH` so the bridge imports `FAKE_PADDLEOCR`.
    pub fn install_fake_paddleocr(&self) -> PathBuf {
        let site = self.path().join("site");
        fs::create_dir_all(site.join("paddleocr")).unwrap();
        fs::write(site.join("paddleocr").join("__init__.py"), FAKE_PADDLEOCR).unwrap();
        site
    }
}

pub fn python3_available() -> bool {
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}
