//! Core building blocks that do not touch the engine: turning whatever the
//! recognizer returned into plain text.
pub mod flatten;

pub use flatten::flatten_text;
