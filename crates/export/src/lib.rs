//! Serialization of captured snapshots: CSS rulesets, pretty JSON, and the
//! clipboard boundary.

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod css;
pub mod json;

pub use clipboard::{Clipboard, ClipboardChain, NoClipboard, copy_text};
pub use css::to_css;
pub use json::{export_file_name, from_json, to_json};
