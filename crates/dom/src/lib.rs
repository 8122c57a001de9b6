//! Host-page document model.
//!
//! The inspector core never talks to a live browser DOM directly; hosts adapt
//! their page into this arena-backed model at the collaborator boundary. Each
//! element carries its already-resolved computed declarations and the layout
//! rect captured at interaction time, which is all the extraction and
//! measurement engines need.

#![forbid(unsafe_code)]

pub mod document;

pub use document::{Document, DomNode, NodeKind};
pub use indextree::NodeId;

/// Namespace prefix for every node the inspector injects into the host page.
/// Used both for collision avoidance and for the hit-test self-filter.
pub const INSPECTOR_ID_PREFIX: &str = "pixelscope-";
