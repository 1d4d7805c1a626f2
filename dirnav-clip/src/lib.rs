//! # dirnav-clip - Single-Slot Clipboard for the dirnav File Browser
//!
//! Holds at most one pending copy or cut of a regular file and performs the
//! paste into a destination directory.
//!
//! ## Key Features
//! - One slot: staging a new file replaces the previous one
//! - Only regular files are staged, other kinds are ignored
//! - Paste never overwrites an existing destination name
//! - The staged record survives a paste so it can be pasted again elsewhere

pub mod clipboard;
pub mod error;
pub mod item;
pub mod operations;

// Re-export main types for easy use
pub use clipboard::{Clipboard, StageOutcome};
pub use error::{ClipError, ClipResult};
pub use item::{ClipboardItem, ClipboardOperation, FileType};
pub use operations::{PasteOperation, PasteReport};
