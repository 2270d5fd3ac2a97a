//! Browser-Side Commands
//!
//! Wrappers around the outside world: the contact relay and the document.

mod contact;
mod document;

// Re-export all public items
pub use contact::*;
pub use document::*;
