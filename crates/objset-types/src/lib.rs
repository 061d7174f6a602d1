//! Foundation types for ObjSet.
//!
//! # Key Types
//!
//! - [`ContentHash`] — 32-byte digest identifying a value by its structural
//!   content
//! - [`TypeError`] — parse failures for the above

pub mod error;
pub mod hash;

pub use error::TypeError;
pub use hash::ContentHash;
