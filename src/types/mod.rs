//! Core types for codesmith.

pub mod options;
pub mod record;

pub use options::*;
pub use record::*;
