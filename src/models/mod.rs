//! Data models for the parliamentary roster.
//!
//! The field keys and serialized shape match the original member data shape
//! of the entry form.

mod member;

pub use member::*;
