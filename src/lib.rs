//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`kombi_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`kombi_core`], so grammars are built the same way
//! with either crate.
//!
//! * Provides functions, in [`parse`], that run a rule over a whole input and
//! that report, as a [`ParseError`], when the rule does not match or when it
//! does not consume all of the input.
//!
//! * Provides, in [`common::inmem`], ready-made conveniences for the common
//! case of matching in-memory `&str`s, either as `char` units or as byte
//! units.
//!
//! [`kombi_core`]: ../kombi_core/index.html


// Re-export everything from the core crate.
#[doc(no_inline)]
pub use kombi_core::*;

mod error;
pub use error::ParseError;

pub mod parse;

/// Conveniences, provided for ready use, that choose the unit types for
/// common applications.
pub mod common {
    pub mod inmem;
}
