//! The core of a parser-combinator library whose grammars are composed at
//! compile time.  There are a small number of grammar primitives, which are
//! combined with the `>>` operator to build larger grammars, and every grammar
//! produces a strongly-typed result whose type mirrors the shape of the
//! grammar.
//!
//! Every grammar element is a [`Matchable`]: given a [`Cursor`], which is a
//! position and an end bound over borrowed input, it either consumes a prefix
//! of the input and produces its [`Attr`](Matchable::Attr) result, or it fails
//! and leaves the cursor exactly where it was.  Failing to match is a normal
//! outcome, represented by `None`, and is never an error.
//!
//! The base cases are the literals, [`Lit`], [`Char`], and [`Byte`], which
//! each match a single fixed unit.  A [`Seq`] matches a fixed-arity list of
//! rules in order, all or nothing, and its result is the flat tuple of the
//! results of its rules.  Composing with `>>` builds `Seq`s, and it flattens:
//! however a composition is grouped, e.g. `(a >> b) >> c` or `a >> (b >> c)`,
//! the resulting `Seq` has the same flat element list and the same flat result
//! type, here `(A, B, C)`.  All of that type assembly happens at compile time;
//! composing does no work at match time.
//!
//! Rules can carry a semantic [`Action`], which matching never runs and which
//! is provided for layers built on top of this one.
//!
//! The input may be a slice of any type of unit, e.g. `char`, `u8`, or tokens
//! of your own type.  Matching compares single units, so it is not aware of
//! Unicode beyond what the unit type itself represents.
//!
//! This core crate is `no_std` and does not use heap allocation.

#![no_std]

pub mod error;
pub use error::Error;

pub mod cursor;
pub use cursor::{Cursor, Rollback};

pub mod rule;
pub use rule::Matchable;
pub use rule::premade::{Lit, lit, Char, Byte};

pub mod action;
pub use action::{Action, SemanticAction};

pub mod seq;
pub use seq::{Seq, RuleList};

pub mod tuple;

pub mod compose;
pub use compose::{Composable, compose};
