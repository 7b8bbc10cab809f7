//! Unit extraction from parsed CSS values.
//!
//! - [`ValueFragment`] / [`FragmentKind`]: typed pieces of a value
//! - [`parse_value`]: raw value string to fragments
//! - [`UnitExtractor`]: the unit carried by one word fragment
//! - [`SyntaxCheck`] / [`UnitParser`]: the pluggable predicate and tokenizer

mod fragment;
mod parse;
mod syntax;
mod unit;

pub use fragment::{FragmentKind, ValueFragment};
pub use parse::{parse_value, units_in_value};
pub use syntax::{blur_interpolation, StandardSyntax, SyntaxCheck};
pub use unit::{unit_from_fragment, CssUnits, Dimension, UnitExtractor, UnitParser};
