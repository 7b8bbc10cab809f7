//! Option-name validation with "did you mean" suggestions.
//!
//! - [`AllowedOptions`]: the names (and aliases) a tool accepts
//! - [`OptionValidator`]: compares supplied names against the allow-list
//! - [`ValidationReport`] / [`Diagnostic`]: what was wrong, ready to render
//! - [`EditDistance`] / [`NameCase`]: the pluggable metric and normalizer
//!
//! Supplied names are normalized to kebab-case before comparison, so
//! `maxWarnings`, `max_warnings` and `max-warnings` are the same option.

mod allowed;
mod case;
#[cfg(feature = "clap")]
mod clap_support;
mod error;
mod report;
mod suggest;
mod validator;

pub use allowed::{AllowedOptions, OptionSpec};
pub use case::{cli_flag, KebabCase, NameCase};
pub use error::OptionSetError;
pub use report::{Diagnostic, ValidationReport};
pub use suggest::{suggest, EditDistance, Levenshtein, MAX_SUGGESTION_DISTANCE};
pub use validator::{check_invalid_options, OptionValidator};
