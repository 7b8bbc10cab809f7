//! # Frontlint - front-end helpers for lint tools
//!
//! Two small, independent utilities that a linter's command line and rule
//! engine lean on:
//!
//! - **Option validation**: compare the option names a user passed against the
//!   names a tool accepts, and render a diagnostic per unknown option with a
//!   "did you mean" suggestion when a known option is close enough.
//! - **Unit extraction**: given one fragment of a parsed CSS value, report the
//!   measurement unit it carries (`px`, `%`, `em`, ...), if any.
//!
//! ## Quick Start
//!
//! ```rust
//! use frontlint::{check_invalid_options, AllowedOptions, OptionValidator, OutputMode};
//!
//! let allowed = AllowedOptions::new()
//!     .add("maxWarnings", Some("mw"))
//!     .add("quiet", Some("q"));
//!
//! let report = OptionValidator::new(&allowed)
//!     .with_output(OutputMode::Text)
//!     .render(["max-warning", "quiet"]);
//!
//! assert!(report.contains(r#"Invalid option "--max-warning". Did you mean "--max-warnings"?"#));
//!
//! // One-call form, coloured when stderr supports it
//! let report = check_invalid_options(&allowed, ["quiet", "q"]);
//! assert!(report.is_empty());
//! ```
//!
//! ```rust
//! use frontlint::{parse_value, unit_from_fragment, ValueFragment};
//!
//! assert_eq!(unit_from_fragment(Some(&ValueFragment::word("10px"))).as_deref(), Some("px"));
//! assert_eq!(unit_from_fragment(Some(&ValueFragment::word("#fff"))), None);
//!
//! let fragments = parse_value("1px solid rgba(0, 0, 0, 50%)");
//! assert_eq!(frontlint::units_in_value("1px solid rgba(0, 0, 0, 50%)"), vec!["px", "%"]);
//! assert_eq!(fragments.len(), 5);
//! ```
//!
//! ## Pluggable pieces
//!
//! Every outside capability sits behind a trait so tests can swap in a
//! deterministic fake: [`EditDistance`], [`NameCase`], [`SyntaxCheck`] and
//! [`UnitParser`]. Colors come from a [`ReportTheme`] of `console` styles,
//! gated by an [`OutputMode`].

pub mod options;
mod output;
mod theme;
pub mod value;

pub use options::{
    check_invalid_options, cli_flag, suggest, AllowedOptions, Diagnostic, EditDistance,
    KebabCase, Levenshtein, NameCase, OptionSetError, OptionSpec, OptionValidator,
    ValidationReport, MAX_SUGGESTION_DISTANCE,
};
pub use output::{LineEnding, OutputMode, OutputModeError};
pub use theme::ReportTheme;
pub use value::{
    blur_interpolation, parse_value, unit_from_fragment, units_in_value, CssUnits, Dimension,
    FragmentKind, StandardSyntax, SyntaxCheck, UnitExtractor, UnitParser, ValueFragment,
};
