//! Extracting the measurement unit from a value fragment.

use cssparser::{Parser, ParserInput, Token};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::fragment::{FragmentKind, ValueFragment};
use super::syntax::{blur_interpolation, StandardSyntax, SyntaxCheck};

/// A number and the unit text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// The number as written, so `7%` has a value of `7`.
    pub value: f32,
    /// Everything after the number, as written in the source; empty for a
    /// unitless number.
    pub unit: String,
}

/// Splits a payload into its leading number and trailing unit.
pub trait UnitParser {
    /// Returns `None` when the payload does not start with a number.
    fn parse(&self, value: &str) -> Option<Dimension>;
}

/// Number/unit splitting with CSS tokenization rules.
///
/// The first token decides: a number, percentage or dimension yields a
/// [`Dimension`], anything else yields `None`. The unit is the source text
/// after the number, escapes included, so `1\65m` has the unit `\65m`
/// rather than `em`.
///
/// ```rust
/// use frontlint::{CssUnits, UnitParser};
///
/// let d = CssUnits.parse("1.5rem").unwrap();
/// assert_eq!((d.value, d.unit.as_str()), (1.5, "rem"));
/// assert_eq!(CssUnits.parse("50%").unwrap().unit, "%");
/// assert_eq!(CssUnits.parse("auto"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssUnits;

// Same grammar the tokenizer uses for a number: a dot and an exponent are
// only taken when digits follow them.
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d*\.\d+|\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

impl UnitParser for CssUnits {
    fn parse(&self, value: &str) -> Option<Dimension> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);

        let start = parser.position();
        match parser.next_including_whitespace_and_comments().ok()? {
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. } => {}
            _ => return None,
        }
        while parser.next_including_whitespace_and_comments().is_ok() {}

        let source = parser.slice_from(start);
        let number = NUMBER_PREFIX.find(source)?;

        Some(Dimension {
            value: number.as_str().parse().ok()?,
            unit: source[number.end()..].to_string(),
        })
    }
}

impl<F> UnitParser for F
where
    F: Fn(&str) -> Option<Dimension>,
{
    fn parse(&self, value: &str) -> Option<Dimension> {
        self(value)
    }
}

/// Finds the unit carried by a word fragment.
///
/// Hex colors, non-word fragments and values using preprocessor syntax never
/// carry a unit. Interpolation markers and the `\0` / `\9` IE hacks are
/// removed before parsing, and the unit is returned without checking it
/// against a list of known units.
///
/// ```rust
/// use frontlint::{UnitExtractor, ValueFragment};
///
/// let extractor = UnitExtractor::new();
/// assert_eq!(extractor.extract(Some(&ValueFragment::word("10px"))).as_deref(), Some("px"));
/// assert_eq!(extractor.extract(Some(&ValueFragment::word("10px\\9"))).as_deref(), Some("px"));
/// assert_eq!(extractor.extract(Some(&ValueFragment::word("0"))), None);
/// assert_eq!(extractor.extract(None), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitExtractor<S = StandardSyntax, P = CssUnits> {
    syntax: S,
    parser: P,
}

impl UnitExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, P> UnitExtractor<S, P>
where
    S: SyntaxCheck,
    P: UnitParser,
{
    /// Replaces the standard-syntax predicate.
    pub fn with_syntax<T: SyntaxCheck>(self, syntax: T) -> UnitExtractor<T, P> {
        UnitExtractor {
            syntax,
            parser: self.parser,
        }
    }

    /// Replaces the number/unit splitter.
    pub fn with_parser<Q: UnitParser>(self, parser: Q) -> UnitExtractor<S, Q> {
        UnitExtractor {
            syntax: self.syntax,
            parser,
        }
    }

    pub fn extract(&self, fragment: Option<&ValueFragment>) -> Option<String> {
        let fragment = fragment?;
        let value = fragment.value.as_str();

        if value.is_empty() || fragment.kind != FragmentKind::Word {
            return None;
        }

        if !self.syntax.is_standard(value) {
            trace!("skipping non-standard value '{}'", value);
            return None;
        }

        // Hex colors are word-like but never unit-bearing
        if value.starts_with('#') {
            return None;
        }

        let cleaned = blur_interpolation(value, "")
            .replacen("\\0", "", 1)
            .replacen("\\9", "", 1);

        let dimension = self.parser.parse(&cleaned)?;
        if dimension.unit.is_empty() {
            return None;
        }

        trace!("unit '{}' in '{}'", dimension.unit, value);
        Some(dimension.unit)
    }
}

/// Returns the unit carried by `fragment`, using the default syntax check
/// and CSS tokenization.
pub fn unit_from_fragment(fragment: Option<&ValueFragment>) -> Option<String> {
    UnitExtractor::new().extract(fragment)
}
