//! Splitting a raw value into fragments.
//!
//! Tokenization is delegated to `cssparser`; this module only groups tokens
//! into the coarse fragments lint rules look at. Adjacent tokens with no
//! separator between them form a single word, so `$gutter`, `#{$a}px` and
//! `10px` each come out as one word fragment.

use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};

use super::fragment::{FragmentKind, ValueFragment};
use super::unit::UnitExtractor;

/// Parses `value` into top-level fragments; function arguments are nested.
///
/// ```rust
/// use frontlint::{parse_value, FragmentKind, ValueFragment};
///
/// let fragments = parse_value("10px calc(1em + 2px)");
/// assert_eq!(fragments[0], ValueFragment::word("10px"));
/// assert_eq!(fragments[1].kind, FragmentKind::Space);
/// assert_eq!(fragments[2].kind, FragmentKind::Function);
/// assert_eq!(fragments[2].value, "calc");
/// ```
pub fn parse_value(value: &str) -> Vec<ValueFragment> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    collect(&mut parser)
}

fn collect(parser: &mut Parser<'_, '_>) -> Vec<ValueFragment> {
    let mut fragments = Vec::new();
    let mut word: Option<SourcePosition> = None;

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        let fragment = match token {
            Token::WhiteSpace(ws) => ValueFragment::new(FragmentKind::Space, ws),
            Token::Comma => ValueFragment::new(FragmentKind::Div, ","),
            Token::Colon => ValueFragment::new(FragmentKind::Div, ":"),
            Token::Delim('/') => ValueFragment::new(FragmentKind::Div, "/"),
            Token::QuotedString(text) => ValueFragment::new(FragmentKind::String, &*text),
            Token::Comment(text) => ValueFragment::new(FragmentKind::Comment, text),
            Token::UnquotedUrl(url) => {
                ValueFragment::function("url", vec![ValueFragment::word(&*url)])
            }
            Token::Function(name) => {
                ValueFragment::function(&*name, collect_nested(parser))
            }
            Token::ParenthesisBlock => ValueFragment::function("", collect_nested(parser)),
            _ => {
                // Part of a word; block contents are skipped by the next read.
                word.get_or_insert(start);
                continue;
            }
        };

        flush_word(parser, &mut word, start, &mut fragments);
        fragments.push(fragment);
    }

    let end = parser.position();
    flush_word(parser, &mut word, end, &mut fragments);
    fragments
}

fn collect_nested(parser: &mut Parser<'_, '_>) -> Vec<ValueFragment> {
    let nested: Result<_, ParseError<'_, ()>> = parser.parse_nested_block(|inner| Ok(collect(inner)));
    nested.unwrap_or_default()
}

fn flush_word(
    parser: &Parser<'_, '_>,
    word: &mut Option<SourcePosition>,
    end: SourcePosition,
    fragments: &mut Vec<ValueFragment>,
) {
    if let Some(start) = word.take() {
        fragments.push(ValueFragment::word(parser.slice(start..end)));
    }
}

/// Collects the unit of every unit-bearing word in `value`.
///
/// Function arguments are searched too, except inside `url()`.
pub fn units_in_value(value: &str) -> Vec<String> {
    let extractor = UnitExtractor::new();
    let mut units = Vec::new();
    walk_units(&parse_value(value), &extractor, &mut units);
    units
}

fn walk_units(fragments: &[ValueFragment], extractor: &UnitExtractor, units: &mut Vec<String>) {
    for fragment in fragments {
        if let Some(unit) = extractor.extract(Some(fragment)) {
            units.push(unit);
        }
        if fragment.kind == FragmentKind::Function && !fragment.value.eq_ignore_ascii_case("url") {
            walk_units(&fragment.nodes, extractor, units);
        }
    }
}
