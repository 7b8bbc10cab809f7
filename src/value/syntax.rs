//! Detection and blurring of preprocessor syntax in values.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Decides whether a value is plain CSS that can be analyzed.
pub trait SyntaxCheck {
    fn is_standard(&self, value: &str) -> bool;
}

/// Rejects SCSS and Less variables and any `#{}`, `@{}`, `{}` or `$()`
/// interpolation.
///
/// ```rust
/// use frontlint::{StandardSyntax, SyntaxCheck};
///
/// assert!(StandardSyntax.is_standard("10px"));
/// assert!(!StandardSyntax.is_standard("$gutter"));
/// assert!(!StandardSyntax.is_standard("-@offset"));
/// assert!(!StandardSyntax.is_standard("#{$size}px"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSyntax;

// `ns.$var`
static SCSS_NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+\.\$").expect("valid namespace regex"));

static INTERPOLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{.+?\}|\$\(.+?\)").expect("valid interpolation regex"));

static INTERPOLATION_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#@{}]+").expect("valid marker regex"));

impl SyntaxCheck for StandardSyntax {
    fn is_standard(&self, value: &str) -> bool {
        // An operator may precede a variable: -$gutter
        let operand = value
            .strip_prefix(['-', '+', '*', '/'])
            .unwrap_or(value);

        if operand.starts_with('$') || operand.starts_with('@') {
            return false;
        }

        if SCSS_NAMESPACE.is_match(value) {
            return false;
        }

        !INTERPOLATION.is_match(operand)
    }
}

impl<F> SyntaxCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_standard(&self, value: &str) -> bool {
        self(value)
    }
}

/// Replaces every run of interpolation marker characters (`#`, `@`, `{`,
/// `}`) with `blur`.
///
/// ```rust
/// use frontlint::blur_interpolation;
///
/// assert_eq!(blur_interpolation("#{$a}px", ""), "$apx");
/// assert_eq!(blur_interpolation("@{b}", "`"), "`b`");
/// ```
pub fn blur_interpolation(value: &str, blur: &str) -> String {
    INTERPOLATION_MARKERS
        .replace_all(value, NoExpand(blur))
        .into_owned()
}
