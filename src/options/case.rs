//! Option name normalization and CLI flag rendering.

use heck::ToKebabCase;

/// Normalizes an option name into the form used for comparison.
pub trait NameCase {
    fn normalize(&self, name: &str) -> String;
}

/// Dash-separated lowercase names: `maxWarnings` and `max_warnings` both
/// become `max-warnings`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KebabCase;

impl NameCase for KebabCase {
    fn normalize(&self, name: &str) -> String {
        name.to_kebab_case()
    }
}

impl<F> NameCase for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, name: &str) -> String {
        self(name)
    }
}

/// Renders an option name the way a user would type it, quoted.
///
/// Single-character names become short flags, everything else a kebab-case
/// long flag.
///
/// # Example
///
/// ```rust
/// use frontlint::cli_flag;
///
/// assert_eq!(cli_flag("q"), r#""-q""#);
/// assert_eq!(cli_flag("maxWarnings"), r#""--max-warnings""#);
/// ```
pub fn cli_flag(name: &str) -> String {
    cli_flag_with(name, &KebabCase)
}

pub(crate) fn cli_flag_with<N: NameCase + ?Sized>(name: &str, case: &N) -> String {
    if name.chars().count() == 1 {
        format!("\"-{}\"", name)
    } else {
        format!("\"--{}\"", case.normalize(name))
    }
}
