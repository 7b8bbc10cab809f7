//! Styles used when rendering option diagnostics.

use console::Style;

/// The pair of styles applied to option names in a validation report.
///
/// Only the quoted option names are styled; the surrounding sentence is
/// always plain text.
///
/// # Example
///
/// ```rust
/// use frontlint::ReportTheme;
/// use console::Style;
///
/// let theme = ReportTheme::new()
///     .invalid(Style::new().red().bold())
///     .suggestion(Style::new().green());
/// ```
#[derive(Debug, Clone)]
pub struct ReportTheme {
    invalid: Style,
    suggestion: Style,
}

impl ReportTheme {
    /// Creates the default red/cyan theme.
    pub fn new() -> Self {
        Self {
            invalid: Style::new().red(),
            suggestion: Style::new().cyan(),
        }
    }

    /// Creates a theme that never adds escapes, whatever the output mode.
    pub fn plain() -> Self {
        Self {
            invalid: Style::new(),
            suggestion: Style::new(),
        }
    }

    /// Replaces the style for the unrecognized option.
    pub fn invalid(mut self, style: Style) -> Self {
        self.invalid = style;
        self
    }

    /// Replaces the style for the suggested option.
    pub fn suggestion(mut self, style: Style) -> Self {
        self.suggestion = style;
        self
    }

    pub(crate) fn paint_invalid(&self, text: &str, use_color: bool) -> String {
        apply(&self.invalid, text, use_color)
    }

    pub(crate) fn paint_suggestion(&self, text: &str, use_color: bool) -> String {
        apply(&self.suggestion, text, use_color)
    }
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

// Color was already decided by the caller, so console's own stdout check is
// bypassed with force_styling.
fn apply(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}
