//! Diagnostics for unrecognized options and their rendering.

use crate::output::{LineEnding, OutputMode};
use crate::theme::ReportTheme;

use super::case::{cli_flag_with, KebabCase, NameCase};

/// One unrecognized option and the closest recognized one, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The supplied option, normalized.
    pub option: String,
    /// A recognized option within suggestion distance.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Renders the diagnostic as one line, without the terminator.
    ///
    /// ```rust
    /// use frontlint::Diagnostic;
    ///
    /// let d = Diagnostic { option: "fooo".into(), suggestion: Some("foo".into()) };
    /// assert_eq!(d.message(), r#"Invalid option "--fooo". Did you mean "--foo"?"#);
    /// ```
    pub fn message(&self) -> String {
        self.message_with(&ReportTheme::plain(), false, &KebabCase)
    }

    pub(crate) fn message_with<N: NameCase + ?Sized>(
        &self,
        theme: &ReportTheme,
        use_color: bool,
        case: &N,
    ) -> String {
        let mut line = format!(
            "Invalid option {}.",
            theme.paint_invalid(&cli_flag_with(&self.option, case), use_color)
        );

        if let Some(suggestion) = &self.suggestion {
            line.push_str(&format!(
                " Did you mean {}?",
                theme.paint_suggestion(&cli_flag_with(suggestion, case), use_color)
            ));
        }

        line
    }
}

/// The unrecognized options found in one validation pass, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// True when every supplied option was recognized.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Renders every diagnostic, each followed by the native line ending.
    ///
    /// Returns an empty string for an empty report.
    pub fn render(&self, theme: &ReportTheme, mode: OutputMode) -> String {
        self.render_with(theme, mode, LineEnding::Native, &KebabCase)
    }

    pub(crate) fn render_with<N: NameCase + ?Sized>(
        &self,
        theme: &ReportTheme,
        mode: OutputMode,
        ending: LineEnding,
        case: &N,
    ) -> String {
        if self.diagnostics.is_empty() {
            return String::new();
        }

        let use_color = mode.should_use_color();
        self.diagnostics
            .iter()
            .fold(String::new(), |mut out, diagnostic| {
                out.push_str(&diagnostic.message_with(theme, use_color, case));
                out.push_str(ending.as_str());
                out
            })
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
