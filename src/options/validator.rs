//! Checks supplied option names against an allow-list.

use log::debug;

use crate::output::{LineEnding, OutputMode};
use crate::theme::ReportTheme;

use super::allowed::AllowedOptions;
use super::case::{KebabCase, NameCase};
use super::report::{Diagnostic, ValidationReport};
use super::suggest::{suggest_with, EditDistance, Levenshtein};

/// Validates supplied option names and renders diagnostics for unknown ones.
///
/// The distance metric and name normalizer are type parameters so either can
/// be replaced; the defaults are Levenshtein distance and kebab-case.
///
/// # Example
///
/// ```rust
/// use frontlint::{AllowedOptions, LineEnding, OptionValidator, OutputMode};
///
/// let allowed = AllowedOptions::new().add("foo", Some("f"));
/// let validator = OptionValidator::new(&allowed)
///     .with_output(OutputMode::Text)
///     .with_line_ending(LineEnding::Lf);
///
/// assert_eq!(
///     validator.render(["fooo"]),
///     "Invalid option \"--fooo\". Did you mean \"--foo\"?\n",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OptionValidator<'a, D = Levenshtein, N = KebabCase> {
    allowed: &'a AllowedOptions,
    metric: D,
    case: N,
    theme: ReportTheme,
    mode: OutputMode,
    ending: LineEnding,
}

impl<'a> OptionValidator<'a> {
    /// Creates a validator with default metric, casing, theme and output mode.
    pub fn new(allowed: &'a AllowedOptions) -> Self {
        Self {
            allowed,
            metric: Levenshtein,
            case: KebabCase,
            theme: ReportTheme::default(),
            mode: OutputMode::Auto,
            ending: LineEnding::Native,
        }
    }
}

impl<'a, D, N> OptionValidator<'a, D, N>
where
    D: EditDistance,
    N: NameCase,
{
    /// Replaces the edit distance used for suggestions.
    pub fn with_metric<M: EditDistance>(self, metric: M) -> OptionValidator<'a, M, N> {
        OptionValidator {
            allowed: self.allowed,
            metric,
            case: self.case,
            theme: self.theme,
            mode: self.mode,
            ending: self.ending,
        }
    }

    /// Replaces the name normalizer.
    pub fn with_case<C: NameCase>(self, case: C) -> OptionValidator<'a, D, C> {
        OptionValidator {
            allowed: self.allowed,
            metric: self.metric,
            case,
            theme: self.theme,
            mode: self.mode,
            ending: self.ending,
        }
    }

    pub fn with_theme(mut self, theme: ReportTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_output(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    /// Collects a diagnostic for every supplied name missing from the allow-list.
    ///
    /// Names are normalized before lookup. Names of a single character never
    /// get a suggestion.
    pub fn validate<I, K>(&self, supplied: I) -> ValidationReport
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let tokens = self.allowed.tokens_with(&self.case);

        let diagnostics: Vec<Diagnostic> = supplied
            .into_iter()
            .map(|key| self.case.normalize(key.as_ref()))
            .filter(|option| tokens.binary_search(option).is_err())
            .map(|option| {
                let suggestion = if option.chars().count() >= 2 {
                    suggest_with(&tokens, &option, &self.metric).map(str::to_string)
                } else {
                    None
                };
                Diagnostic { option, suggestion }
            })
            .collect();

        if !diagnostics.is_empty() {
            debug!("{} unrecognized option(s)", diagnostics.len());
        }

        ValidationReport::new(diagnostics)
    }

    /// Validates and renders in one step; empty when everything is recognized.
    pub fn render<I, K>(&self, supplied: I) -> String
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.validate(supplied)
            .render_with(&self.theme, self.mode, self.ending, &self.case)
    }
}

/// Renders diagnostics for every supplied option not in `allowed`.
///
/// Uses the default theme, automatic color detection and the native line
/// ending.
///
/// ```rust
/// use frontlint::{check_invalid_options, AllowedOptions};
///
/// let allowed = AllowedOptions::new().add("quiet", Some("q"));
/// assert_eq!(check_invalid_options(&allowed, ["quiet", "q"]), "");
/// ```
pub fn check_invalid_options<I, K>(allowed: &AllowedOptions, supplied: I) -> String
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    OptionValidator::new(allowed).render(supplied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_validator(allowed: &AllowedOptions) -> OptionValidator<'_> {
        OptionValidator::new(allowed)
            .with_output(OutputMode::Text)
            .with_line_ending(LineEnding::Lf)
    }

    #[test]
    fn test_all_recognized_is_empty() {
        let allowed = AllowedOptions::new()
            .add("maxWarnings", Some("mw"))
            .add("quiet", Some("q"));
        let validator = text_validator(&allowed);
        assert!(validator.validate(["maxWarnings", "max-warnings", "mw", "q"]).is_empty());
        assert_eq!(validator.render(["quiet"]), "");
    }

    #[test]
    fn test_no_supplied_options() {
        let allowed = AllowedOptions::new().add("quiet", None);
        let none: [&str; 0] = [];
        assert!(text_validator(&allowed).validate(none).is_empty());
    }

    #[test]
    fn test_empty_allow_list_reports_everything() {
        let allowed = AllowedOptions::new();
        let report = text_validator(&allowed).validate(["foo", "b"]);
        assert_eq!(
            report.diagnostics(),
            &[
                Diagnostic { option: "foo".into(), suggestion: None },
                Diagnostic { option: "b".into(), suggestion: None },
            ]
        );
    }

    #[test]
    fn test_foo_alias_example() {
        let allowed = AllowedOptions::new().add("foo", Some("f"));
        assert_eq!(
            text_validator(&allowed).render(["fooo"]),
            "Invalid option \"--fooo\". Did you mean \"--foo\"?\n"
        );
    }

    #[test]
    fn test_max_warnings_example() {
        let allowed = AllowedOptions::new().add("maxWarnings", None);
        assert_eq!(
            text_validator(&allowed).render(["max-warning"]),
            "Invalid option \"--max-warning\". Did you mean \"--max-warnings\"?\n"
        );
    }

    #[test]
    fn test_supplied_camel_case_is_rendered_kebab() {
        let allowed = AllowedOptions::new().add("maxWarnings", None);
        let report = text_validator(&allowed).validate(["maxWarning"]);
        assert_eq!(report.diagnostics()[0].option, "max-warning");
        assert_eq!(report.diagnostics()[0].suggestion.as_deref(), Some("max-warnings"));
    }

    #[test]
    fn test_single_char_never_suggested() {
        let allowed = AllowedOptions::new().add("foo", Some("f"));
        let out = text_validator(&allowed).render(["g"]);
        assert_eq!(out, "Invalid option \"-g\".\n");
        assert!(!out.contains("Did you mean"));
    }

    #[test]
    fn test_encounter_order_preserved() {
        let allowed = AllowedOptions::new().add("quiet", None);
        let report = text_validator(&allowed).validate(["zeta", "quiet", "alpha"]);
        let options: Vec<&str> = report.diagnostics().iter().map(|d| d.option.as_str()).collect();
        assert_eq!(options, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_nothing_within_cap() {
        let allowed = AllowedOptions::new().add("ab", None);
        let report = text_validator(&allowed).validate(["zzzzzzzzzzzzzzzzzzzz"]);
        assert_eq!(report.diagnostics()[0].suggestion, None);
    }

    #[test]
    fn test_ties_resolve_lexically() {
        // Insertion order differs from sorted order; "bar" sorts first.
        let allowed = AllowedOptions::new().add("baz", None).add("bar", None);
        let report = text_validator(&allowed).validate(["ba"]);
        assert_eq!(report.diagnostics()[0].suggestion.as_deref(), Some("bar"));
    }

    #[test]
    fn test_custom_metric() {
        let allowed = AllowedOptions::new().add("alpha", None).add("beta", None);
        let always_beta = |a: &str, _b: &str| -> usize { if a == "beta" { 1 } else { 50 } };
        let report = text_validator(&allowed)
            .with_metric(always_beta)
            .validate(["alphaa"]);
        assert_eq!(report.diagnostics()[0].suggestion.as_deref(), Some("beta"));
    }

    #[test]
    fn test_custom_case() {
        let allowed = AllowedOptions::new().add("Quiet", None);
        let lower = |s: &str| s.to_lowercase();
        let validator = text_validator(&allowed).with_case(lower);
        assert!(validator.validate(["QUIET"]).is_empty());
        assert_eq!(validator.render(["quiett"]), "Invalid option \"--quiett\". Did you mean \"--quiet\"?\n");
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let allowed = AllowedOptions::new().add("formatter", Some("f")).add("fix", None);
        let validator = text_validator(&allowed);
        let first = validator.render(["fomatter", "x", "fixx"]);
        let second = validator.render(["fomatter", "x", "fixx"]);
        assert_eq!(first, second);
    }
}
