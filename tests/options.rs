use frontlint::{
    check_invalid_options, AllowedOptions, LineEnding, OptionValidator, OutputMode, ReportTheme,
};
use proptest::prelude::*;
use serial_test::serial;

fn plain(allowed: &AllowedOptions) -> OptionValidator<'_> {
    OptionValidator::new(allowed)
        .with_output(OutputMode::Text)
        .with_line_ending(LineEnding::Lf)
}

fn linter_options() -> AllowedOptions {
    serde_json::from_str(
        r#"{
            "allowEmptyInput": { "alias": "aei" },
            "cache": {},
            "config": { "alias": "c" },
            "fix": {},
            "formatter": { "alias": "f" },
            "ignorePath": { "alias": "i" },
            "maxWarnings": { "alias": "mw" },
            "quiet": { "alias": "q" },
            "version": { "alias": "v" }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_foo_alias_example() {
    let allowed = AllowedOptions::new().add("foo", Some("f"));
    let report = check_invalid_options(&allowed, ["fooo"]);
    let eol = LineEnding::Native.as_str();
    let expected = format!("Invalid option \"--fooo\". Did you mean \"--foo\"?{eol}");
    assert_eq!(console::strip_ansi_codes(&report), expected);
}

#[test]
fn test_max_warnings_example() {
    let allowed = AllowedOptions::new().add("maxWarnings", None);
    assert_eq!(
        plain(&allowed).render(["max-warning"]),
        "Invalid option \"--max-warning\". Did you mean \"--max-warnings\"?\n"
    );
}

#[test]
fn test_mixed_report() {
    let allowed = linter_options();
    let out = plain(&allowed).render([
        "quiet",
        "formater",
        "x",
        "ignore_path",
        "maxWarning",
        "mw",
        "cach",
    ]);
    assert_eq!(
        out,
        concat!(
            "Invalid option \"--formater\". Did you mean \"--formatter\"?\n",
            "Invalid option \"-x\".\n",
            "Invalid option \"--max-warning\". Did you mean \"--max-warnings\"?\n",
            "Invalid option \"--cach\". Did you mean \"--cache\"?\n",
        )
    );
}

#[test]
fn test_short_flag_suggested_for_two_letter_typo() {
    let allowed = linter_options();
    let report = plain(&allowed).validate(["qq"]);
    // The other single-letter aliases are two edits away.
    assert_eq!(report.diagnostics()[0].suggestion.as_deref(), Some("q"));
}

#[test]
fn test_validator_is_reusable() {
    let allowed = linter_options();
    let validator = plain(&allowed);
    assert_eq!(validator.render(["fx"]), validator.render(["fx"]));
    assert!(validator.validate(["fix", "v"]).is_empty());
}

#[test]
#[serial]
fn test_term_mode_styles_flags() {
    let allowed = AllowedOptions::new().add("foo", None);
    let out = OptionValidator::new(&allowed)
        .with_output(OutputMode::Term)
        .with_line_ending(LineEnding::Lf)
        .render(["fooo"]);
    assert_eq!(
        out,
        "Invalid option \x1b[31m\"--fooo\"\x1b[0m. Did you mean \x1b[36m\"--foo\"\x1b[0m?\n"
    );
}

#[test]
#[serial]
fn test_auto_mode_follows_console_detection() {
    let allowed = AllowedOptions::new().add("foo", None);
    let validator = OptionValidator::new(&allowed)
        .with_output(OutputMode::Auto)
        .with_line_ending(LineEnding::Lf);

    console::set_colors_enabled_stderr(false);
    assert_eq!(
        validator.render(["fooo"]),
        "Invalid option \"--fooo\". Did you mean \"--foo\"?\n"
    );

    console::set_colors_enabled_stderr(true);
    assert!(validator.render(["fooo"]).contains("\x1b[31m"));

    console::set_colors_enabled_stderr(false);
}

#[test]
fn test_custom_theme() {
    let allowed = AllowedOptions::new().add("foo", None);
    let out = OptionValidator::new(&allowed)
        .with_output(OutputMode::Term)
        .with_theme(ReportTheme::plain())
        .with_line_ending(LineEnding::Lf)
        .render(["fooo"]);
    assert_eq!(out, "Invalid option \"--fooo\". Did you mean \"--foo\"?\n");
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{2,8}", 1..8).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_recognized_options_give_empty_report(
        allowed_names in names(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let allowed: AllowedOptions = allowed_names
            .iter()
            .map(|name| (name.as_str(), None::<&str>))
            .collect();
        let supplied: Vec<&str> = picks
            .iter()
            .map(|pick| pick.get(&allowed_names).as_str())
            .collect();
        prop_assert_eq!(plain(&allowed).render(supplied), "");
    }

    #[test]
    fn prop_one_edit_typos_get_closest_suggestion(
        allowed_names in names(),
        pick in any::<prop::sample::Index>(),
        position in any::<prop::sample::Index>(),
        replacement in "[a-z]",
    ) {
        let target = pick.get(&allowed_names);
        let mut chars: Vec<char> = target.chars().collect();
        let at = position.index(chars.len());
        chars[at] = replacement.chars().next().unwrap();
        let typo: String = chars.into_iter().collect();
        prop_assume!(!allowed_names.contains(&typo));

        let allowed: AllowedOptions = allowed_names
            .iter()
            .map(|name| (name.as_str(), None::<&str>))
            .collect();
        let report = plain(&allowed).validate([typo.as_str()]);
        prop_assert_eq!(report.len(), 1);

        let suggestion = report.diagnostics()[0].suggestion.clone();
        prop_assert!(suggestion.is_some());
        let suggestion = suggestion.unwrap();

        let closest = allowed_names
            .iter()
            .map(|name| strsim::levenshtein(name, &typo))
            .min()
            .unwrap();
        prop_assert_eq!(strsim::levenshtein(&suggestion, &typo), closest);
        prop_assert_eq!(closest, 1);
    }

    #[test]
    fn prop_single_character_options_never_get_suggestions(
        allowed_names in names(),
        key in "[a-z]",
    ) {
        let allowed: AllowedOptions = allowed_names
            .iter()
            .map(|name| (name.as_str(), None::<&str>))
            .collect();
        let out = plain(&allowed).render([key.as_str()]);
        prop_assert!(!out.contains("Did you mean"));
        prop_assert_eq!(out, format!("Invalid option \"-{}\".\n", key));
    }

    #[test]
    fn prop_validation_is_idempotent(
        allowed_names in names(),
        supplied in prop::collection::vec("[a-zA-Z_-]{1,10}", 0..6),
    ) {
        let allowed: AllowedOptions = allowed_names
            .iter()
            .map(|name| (name.as_str(), Some("z")))
            .collect();
        let validator = plain(&allowed);
        prop_assert_eq!(validator.render(&supplied), validator.render(&supplied));
    }
}
