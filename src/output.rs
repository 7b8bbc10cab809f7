//! Output mode and line ending selection for rendered diagnostics.

use std::str::FromStr;

use thiserror::Error;

/// Controls whether rendered diagnostics carry ANSI color codes.
///
/// # Example
///
/// ```rust
/// use frontlint::OutputMode;
///
/// assert!(OutputMode::Term.should_use_color());
/// assert!(!OutputMode::Text.should_use_color());
/// assert_eq!("never".parse::<OutputMode>().unwrap(), OutputMode::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Color when the diagnostic stream (stderr) supports it.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Term,
    /// Never emit ANSI codes.
    Text,
}

impl OutputMode {
    /// Resolves the mode to a yes/no answer.
    ///
    /// `Auto` follows `console`'s detection for stderr, which honours
    /// `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and tty checks.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled_stderr(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Error returned when parsing an [`OutputMode`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputModeError {
    #[error("unknown output mode '{0}', expected one of: auto, always, never")]
    Unknown(String),
}

impl FromStr for OutputMode {
    type Err = OutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "always" | "term" => Ok(OutputMode::Term),
            "never" | "text" => Ok(OutputMode::Text),
            _ => Err(OutputModeError::Unknown(s.to_string())),
        }
    }
}

/// Line terminator appended to every diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
