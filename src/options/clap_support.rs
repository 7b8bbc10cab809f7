//! Building allow-lists from clap command definitions.

use super::allowed::AllowedOptions;

impl AllowedOptions {
    /// Collects the flags a clap command accepts.
    ///
    /// Each non-positional argument contributes its long name (or its id when
    /// it has none) as the canonical name and its short flag as the alias.
    ///
    /// ```rust
    /// use clap::{Arg, ArgAction, Command};
    /// use frontlint::AllowedOptions;
    ///
    /// let cmd = Command::new("lint")
    ///     .arg(Arg::new("quiet").long("quiet").short('q').action(ArgAction::SetTrue))
    ///     .arg(Arg::new("files"));
    ///
    /// let allowed = AllowedOptions::from_command(&cmd);
    /// assert_eq!(allowed.tokens(), vec!["q", "quiet"]);
    /// ```
    pub fn from_command(cmd: &clap::Command) -> Self {
        cmd.get_arguments()
            .filter(|arg| !arg.is_positional())
            .map(|arg| {
                let name = arg
                    .get_long()
                    .map(str::to_string)
                    .unwrap_or_else(|| arg.get_id().to_string());
                let alias = arg.get_short().map(|c| c.to_string());
                (name, alias)
            })
            .collect()
    }
}
