//! The allow-list of option names a tool recognizes.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::case::{KebabCase, NameCase};
use super::error::OptionSetError;

/// Per-option settings as they appear in an option table.
///
/// Only `alias` matters for validation; any other keys in the source
/// document (descriptions, types, defaults) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OptionSpec {
    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AllowedOption {
    name: String,
    alias: Option<String>,
}

/// Recognized option names, each with at most one alias.
///
/// Names may be given in any casing; they are normalized before
/// comparison.
///
/// # Example
///
/// ```rust
/// use frontlint::AllowedOptions;
///
/// let allowed = AllowedOptions::new()
///     .add("config", Some("c"))
///     .add("maxWarnings", None);
///
/// assert_eq!(allowed.tokens(), vec!["c", "config", "max-warnings"]);
/// assert!(allowed.check().is_ok());
/// ```
///
/// Tables can also be loaded from any serde format:
///
/// ```rust
/// use frontlint::AllowedOptions;
///
/// let allowed: AllowedOptions = serde_json::from_str(
///     r#"{ "formatter": { "alias": "f" }, "quiet": {} }"#,
/// ).unwrap();
/// assert_eq!(allowed.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, OptionSpec>")]
pub struct AllowedOptions {
    entries: Vec<AllowedOption>,
}

impl AllowedOptions {
    /// Creates an empty allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, returning the updated list for chaining.
    ///
    /// An empty alias is treated as no alias.
    pub fn add(mut self, name: impl Into<String>, alias: Option<&str>) -> Self {
        self.push(name.into(), alias.map(str::to_string));
        self
    }

    fn push(&mut self, name: String, alias: Option<String>) {
        let alias = alias.filter(|a| !a.is_empty());
        self.entries.push(AllowedOption { name, alias });
    }

    /// Number of canonical options (aliases not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Alias registered for `name`, if any. `name` is matched verbatim.
    pub fn alias_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.alias.as_deref())
    }

    /// All names and aliases, kebab-cased and sorted.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens_with(&KebabCase)
    }

    /// All names and aliases normalized with `case`, sorted lexically.
    pub fn tokens_with<N: NameCase + ?Sized>(&self, case: &N) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .entries
            .iter()
            .map(|e| case.normalize(&e.name))
            .chain(
                self.entries
                    .iter()
                    .filter_map(|e| e.alias.as_deref())
                    .map(|alias| case.normalize(alias)),
            )
            .collect();
        tokens.sort();
        tokens
    }

    /// Verifies that names and aliases stay unique after kebab-casing.
    pub fn check(&self) -> Result<(), OptionSetError> {
        self.check_with(&KebabCase)
    }

    /// Verifies that names and aliases stay unique after normalizing with `case`.
    pub fn check_with<N: NameCase + ?Sized>(&self, case: &N) -> Result<(), OptionSetError> {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for entry in &self.entries {
            for raw in std::iter::once(entry.name.as_str()).chain(entry.alias.as_deref()) {
                let token = case.normalize(raw);
                if token.is_empty() {
                    return Err(OptionSetError::EmptyName(raw.to_string()));
                }
                if let Some(first) = seen.insert(token.clone(), raw) {
                    return Err(OptionSetError::Duplicate {
                        token,
                        first: first.to_string(),
                        second: raw.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl From<BTreeMap<String, OptionSpec>> for AllowedOptions {
    fn from(table: BTreeMap<String, OptionSpec>) -> Self {
        table
            .into_iter()
            .map(|(name, spec)| (name, spec.alias))
            .collect()
    }
}

impl<N, A> FromIterator<(N, Option<A>)> for AllowedOptions
where
    N: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Option<A>)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, alias) in iter {
            options.push(name.into(), alias.map(Into::into));
        }
        options
    }
}
