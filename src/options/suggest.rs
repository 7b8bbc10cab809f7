//! "Did you mean" lookup over the recognized option names.
//!
//! The search is stepped rather than a true nearest-neighbour
//! scan: thresholds 1, 2, ... [`MAX_SUGGESTION_DISTANCE`] are tried in turn,
//! and within one threshold the first candidate in list order wins. With a
//! sorted candidate list this makes ties resolve lexically.

use log::trace;

/// Largest edit distance at which a suggestion is still offered.
pub const MAX_SUGGESTION_DISTANCE: usize = 10;

/// Distance metric between two option names.
pub trait EditDistance {
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Levenshtein distance over Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        strsim::levenshtein(a, b)
    }
}

impl<F> EditDistance for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

/// Finds a close candidate for `invalid` using Levenshtein distance.
///
/// # Example
///
/// ```rust
/// use frontlint::suggest;
///
/// let known = ["formatter", "max-warnings", "quiet"];
/// assert_eq!(suggest(&known, "max-warning"), Some("max-warnings"));
/// assert_eq!(suggest(&known, "qiuet"), Some("quiet"));
/// ```
pub fn suggest<'a, S: AsRef<str>>(candidates: &'a [S], invalid: &str) -> Option<&'a str> {
    suggest_with(candidates, invalid, &Levenshtein)
}

pub(crate) fn suggest_with<'a, S, D>(candidates: &'a [S], invalid: &str, metric: &D) -> Option<&'a str>
where
    S: AsRef<str>,
    D: EditDistance + ?Sized,
{
    for threshold in 1..=MAX_SUGGESTION_DISTANCE {
        let found = candidates
            .iter()
            .map(|candidate| candidate.as_ref())
            .find(|candidate| metric.distance(candidate, invalid) <= threshold);

        if let Some(candidate) = found {
            trace!("suggesting '{}' for '{}' at threshold {}", candidate, invalid, threshold);
            return Some(candidate);
        }
    }

    trace!("no suggestion for '{}' within {}", invalid, MAX_SUGGESTION_DISTANCE);
    None
}
