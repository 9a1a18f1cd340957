//! "Did you mean" suggestions for mistyped values

use crate::registry::{self, CASE_BLIND_COSINE};

/// Number of alternatives offered by [`suggested_vals`]
pub const SUGGESTION_COUNT: usize = 3;

/// Suffix for an error message suggesting `vals`, or `""` if there are none.
///
/// ```rust
/// use strdist::suggest::suggestion_string;
///
/// assert_eq!(
///     suggestion_string(&["world", "word", "ward"]),
///     r#", did you mean "ward", "word" or "world"?"#
/// );
/// ```
pub fn suggestion_string<S: AsRef<str>>(vals: &[S]) -> String {
    if vals.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&str> = vals.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    format!(", did you mean {}?", join_quoted(&sorted, ", ", " or "))
}

fn join_quoted(vals: &[&str], sep: &str, last_sep: &str) -> String {
    let mut out = String::new();
    for (i, val) in vals.iter().enumerate() {
        if i > 0 {
            out.push_str(if i == vals.len() - 1 { last_sep } else { sep });
        }
        out.push('"');
        out.push_str(val);
        out.push('"');
    }
    out
}

/// Up to [`SUGGESTION_COUNT`] entries of `alts` that look like `val`, ignoring case.
pub fn suggested_vals<S: AsRef<str>>(val: &str, alts: &[S]) -> Vec<String> {
    registry::default_finder(CASE_BLIND_COSINE)
        .map(|mut finder| finder.find_n_str_like(SUGGESTION_COUNT, val, alts))
        .unwrap_or_default()
}

/// [`suggestion_string`] of the [`suggested_vals`] for `val`.
pub fn suggest<S: AsRef<str>>(val: &str, alts: &[S]) -> String {
    suggestion_string(&suggested_vals(val, alts))
}
