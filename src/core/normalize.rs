// Text normalization for matching
//
// Everything we compare goes through `normalize` so "Café" and "cafe" match.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Lower-case, decompose, drop nonspacing marks (category Mn)
///
/// Lower-casing goes first: some capitals (`İ`) lower-case into a base letter
/// plus a nonspacing mark, which would otherwise survive into the output.
/// Spacing (Mc) and enclosing (Me) marks are kept.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .collect()
}

/// Last `/`-separated segment of a path string. Empty for a trailing slash.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
