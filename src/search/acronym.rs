//! Pascal-case acronym extraction for abbreviation-style matching.
//!
//! Derives a compact key from a display name so that typing "TF1" finds
//! "TestFile1", or "GPS" finds "get_parser_state".

/// Characters that start a suffix excluded from acronym extraction,
/// such as a generic parameter list or an argument list.
const SUFFIX_MARKERS: [char; 2] = ['<', '('];

/// Computes the pascal-case acronym of `data`.
///
/// Two extraction strategies apply:
///
/// - Uniform-case identifiers with underscores ("SOME_TEST", "some_test")
///   contribute the first character of every non-empty `_`-separated
///   segment, case preserved.
/// - Everything else contributes its uppercase letters and digits, scanned
///   left to right, stopping at the first suffix marker.
///
/// Always returns an owned string (possibly empty); never panics. Safe to
/// precompute once per item and cache.
pub fn compute(data: &str) -> String {
    if data.is_empty() {
        return String::new();
    }

    let has_upper = data.chars().any(char::is_uppercase);
    let has_lower = data.chars().any(char::is_lowercase);
    let uniform_case = !(has_upper && has_lower);

    if data.chars().count() > 1 && uniform_case && data.contains('_') {
        return data
            .split('_')
            .filter_map(|segment| segment.chars().next())
            .collect();
    }

    data.chars()
        .take_while(|c| !SUFFIX_MARKERS.contains(c))
        .filter(|c| c.is_uppercase() || c.is_ascii_digit())
        .collect()
}
