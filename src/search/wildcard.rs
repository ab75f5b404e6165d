//! Single-pattern wildcard matching with case-insensitive rules.

use regex::{Regex, RegexBuilder};

/// Matches one pattern against candidate strings.
///
/// Patterns without metacharacters use case-insensitive substring
/// containment. Patterns containing `*` (zero or more characters) or `?`
/// (exactly one character) use anchored glob semantics: the whole candidate
/// must be consumed by the whole pattern.
///
/// Any string is a valid pattern; there is no malformed-pattern error.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    pattern: String,
    pattern_lower: String,
    wildcard_present: bool,
    /// Compiled glob, present when the pattern has metacharacters and the
    /// translated regex compiled. On the (unexpected) compile failure we
    /// fall back to substring containment.
    glob: Option<Regex>,
}

impl WildcardMatcher {
    /// Binds a matcher to `pattern`. One pattern per instance.
    pub fn new(pattern: &str) -> Self {
        let wildcard_present = pattern.contains(['*', '?']);
        let glob = if wildcard_present {
            compile_glob(pattern)
        } else {
            None
        };

        Self {
            pattern: pattern.to_string(),
            pattern_lower: pattern.to_lowercase(),
            wildcard_present,
            glob,
        }
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True when the pattern contains `*` or `?`.
    pub fn wildcard_present(&self) -> bool {
        self.wildcard_present
    }

    /// Tests `data` against the bound pattern.
    ///
    /// An empty pattern matches nothing. A non-empty pattern against empty
    /// data always matches; browser filters treat blank display text as
    /// passing rather than erroring.
    pub fn matches(&self, data: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        if data.is_empty() {
            return true;
        }

        match &self.glob {
            Some(glob) => glob.is_match(data),
            None => data.to_lowercase().contains(&self.pattern_lower),
        }
    }
}

/// Translates a glob pattern into an anchored, case-insensitive regex.
fn compile_glob(pattern: &str) -> Option<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    source.push('$');

    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(glob) => Some(glob),
        Err(err) => {
            tracing::warn!("Failed to compile glob for pattern {:?}: {}", pattern, err);
            None
        }
    }
}
