//! Filter-string tokenization for the ranking pass.

use super::wildcard::WildcardMatcher;

/// One whitespace-delimited fragment of the user's filter, paired with a
/// wildcard matcher bound to its exact text.
///
/// Tokens live for a single ranking pass; they are rebuilt on every filter
/// change rather than cached.
#[derive(Debug, Clone)]
pub struct SearchToken {
    filter: String,
    wildcard: WildcardMatcher,
}

impl SearchToken {
    fn new(filter: &str) -> Self {
        Self {
            filter: filter.to_string(),
            wildcard: WildcardMatcher::new(filter),
        }
    }

    /// The token's exact text, as typed.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The matcher bound to this token's text.
    pub fn wildcard(&self) -> &WildcardMatcher {
        &self.wildcard
    }
}

/// Splits `filter` on runs of whitespace into search tokens.
///
/// Empty and whitespace-only input yield an empty vec. Token order mirrors
/// the input left to right. Repeated tokens are dropped, first occurrence
/// kept, so a token contributes to an item's rank at most once per pass.
pub fn tokenize(filter: &str) -> Vec<SearchToken> {
    let mut tokens: Vec<SearchToken> = Vec::new();
    for word in filter.split_whitespace() {
        if tokens.iter().any(|token| token.filter == word) {
            continue;
        }
        tokens.push(SearchToken::new(word));
    }
    tokens
}
