//! Search matching core: tokenization, wildcard matching, acronym
//! extraction, and rank computation for browser item lists.

// Module declarations
pub mod acronym;
pub mod ranking;
pub mod tokenize;
pub mod wildcard;

// Public re-exports (used via lib.rs)
pub use ranking::{
    MatchRanker, RANK_CODE, RANK_EXACT, RANK_FROM_START, RANK_PARTIAL, RANK_PASCAL_CASE_EXACT,
    reset_items,
};
pub use tokenize::{SearchToken, tokenize};
pub use wildcard::WildcardMatcher;
