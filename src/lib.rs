pub mod config;
pub mod error;
pub mod item;
pub mod lang;
pub mod search;
pub mod tracing;

pub use config::{CategoryFilter, RankingOptions, SearchConfig, passes_filter};
pub use item::{FileItem, ItemCategory, MatchItem, MemberItem, MemberKind};
pub use lang::{Language, LanguageRegistry, LanguageSource};
pub use search::{
    MatchRanker, RANK_CODE, RANK_EXACT, RANK_FROM_START, RANK_PARTIAL, RANK_PASCAL_CASE_EXACT,
    SearchToken, WildcardMatcher, reset_items, tokenize,
};
