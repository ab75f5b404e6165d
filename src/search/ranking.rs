//! Rank computation across search tokens.
//!
//! Every token produced by [`tokenize`](super::tokenize::tokenize) must
//! match an item for the item to stay visible (AND semantics); each matching
//! token contributes the score of its highest applicable tier. Code items
//! receive a flat bonus once per pass, independent of whether they matched.

use crate::config::RankingOptions;
use crate::item::{ItemCategory, MatchItem};
use std::time::Instant;

use super::tokenize::{self, SearchToken};

/// Full-string case-insensitive match of a token against the core text.
pub const RANK_EXACT: i32 = 50;

/// Full-string match of a token against the precomputed acronym.
pub const RANK_PASCAL_CASE_EXACT: i32 = 40;

/// Token is a case-insensitive prefix of the core text.
pub const RANK_FROM_START: i32 = 30;

/// Per-item bonus for `Code` category items.
pub const RANK_CODE: i32 = 10;

/// Default score for a substring or wildcard match that is neither exact
/// nor a prefix. Tunable via [`RankingOptions`]; must stay below
/// [`RANK_FROM_START`].
pub const RANK_PARTIAL: i32 = 8;

/// Computes `matched`/`rank` for browser items against a free-text filter.
///
/// Synchronous and allocation-light; meant to run on every keystroke over an
/// already materialized collection. Callers serialize passes over a given
/// collection; the ranker holds no interior state between calls.
#[derive(Debug, Clone, Default)]
pub struct MatchRanker {
    options: RankingOptions,
}

impl MatchRanker {
    pub fn new(options: RankingOptions) -> Self {
        Self { options }
    }

    /// Ranks `items` against `filter`, mutating each item's
    /// `matched`/`rank` in place.
    ///
    /// A blank filter is equivalent to [`reset_items`]: everything matched
    /// at rank zero. Empty collections are a no-op.
    pub fn match_items<T: MatchItem>(&self, filter: &str, items: &mut [T]) {
        let tokens = tokenize::tokenize(filter);
        if tokens.is_empty() {
            reset_items(items);
            return;
        }

        let start = Instant::now();
        let mut matched_count = 0usize;

        for item in items.iter_mut() {
            let (matched, rank) = self.rank_item(&tokens, item);
            if matched {
                matched_count += 1;
            }
            item.set_match(matched, rank);
        }

        tracing::debug!(
            "Ranked {} items against {} tokens, {} matched, in {:?}",
            items.len(),
            tokens.len(),
            matched_count,
            start.elapsed()
        );
    }

    fn rank_item<T: MatchItem>(&self, tokens: &[SearchToken], item: &T) -> (bool, i32) {
        let mut matched = true;
        let mut rank = 0;

        for token in tokens {
            match self.score_token(token, item) {
                Some(score) => rank += score,
                None => matched = false,
            }
        }

        // The category bonus applies per item, not per token, and regardless
        // of the matched outcome; a non-matching code item carries exactly
        // the bonus.
        if item.category() == ItemCategory::Code {
            rank += RANK_CODE;
        }

        (matched, rank)
    }

    /// Scores one token against one item, highest applicable tier only.
    fn score_token<T: MatchItem>(&self, token: &SearchToken, item: &T) -> Option<i32> {
        let core = item.core_text();
        let filter = token.filter();

        if eq_ignore_case(core, filter) {
            return Some(RANK_EXACT);
        }
        if item.acronym_text() == filter {
            return Some(RANK_PASCAL_CASE_EXACT);
        }
        if starts_with_ignore_case(core, filter) {
            return Some(RANK_FROM_START);
        }
        if token.wildcard().matches(item.display_text()) {
            return Some(self.options.partial_match_rank);
        }

        None
    }
}

/// Restores every item to the "no active filter" state: matched, rank zero.
/// Idempotent; fine to call on an empty collection.
pub fn reset_items<T: MatchItem>(items: &mut [T]) {
    for item in items.iter_mut() {
        item.set_match(true, 0);
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn starts_with_ignore_case(data: &str, prefix: &str) -> bool {
    data.to_lowercase().starts_with(&prefix.to_lowercase())
}
