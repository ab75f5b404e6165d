//! Configuration surface consumed by the surrounding browser features.

use crate::error::Result;
use crate::item::ItemCategory;
use crate::search::ranking::{RANK_FROM_START, RANK_PARTIAL};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which item categories a browser session considers at all.
///
/// Applied by the UI layer before or after ranking; category never gates
/// inclusion inside the ranking pass itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    CodeOnly,
    NonCodeOnly,
}

/// True when an item of `category` passes `filter`.
pub fn passes_filter(category: ItemCategory, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::CodeOnly => category == ItemCategory::Code,
        CategoryFilter::NonCodeOnly => category == ItemCategory::NonCode,
    }
}

/// Tunable ranking knobs.
///
/// The named tier constants are fixed for compatible ranking output; only
/// the unnamed partial tier is adjustable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RankingOptions {
    /// Score for a substring or wildcard match that is neither exact nor a
    /// prefix. Must stay between 1 and `RANK_FROM_START - 1`.
    pub partial_match_rank: i32,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            partial_match_rank: RANK_PARTIAL,
        }
    }
}

/// Search-surface configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    pub ranking: RankingOptions,
    pub category_filter: CategoryFilter,
}

impl SearchConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading search config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing search config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects partial ranks that would reorder the fixed tiers.
    pub fn validate(&self) -> Result<()> {
        let partial = self.ranking.partial_match_rank;
        if !(1..RANK_FROM_START).contains(&partial) {
            bail!(
                "partial_match_rank must be between 1 and {}, got {}",
                RANK_FROM_START - 1,
                partial
            );
        }
        Ok(())
    }
}
