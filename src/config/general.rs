//! The general configuration settings for coolmenu.
//!
//! Defines the [General] struct deserialized from the `[general]` table of coolmenu.toml.

use crate::core::matcher::{MatchStrategy, Matcher};

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    matcher: MatchStrategy,
    rank_by_score: bool,
    use_cache: bool,
    refresh_on_start: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            matcher: MatchStrategy::Substring,
            rank_by_score: false,
            use_cache: true,
            refresh_on_start: true,
        }
    }
}

impl General {
    #[inline]
    pub fn matcher(&self) -> MatchStrategy {
        self.matcher
    }

    #[inline]
    pub fn rank_by_score(&self) -> bool {
        self.rank_by_score
    }

    #[inline]
    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    #[inline]
    pub fn refresh_on_start(&self) -> bool {
        self.refresh_on_start
    }

    /// Builds the [Matcher] described by these settings.
    pub fn build_matcher(&self) -> Matcher {
        Matcher::new(self.matcher, self.rank_by_score)
    }
}
