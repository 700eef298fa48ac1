//! Candidate matching for coolmenu.
//!
//! Provides the two matching rules used by the menu:
//! - [substring_match]: case-insensitive containment, the rule used for live filtering.
//! - [fuzzy_score]: case-insensitive in-order subsequence scoring, used as an affinity score.
//!
//! A third strategy backed by the fuzzy_matcher crate ([MatchStrategy::Skim]) is available
//! through the config. [Matcher] bundles the chosen strategy and the optional ranking pass,
//! and [CandidateSet] holds the candidate names together with their lowercase forms so that
//! refiltering on every keystroke does not lowercase the whole list again.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;
use std::cmp::Reverse;

/// Score added for every pattern character found in order.
const CHAR_SCORE: i64 = 10;
/// Every `LENGTH_PENALTY_DIV` characters of the target cost one point.
const LENGTH_PENALTY_DIV: i64 = 4;

/// Matching strategy selected in `[general] matcher`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Substring,
    Fuzzy,
    Skim,
}

/// Returns true if the lowercased query is a contiguous substring of the lowercased candidate.
///
/// An empty query matches everything.
pub fn substring_match(query: &str, candidate: &str) -> bool {
    query.is_empty() || candidate.to_lowercase().contains(&query.to_lowercase())
}

/// Scores `pattern` as an in-order subsequence of `text`, ignoring case.
///
/// Each pattern character is searched for from the position after the previous match.
/// The score is `10 * len(pattern) - len(text) / 4` (lengths in characters).
/// Returns `None` when a pattern character cannot be found before `text` ends.
///
/// `None` orders below every `Some`, so comparing results directly still ranks a failed
/// match under any valid one, including the negative scores an empty pattern can produce.
pub fn fuzzy_score(pattern: &str, text: &str) -> Option<i64> {
    fuzzy_score_lowered(&pattern.to_lowercase(), &text.to_lowercase())
}

fn fuzzy_score_lowered(pattern: &str, text: &str) -> Option<i64> {
    let mut text_chars = text.chars();
    let mut score = 0;
    for pc in pattern.chars() {
        if !text_chars.any(|tc| tc == pc) {
            return None;
        }
        score += CHAR_SCORE;
    }
    let text_len = text.chars().count() as i64;
    Some(score - text_len / LENGTH_PENALTY_DIV)
}

/// Character positions in `text` matched by the greedy subsequence walk of [fuzzy_score].
fn fuzzy_positions(pattern: &str, text: &str) -> Vec<usize> {
    let mut positions = Vec::with_capacity(pattern.len());
    let mut text_chars = text.chars().enumerate();
    for pc in pattern.chars() {
        match text_chars.find(|(_, tc)| *tc == pc) {
            Some((idx, _)) => positions.push(idx),
            None => return Vec::new(),
        }
    }
    positions
}

/// The ordered, read-only set of candidate names for one session.
///
/// Lowercase forms are computed once on construction.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: Vec<String>,
    lowered: Vec<String>,
}

impl CandidateSet {
    pub fn new(items: Vec<String>) -> Self {
        let lowered = items.iter().map(|s| s.to_lowercase()).collect();
        Self { items, lowered }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(String::as_str)
    }

    #[inline]
    pub fn lowered(&self, idx: usize) -> Option<&str> {
        self.lowered.get(idx).map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl From<Vec<String>> for CandidateSet {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

/// Matcher carrying the active [MatchStrategy] and whether results are ranked by score.
pub struct Matcher {
    strategy: MatchStrategy,
    rank: bool,
    skim: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchStrategy::default(), false)
    }
}

impl Matcher {
    pub fn new(strategy: MatchStrategy, rank: bool) -> Self {
        Self {
            strategy,
            rank,
            skim: SkimMatcherV2::default().ignore_case(),
        }
    }

    #[inline]
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    #[inline]
    pub fn ranks(&self) -> bool {
        self.rank
    }

    /// Decides whether `candidate` matches `query` and returns its affinity score.
    ///
    /// For the substring strategy the affinity is the fuzzy score of the same pair,
    /// which always exists when the substring test passes.
    pub fn score(&self, query: &str, candidate: &str) -> Option<i64> {
        self.score_lowered(&query.to_lowercase(), candidate, &candidate.to_lowercase())
    }

    fn score_lowered(&self, query: &str, candidate: &str, lowered: &str) -> Option<i64> {
        match self.strategy {
            MatchStrategy::Substring => {
                if lowered.contains(query) {
                    fuzzy_score_lowered(query, lowered)
                } else {
                    None
                }
            }
            MatchStrategy::Fuzzy => fuzzy_score_lowered(query, lowered),
            MatchStrategy::Skim => {
                if query.is_empty() {
                    Some(0)
                } else {
                    self.skim.fuzzy_match(candidate, query)
                }
            }
        }
    }

    /// Returns the indices into `candidates` that match `query`.
    ///
    /// Source order is preserved. When ranking is enabled the result is stable-sorted by
    /// descending affinity, so equal scores keep their source order. An empty query
    /// always yields the whole set in source order.
    pub fn filter(&self, query: &str, candidates: &CandidateSet) -> Vec<usize> {
        if query.is_empty() {
            return (0..candidates.len()).collect();
        }
        let query = query.to_lowercase();

        if !self.rank {
            return (0..candidates.len())
                .filter(|&idx| self.score_at(&query, candidates, idx).is_some())
                .collect();
        }

        let mut scored: Vec<(usize, i64)> = (0..candidates.len())
            .filter_map(|idx| self.score_at(&query, candidates, idx).map(|s| (idx, s)))
            .collect();
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }

    fn score_at(&self, query: &str, candidates: &CandidateSet, idx: usize) -> Option<i64> {
        let candidate = candidates.get(idx)?;
        let lowered = candidates.lowered(idx)?;
        self.score_lowered(query, candidate, lowered)
    }

    /// Character positions in `candidate` matched by `query`, for highlighting.
    ///
    /// Returns an empty list when nothing matches, when the query is empty, or when
    /// lowercasing changed the character count of the candidate.
    pub fn match_positions(&self, query: &str, candidate: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();
        let lowered = candidate.to_lowercase();
        if lowered.chars().count() != candidate.chars().count() {
            return Vec::new();
        }

        match self.strategy {
            MatchStrategy::Substring => match lowered.find(&query) {
                Some(byte_start) => {
                    let start = lowered[..byte_start].chars().count();
                    (start..start + query.chars().count()).collect()
                }
                None => Vec::new(),
            },
            MatchStrategy::Fuzzy => fuzzy_positions(&query, &lowered),
            MatchStrategy::Skim => self
                .skim
                .fuzzy_indices(candidate, &query)
                .map(|(_, indices)| indices)
                .unwrap_or_default(),
        }
    }
}
