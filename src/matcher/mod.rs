//! Record matching: tokenization, per-field scanning, aggregation
//!
//! A [`Matcher`] borrows a collection of records and an ordered list of
//! field keys. Each query is split into tokens; every record is scored
//! by scanning every configured field with every token, keeping the
//! best-scoring field per token, and averaging the per-token bests.
//! There is no index: every query re-scans the full collection.

mod resolve;

use crate::algorithms::automaton;
use crate::algorithms::normalize::normalize;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::RwLock;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a query.
///
/// Matching itself is total over string and record inputs; the only
/// failure mode is internal, and an empty result list is an ordinary
/// `Ok`, never an error.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The path-segment cache lock was poisoned by an earlier panic.
    #[error("path cache poisoned by an earlier panic")]
    CachePoisoned,
}

/// Configuration for a [`Matcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherOptions {
    /// Field keys to search: plain top-level keys or dotted paths into
    /// nested records, evaluated in this order. A key that does not
    /// resolve for some record is tolerated, not rejected.
    pub keys: Vec<String>,
}

impl MatcherOptions {
    /// Options searching the given keys, in order.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// One matched record.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The original record, borrowed from the collection.
    pub item: &'a Value,
    /// Aggregate score over all query tokens.
    pub score: f64,
    /// Best-field spans for each token, concatenated in token order and
    /// left unmerged. Offsets are signed; see
    /// [`ScanOutcome`](crate::algorithms::automaton::ScanOutcome).
    pub matches: Vec<(isize, isize)>,
}

/// Approximate matcher over a borrowed record collection.
///
/// The collection and key set are read-only for the matcher's lifetime.
/// The only mutable state is the lazy path-segment cache, which is
/// append-only and guarded by a lock so concurrent readers stay safe;
/// the matcher itself never spawns threads.
///
/// # Example
/// ```
/// use fuzzyscan::{Matcher, MatcherOptions};
/// use serde_json::json;
///
/// let records = vec![
///     json!({ "title": "Pythagorean Theorem", "tags": ["math", "geometry"] }),
///     json!({ "title": "Quantum Mechanics", "tags": ["physics"] }),
/// ];
/// let matcher = Matcher::new(&records, MatcherOptions::with_keys(["title", "tags"]));
///
/// let results = matcher.find_matches("pythagorean theorem").unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item["title"], "Pythagorean Theorem");
/// assert_eq!(results[0].score, 1.0);
/// ```
pub struct Matcher<'a> {
    collection: &'a [Value],
    options: MatcherOptions,
    path_cache: RwLock<AHashMap<String, Vec<String>>>,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over `collection`, searching the fields named by
    /// `options`. Both are held as given; nothing is cloned or copied.
    pub fn new(collection: &'a [Value], options: MatcherOptions) -> Self {
        Self {
            collection,
            options,
            path_cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Rank records against `query`.
    ///
    /// The query splits on spaces into tokens (empty tokens survive and
    /// simply score zero); each token is normalized independently. Per
    /// record and token, the highest-scoring configured field wins, with
    /// ties keeping the earlier key; the record's aggregate is the mean
    /// of its per-token bests. Records must clear an aggregate of 0.5,
    /// and the final list keeps only aggregates of exactly 1.0, sorted
    /// by descending score.
    pub fn find_matches(&self, query: &str) -> Result<Vec<MatchResult<'a>>, MatchError> {
        let tokens: Vec<String> = query.split(' ').map(normalize).collect();

        debug!(
            tokens = tokens.len(),
            records = self.collection.len(),
            keys = self.options.keys.len(),
            "scanning collection"
        );

        let mut results = Vec::new();
        for item in self.collection {
            let mut total_score = 0.0;
            let mut all_spans = Vec::new();

            for token in &tokens {
                let mut best_score = 0.0;
                let mut best_spans = Vec::new();

                for key in &self.options.keys {
                    let text = normalize(&self.field_text(item, key)?);
                    let outcome = automaton::scan(token, &text);
                    if outcome.score > best_score {
                        best_score = outcome.score;
                        best_spans = outcome.spans;
                    }
                }

                total_score += best_score;
                all_spans.extend(best_spans);
            }

            let score = total_score / tokens.len() as f64;
            if score > 0.5 {
                results.push(MatchResult {
                    item,
                    score,
                    matches: all_spans,
                });
            }
        }

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.retain(|result| result.score == 1.0);

        debug!(matched = results.len(), "scan complete");
        Ok(results)
    }

    /// The searchable text of `path` within `record`.
    ///
    /// The empty path names the record itself. Split segments are cached
    /// per path string for the matcher's lifetime; the cache only ever
    /// grows, bounded by the number of distinct configured keys.
    fn field_text(&self, record: &Value, path: &str) -> Result<String, MatchError> {
        if path.is_empty() {
            return Ok(resolve::render_value(Some(record)));
        }

        {
            let cache = self
                .path_cache
                .read()
                .map_err(|_| MatchError::CachePoisoned)?;
            if let Some(segments) = cache.get(path) {
                return Ok(resolve::render_value(resolve::resolve(record, segments)));
            }
        }

        let segments = resolve::split_path(path);
        let text = resolve::render_value(resolve::resolve(record, &segments));
        self.path_cache
            .write()
            .map_err(|_| MatchError::CachePoisoned)?
            .insert(path.to_owned(), segments);
        Ok(text)
    }
}
