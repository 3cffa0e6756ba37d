//! fuzzyscan - approximate text matching over structured records
//!
//! Given a collection of nested records and an ordered list of field
//! paths, a [`Matcher`] ranks records by how well a free-text query
//! approximately matches their best fields. The engine is a chunked
//! bit-parallel automaton in the style of Myers' bit-vector algorithm:
//! match state lives in pattern-width bit vectors updated once per text
//! character, so no dynamic-programming matrix is ever built.
//!
//! There is no persistent index; every query re-scans the collection,
//! which keeps the matcher embeddable and state-free apart from a small
//! per-instance path cache.
//!
//! # Example
//! ```
//! use fuzzyscan::{Matcher, MatcherOptions};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({
//!         "title": "Pythagorean Theorem",
//!         "content": { "tags": ["math", "geometry"] },
//!     }),
//!     json!({
//!         "title": "Photosynthesis",
//!         "content": { "tags": ["biology", "plants"] },
//!     }),
//! ];
//!
//! let matcher = Matcher::new(
//!     &records,
//!     MatcherOptions::with_keys(["title", "content.tags"]),
//! );
//!
//! let results = matcher.find_matches("geometry").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].item["title"], "Pythagorean Theorem");
//! ```

pub mod algorithms;
pub mod matcher;

pub use matcher::{MatchError, MatchResult, Matcher, MatcherOptions};
