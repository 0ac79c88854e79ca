//! Whole-list search.
//!
//! Every word is an independent full board scan; nothing is shared between words. That
//! makes the parallel variants safe: the grid is read-only and each word owns its visited
//! mask or frontier.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::info;

use crate::core::grid::Grid;
use crate::error::SearchError;
use crate::search::resources::SearchLimits;
use crate::search::{try_find_word, unbounded, Strategy};

/// The subset of `words` present on `grid`. Words are returned exactly as given.
pub fn find_all<I, S>(grid: &Grid, words: I, strategy: Strategy) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    unbounded(try_find_all(grid, words, strategy, SearchLimits::UNBOUNDED))
}

/// Like [`find_all`], with `limits` applied to each word separately.
pub fn try_find_all<I, S>(
    grid: &Grid,
    words: I,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<BTreeSet<String>, SearchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut checked = 0usize;
    let mut found = BTreeSet::new();
    for word in words {
        let word = word.as_ref();
        checked += 1;
        if try_find_word(grid, word, strategy, limits)? {
            found.insert(word.to_string());
        }
    }
    info!(%strategy, checked, found = found.len(), "batch search done");
    Ok(found)
}

/// [`find_all`] across the rayon pool.
pub fn find_all_par<I, S>(grid: &Grid, words: I, strategy: Strategy) -> BTreeSet<String>
where
    I: IntoParallelIterator<Item = S>,
    S: AsRef<str> + Send,
{
    unbounded(try_find_all_par(grid, words, strategy, SearchLimits::UNBOUNDED))
}

pub fn try_find_all_par<I, S>(
    grid: &Grid,
    words: I,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<BTreeSet<String>, SearchError>
where
    I: IntoParallelIterator<Item = S>,
    S: AsRef<str> + Send,
{
    let hits: Vec<Option<String>> = words
        .into_par_iter()
        .map(|word| -> Result<Option<String>, SearchError> {
            let word = word.as_ref();
            Ok(try_find_word(grid, word, strategy, limits)?.then(|| word.to_string()))
        })
        .collect::<Result<_, SearchError>>()?;

    let checked = hits.len();
    let found: BTreeSet<String> = hits.into_iter().flatten().collect();
    info!(%strategy, checked, found = found.len(), "parallel batch search done");
    Ok(found)
}
