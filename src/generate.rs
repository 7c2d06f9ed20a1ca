//! Frontier expansion by one comparator.

use crate::bits::check_channels;
use crate::comparator::{standard_comparators, Comparator};
use crate::error::{Result, SearchError};
use crate::filter::Filter;
use rayon::prelude::*;

fn check_frontier(frontier: &[Filter], channels: usize) -> Result<()> {
    check_channels(channels)?;
    match frontier.iter().find(|f| f.channels() < channels) {
        Some(f) => Err(SearchError::out_of_range(channels - 1, f.channels())),
        None => Ok(()),
    }
}

fn children<'a>(f: &'a Filter, comparators: &'a [Comparator]) -> impl Iterator<Item = Filter> + 'a {
    comparators.iter().filter_map(move |&c| f.add_useful(c))
}

/// Every non-redundant extension of every filter by one standard comparator,
/// parent-major in frontier order, then in comparator order.
pub fn extend(frontier: &[Filter], channels: usize) -> Result<Vec<Filter>> {
    check_frontier(frontier, channels)?;
    let comparators = standard_comparators(channels);
    Ok(frontier
        .iter()
        .flat_map(|f| children(f, &comparators))
        .collect())
}

/// Same result as [`extend`], with parents expanded on the rayon pool.
pub fn extend_parallel(frontier: &[Filter], channels: usize) -> Result<Vec<Filter>> {
    check_frontier(frontier, channels)?;
    let comparators = standard_comparators(channels);
    Ok(frontier
        .par_iter()
        .flat_map_iter(|f| children(f, &comparators))
        .collect())
}
