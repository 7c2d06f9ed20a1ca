//! Frontier deduplication.
//!
//! Two filters are interchangeable for the search when their output sets
//! agree, or, under [`PruneStrategy::Permutation`], when one output set is a
//! channel relabeling of the other. Pruning keeps the first filter of each
//! class in frontier order, so the result is deterministic for a given input.
//!
//! Canonical keys under relabeling are the lexicographically least relabeled
//! word list, minimized only over relabelings that order channels by their
//! [`OutputSet::channel_profiles`]. Profiles are invariant under relabeling,
//! so equivalent sets see the same candidate images and get the same key,
//! while ties between equal profiles are the only permutations enumerated.

use crate::bits::{OutputSet, Word};
use crate::filter::Filter;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Equivalence used to collapse a frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PruneStrategy {
    /// Identical output sets only.
    OutputSet,
    /// Output sets equal up to a permutation of channel labels.
    #[default]
    Permutation,
}

/// Key identifying the equivalence class of an output set.
pub fn canonical_key(outputs: &OutputSet, strategy: PruneStrategy) -> Vec<Word> {
    match strategy {
        PruneStrategy::OutputSet => outputs.words().to_vec(),
        PruneStrategy::Permutation => permutation_key(outputs),
    }
}

/// Rearrange `xs` into the next lexicographic permutation. On the last one,
/// reset to ascending order and return false.
fn next_permutation(xs: &mut [usize]) -> bool {
    let Some(i) = xs.windows(2).rposition(|w| w[0] < w[1]) else {
        xs.reverse();
        return false;
    };
    let j = xs
        .iter()
        .rposition(|&x| x > xs[i])
        .unwrap_or(i + 1);
    xs.swap(i, j);
    xs[i + 1..].reverse();
    true
}

fn permutation_key(outputs: &OutputSet) -> Vec<Word> {
    let n = outputs.channels();
    let profiles = outputs.channel_profiles();

    // Channels ordered by profile, then split into runs of equal profile.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| profiles[x].cmp(&profiles[y]).then(x.cmp(&y)));
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for &c in &order {
        let tied = groups
            .last()
            .is_some_and(|g| profiles[g[0]] == profiles[c]);
        if tied {
            if let Some(g) = groups.last_mut() {
                g.push(c);
            }
        } else {
            groups.push(vec![c]);
        }
    }

    let mut target = vec![0usize; n];
    let mut best: Option<Vec<Word>> = None;
    loop {
        for (pos, &c) in groups.iter().flatten().enumerate() {
            target[c] = pos;
        }
        let candidate = outputs.relabeled(&target);
        if best.as_ref().map_or(true, |b| candidate < *b) {
            best = Some(candidate);
        }
        // Odometer over the permutations of each tie group.
        if !groups.iter_mut().any(|g| next_permutation(g)) {
            break;
        }
    }
    best.unwrap_or_default()
}

fn keep_first(frontier: Vec<Filter>, keys: Vec<Vec<Word>>) -> Vec<Filter> {
    let mut seen: HashSet<Vec<Word>> = HashSet::with_capacity(keys.len());
    frontier
        .into_iter()
        .zip(keys)
        .filter_map(|(f, key)| seen.insert(key).then_some(f))
        .collect()
}

/// One representative per equivalence class, first occurrence wins.
pub fn prune(frontier: Vec<Filter>, channels: usize, strategy: PruneStrategy) -> Vec<Filter> {
    debug_assert!(frontier.iter().all(|f| f.channels() == channels));
    let before = frontier.len();
    let keys: Vec<Vec<Word>> = frontier
        .iter()
        .map(|f| canonical_key(f.outputs(), strategy))
        .collect();
    let kept = keep_first(frontier, keys);
    trace!(channels, before, after = kept.len(), ?strategy, "pruned frontier");
    kept
}

/// Same result as [`prune`], with keys computed on the rayon pool.
pub fn prune_parallel(
    frontier: Vec<Filter>,
    channels: usize,
    strategy: PruneStrategy,
) -> Vec<Filter> {
    debug_assert!(frontier.iter().all(|f| f.channels() == channels));
    let before = frontier.len();
    let keys: Vec<Vec<Word>> = frontier
        .par_iter()
        .map(|f| canonical_key(f.outputs(), strategy))
        .collect();
    let kept = keep_first(frontier, keys);
    trace!(channels, before, after = kept.len(), ?strategy, "pruned frontier");
    kept
}
