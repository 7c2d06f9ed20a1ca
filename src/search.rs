//! Breadth-first search for a sorting network of minimal size.
//!
//! Generation `k` of the frontier holds filters whose networks have exactly
//! `k` comparators. Each round extends every filter by one non-redundant
//! standard comparator, prunes equivalent filters, and stops at the first
//! generation containing a sorting filter. That generation's size is the
//! smallest comparator count this enumeration can reach.

use crate::bits::check_channels;
use crate::error::{Result, SearchError};
use crate::filter::Filter;
use crate::generate::{extend, extend_parallel};
use crate::network::Network;
use crate::prune::{prune, prune_parallel, PruneStrategy};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Tuning knobs for [`search`]. None of them changes the network found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Equivalence used when pruning each generation.
    pub strategy: PruneStrategy,

    /// Frontiers smaller than this are expanded and pruned serially.
    pub min_frontier_for_parallel: usize,

    /// Thread count for a dedicated pool. None uses rayon's global pool.
    pub max_threads: Option<usize>,

    /// Give up once networks of this many comparators have been tried.
    pub max_comparators: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: PruneStrategy::default(),
            min_frontier_for_parallel: 64,
            max_threads: None,
            max_comparators: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: PruneStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_min_frontier_for_parallel(mut self, min: usize) -> Self {
        self.min_frontier_for_parallel = min;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    pub fn with_max_comparators(mut self, limit: usize) -> Self {
        self.max_comparators = Some(limit);
        self
    }
}

/// Bookkeeping for one round of the search.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStats {
    /// Comparator count of every network in this generation.
    pub comparators: usize,
    /// Non-redundant extensions produced before pruning.
    pub candidates: usize,
    /// Filters left after pruning.
    pub frontier: usize,
    pub elapsed: Duration,
}

/// A found network plus how the search got there.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub channels: usize,
    pub network: Network,
    pub generations: Vec<GenerationStats>,
    pub elapsed: Duration,
}

/// Smallest sorting network on `channels` channels, with default settings.
pub fn find_sorting_network(channels: usize) -> Result<Network> {
    Ok(search(channels, &SearchConfig::default())?.network)
}

/// Run the search, on a dedicated pool if `config.max_threads` is set.
pub fn search(channels: usize, config: &SearchConfig) -> Result<SearchOutcome> {
    check_channels(channels)?;
    match config.max_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SearchError::ThreadPool(e.to_string()))?;
            pool.install(|| run(channels, config))
        }
        None => run(channels, config),
    }
}

fn run(channels: usize, config: &SearchConfig) -> Result<SearchOutcome> {
    info!(channels, strategy = ?config.strategy, "searching for sorting network");
    let t_total = Instant::now();
    let mut frontier = vec![Filter::empty(channels)?];
    let mut generations: Vec<GenerationStats> = Vec::new();

    loop {
        let size = generations.len() + 1;
        if let Some(limit) = config.max_comparators {
            if size > limit {
                return Err(SearchError::GenerationLimit { limit });
            }
        }

        let t0 = Instant::now();
        let parallel = frontier.len() >= config.min_frontier_for_parallel;
        let candidates = if parallel {
            extend_parallel(&frontier, channels)?
        } else {
            extend(&frontier, channels)?
        };
        let candidate_count = candidates.len();
        frontier = if parallel {
            prune_parallel(candidates, channels, config.strategy)
        } else {
            prune(candidates, channels, config.strategy)
        };

        let stats = GenerationStats {
            comparators: size,
            candidates: candidate_count,
            frontier: frontier.len(),
            elapsed: t0.elapsed(),
        };
        debug!(
            comparators = stats.comparators,
            candidates = stats.candidates,
            frontier = stats.frontier,
            parallel,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "generation done"
        );
        generations.push(stats);

        if frontier.is_empty() {
            return Err(SearchError::FrontierExhausted {
                generation: size,
                channels,
            });
        }

        if let Some(pos) = frontier.iter().position(Filter::is_sorting) {
            let network = frontier.swap_remove(pos).into_network();
            let elapsed = t_total.elapsed();
            info!(
                channels,
                comparators = network.size(),
                depth = network.depth(),
                elapsed_ms = elapsed.as_millis() as u64,
                "found sorting network"
            );
            return Ok(SearchOutcome {
                channels,
                network,
                generations,
                elapsed,
            });
        }
    }
}
