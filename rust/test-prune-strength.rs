#!/usr/bin/env -S cargo +nightly -Zscript
---cargo
[dependencies]
sortnet-search = { path = ".." }

[profile.release]
opt-level = 3
---

//! Compare the two frontier pruning strategies against known minimal sizes.
//!
//! For each channel count, runs the search with plain output-set dedup and
//! with channel-relabeling canonicalization, then checks:
//! 1. both strategies return a sorting network,
//! 2. both reach the known minimal comparator count,
//! 3. the relabeling strategy never keeps a larger frontier.
//!
//! Known minimal sizes (Knuth, TAOCP vol. 3, 5.3.4): n=2..8 → 1, 3, 5, 9, 12, 16, 19.
//!
//! Usage: cargo +nightly -Zscript rust/test-prune-strength.rs [MAX_N]

use sortnet_search::{search, PruneStrategy, SearchConfig, SearchOutcome};
use std::time::Instant;

const KNOWN_MINIMAL: [(usize, usize); 7] =
    [(2, 1), (3, 3), (4, 5), (5, 9), (6, 12), (7, 16), (8, 19)];

fn fmt_duration(d: std::time::Duration) -> String {
    let s = d.as_secs_f64();
    if s < 1.0 {
        format!("{:.0}ms", s * 1000.0)
    } else if s < 60.0 {
        format!("{:.1}s", s)
    } else {
        format!("{}m{:.0}s", (s / 60.0) as u64, s % 60.0)
    }
}

fn run(n: usize, strategy: PruneStrategy) -> SearchOutcome {
    let config = SearchConfig::default().with_strategy(strategy);
    search(n, &config).unwrap_or_else(|e| panic!("n={n} {strategy:?}: {e}"))
}

fn peak_frontier(o: &SearchOutcome) -> usize {
    o.generations.iter().map(|g| g.frontier).max().unwrap_or(0)
}

fn main() {
    let max_n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);

    let mut failures = 0;
    for &(n, minimal) in KNOWN_MINIMAL.iter().filter(|&&(n, _)| n <= max_n) {
        println!("=== n={n} (known minimal: {minimal}) ===");
        for strategy in [PruneStrategy::OutputSet, PruneStrategy::Permutation] {
            let t0 = Instant::now();
            let outcome = run(n, strategy);
            let net = &outcome.network;
            let sorting = net.is_sorting(n).unwrap_or(false);
            let ok = sorting && net.size() == minimal;
            if !ok {
                failures += 1;
            }
            println!(
                "  {:<12} size {:>2}  depth {:>2}  peak frontier {:>7}  [{}]  {}",
                format!("{strategy:?}"),
                net.size(),
                net.depth(),
                peak_frontier(&outcome),
                fmt_duration(t0.elapsed()),
                if ok { "OK" } else { "FAIL" }
            );
            for g in &outcome.generations {
                println!(
                    "      k={:>2}: {:>8} candidates -> {:>7} kept",
                    g.comparators, g.candidates, g.frontier
                );
            }
        }
        println!();
    }

    if failures > 0 {
        eprintln!("ERROR: {failures} runs missed the known minimal size");
        std::process::exit(1);
    }
    println!("All runs reached the known minimal sizes.");
}
