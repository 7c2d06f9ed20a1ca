//! End-to-end searches against known minimal network sizes.

use sortnet_search::{
    find_sorting_network, search, standard_comparators, Comparator, Filter, Network,
    PruneStrategy, SearchConfig,
};

fn net(pairs: &[(usize, usize)]) -> Network {
    pairs
        .iter()
        .map(|&(a, b)| Comparator::new(a, b).unwrap())
        .collect()
}

/// Every standard network with exactly `size` comparators on `channels`.
fn all_networks(channels: usize, size: usize) -> Vec<Network> {
    let comparators = standard_comparators(channels);
    let mut nets = vec![Network::empty()];
    for _ in 0..size {
        nets = nets
            .iter()
            .flat_map(|n| comparators.iter().map(move |&c| n.append(c)))
            .collect();
    }
    nets
}

#[test]
fn two_channel_scenario() {
    let f = Filter::empty(2).unwrap();
    assert_eq!(f.outputs().len(), 4);
    let g = f.add(Comparator::new(0, 1).unwrap()).unwrap();
    assert_eq!(g.outputs().len(), 3);
    assert!(g.is_sorting());
    assert_eq!(find_sorting_network(2).unwrap(), net(&[(0, 1)]));
}

#[test]
fn three_channel_scenario() {
    let found = find_sorting_network(3).unwrap();
    assert_eq!(found, net(&[(0, 1), (0, 2), (1, 2)]));
    assert!(found.is_sorting(3).unwrap());
}

#[test]
fn four_channels_need_five_comparators() {
    let found = find_sorting_network(4).unwrap();
    assert_eq!(found.size(), 5);
    assert!(found.is_standard());
    assert!(found.is_sorting(4).unwrap());
}

#[test]
fn five_channels_need_nine_comparators() {
    let found = find_sorting_network(5).unwrap();
    assert_eq!(found.size(), 9);
    assert!(found.is_sorting(5).unwrap());
}

#[test]
#[ignore = "slow outside release builds"]
fn six_channels_need_twelve_comparators() {
    let found = find_sorting_network(6).unwrap();
    assert_eq!(found.size(), 12);
    assert!(found.is_sorting(6).unwrap());
}

#[test]
#[ignore = "slow outside release builds"]
fn five_channels_without_relabeling() {
    let config = SearchConfig::default().with_strategy(PruneStrategy::OutputSet);
    let outcome = search(5, &config).unwrap();
    assert_eq!(outcome.network.size(), 9);
}

#[test]
fn no_smaller_network_sorts() {
    for (channels, minimal) in [(3, 3), (4, 5)] {
        for candidate in all_networks(channels, minimal - 1) {
            assert!(
                !candidate.is_sorting(channels).unwrap(),
                "{candidate} sorts {channels} channels"
            );
        }
    }
}

#[test]
fn strategies_agree_on_size() {
    for channels in 2..=4 {
        let weak = search(
            channels,
            &SearchConfig::default().with_strategy(PruneStrategy::OutputSet),
        )
        .unwrap();
        let strong = search(
            channels,
            &SearchConfig::default().with_strategy(PruneStrategy::Permutation),
        )
        .unwrap();
        assert_eq!(weak.network.size(), strong.network.size(), "n={channels}");
        assert!(weak.network.is_sorting(channels).unwrap());
    }
}

#[test]
fn relabeling_shrinks_the_frontier() {
    let weak = search(
        4,
        &SearchConfig::default().with_strategy(PruneStrategy::OutputSet),
    )
    .unwrap();
    let strong = search(4, &SearchConfig::default()).unwrap();
    let weak_total: usize = weak.generations.iter().map(|g| g.frontier).sum();
    let strong_total: usize = strong.generations.iter().map(|g| g.frontier).sum();
    assert!(strong_total < weak_total);
}

#[test]
fn repeated_runs_are_identical() {
    for channels in [4, 5] {
        let first = find_sorting_network(channels).unwrap();
        let second = find_sorting_network(channels).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn parallel_settings_do_not_change_the_result() {
    let serial = SearchConfig::default().with_min_frontier_for_parallel(usize::MAX);
    let eager = SearchConfig::default()
        .with_min_frontier_for_parallel(1)
        .with_max_threads(4);
    for channels in [4, 5] {
        assert_eq!(
            search(channels, &serial).unwrap().network,
            search(channels, &eager).unwrap().network
        );
    }
}
