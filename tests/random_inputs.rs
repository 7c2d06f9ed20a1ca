//! Found networks sort arbitrary values, not just the binary vectors the
//! search inspects.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sortnet_search::{find_sorting_network, render, Comparator, Network};

const TRIALS: usize = 2000;

#[test]
fn found_networks_sort_random_integers() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for channels in 2..=5 {
        let net = find_sorting_network(channels).unwrap();
        for _ in 0..TRIALS {
            let values: Vec<i64> = (0..channels).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(net.apply(&values).unwrap(), expected, "n={channels}");
        }
    }
}

#[test]
fn found_networks_sort_permutations() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let net = find_sorting_network(5).unwrap();
    for _ in 0..TRIALS {
        let mut perm: Vec<usize> = (0..5).collect();
        perm.shuffle(&mut rng);
        assert!(net.sorts(&perm).unwrap(), "{perm:?}");
    }
}

#[test]
fn non_sorting_network_is_caught_by_random_inputs() {
    // Missing the final (1,2) exchange of the four-channel network.
    let net: Network = [(0, 1), (2, 3), (0, 2), (1, 3)]
        .iter()
        .map(|&(a, b)| Comparator::new(a, b).unwrap())
        .collect();
    assert!(!net.is_sorting(4).unwrap());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let failures = (0..TRIALS)
        .filter(|_| {
            let mut perm: Vec<u8> = (0..4).collect();
            perm.shuffle(&mut rng);
            !net.sorts(&perm).unwrap()
        })
        .count();
    assert!(failures > 0);
}

#[test]
fn rendered_program_follows_the_network() {
    let net = find_sorting_network(3).unwrap();
    let lines = render::to_program(&net, "v");
    assert_eq!(lines.len(), net.size());
    for (line, c) in lines.iter().zip(net.iter()) {
        let expected = format!("v.swap({}, {})", c.min_channel(), c.max_channel());
        assert!(line.contains(&expected), "{line}");
    }
}
