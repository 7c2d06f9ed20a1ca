//! Search for size-minimal sorting networks.
//!
//! By the zero-one principle a comparator network sorts every input exactly
//! when it sorts every 0/1 vector, so a network on `n` channels can be
//! judged on the `2^n` binary vectors alone. The search tracks, for each
//! candidate network, only the set of distinct binary vectors it can still
//! output (a [`Filter`]). Comparators that merge no outputs are skipped,
//! equivalent filters are pruned, and the first generation containing a
//! filter with `n + 1` outputs yields a network of minimal size.
//!
//! ```no_run
//! use sortnet_search::{find_sorting_network, render};
//!
//! let net = find_sorting_network(4)?;
//! assert_eq!(net.size(), 5);
//! for line in render::to_program(&net, "v") {
//!     println!("{line}");
//! }
//! # Ok::<(), sortnet_search::SearchError>(())
//! ```

pub mod bits;
pub mod comparator;
pub mod error;
pub mod filter;
pub mod generate;
pub mod network;
pub mod prune;
pub mod render;
pub mod search;

pub use bits::{BinaryVector, OutputSet, MAX_CHANNELS};
pub use comparator::{all_comparators, standard_comparators, Comparator};
pub use error::{Result, SearchError};
pub use filter::Filter;
pub use network::Network;
pub use prune::PruneStrategy;
pub use search::{find_sorting_network, search, GenerationStats, SearchConfig, SearchOutcome};
