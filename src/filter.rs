//! Search state: a network paired with the binary vectors it can still emit.

use crate::bits::OutputSet;
use crate::comparator::Comparator;
use crate::error::{Result, SearchError};
use crate::network::Network;

/// A network together with its deduplicated image of all binary inputs.
///
/// Only the set of reachable outputs matters for the rest of the search:
/// it decides both which comparators are still useful and whether the
/// network already sorts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    network: Network,
    outputs: OutputSet,
}

impl Filter {
    /// Empty network over `channels` channels; every binary vector reachable.
    pub fn empty(channels: usize) -> Result<Self> {
        Ok(Self {
            network: Network::empty(),
            outputs: OutputSet::universe(channels)?,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    pub fn outputs(&self) -> &OutputSet {
        &self.outputs
    }

    pub fn channels(&self) -> usize {
        self.outputs.channels()
    }

    fn check(&self, c: &Comparator) -> Result<()> {
        if c.max_channel() >= self.channels() {
            return Err(SearchError::out_of_range(c.max_channel(), self.channels()));
        }
        Ok(())
    }

    fn image(&self, c: &Comparator) -> OutputSet {
        let channels = self.channels();
        self.outputs.map(|w| c.apply_word(w, channels))
    }

    /// `c` merges no two reachable outputs, so appending it cannot help.
    pub fn is_redundant(&self, c: &Comparator) -> Result<bool> {
        self.check(c)?;
        Ok(self.image(c).len() == self.outputs.len())
    }

    /// New filter with `c` appended.
    pub fn add(&self, c: Comparator) -> Result<Self> {
        self.check(&c)?;
        Ok(Self {
            network: self.network.append(c),
            outputs: self.image(&c),
        })
    }

    /// `add` for an in-range comparator, or `None` when it is redundant.
    pub(crate) fn add_useful(&self, c: Comparator) -> Option<Self> {
        let outputs = self.image(&c);
        (outputs.len() < self.outputs.len()).then(|| Self {
            network: self.network.append(c),
            outputs,
        })
    }

    /// Only the `channels + 1` sorted vectors remain.
    pub fn is_sorting(&self) -> bool {
        self.outputs.len() == self.channels() + 1
    }
}
