//! Comparator networks: immutable, append-only sequences of comparators.

use crate::bits::{OutputSet, Word};
use crate::comparator::Comparator;
use crate::error::{Result, SearchError};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// An ordered sequence of comparators, applied left to right.
///
/// Networks are values: [`Network::append`] returns a new network and leaves
/// the receiver unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    comparators: Vec<Comparator>,
}

impl Network {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn append(&self, c: Comparator) -> Self {
        let mut comparators = Vec::with_capacity(self.comparators.len() + 1);
        comparators.extend_from_slice(&self.comparators);
        comparators.push(c);
        Self { comparators }
    }

    pub fn size(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comparator> {
        self.comparators.iter()
    }

    /// Largest channel any comparator touches.
    pub fn max_channel(&self) -> Result<usize> {
        self.comparators
            .iter()
            .map(Comparator::max_channel)
            .max()
            .ok_or(SearchError::EmptyNetwork)
    }

    /// Every comparator is standard (vacuously true when empty).
    pub fn is_standard(&self) -> bool {
        self.comparators.iter().all(Comparator::is_standard)
    }

    fn check_len(&self, len: usize) -> Result<()> {
        match self.max_channel() {
            Ok(max) if max >= len => Err(SearchError::out_of_range(max, len)),
            _ => Ok(()),
        }
    }

    /// Run the network on a copy of `values`.
    pub fn apply<T: Ord + Clone>(&self, values: &[T]) -> Result<Vec<T>> {
        self.check_len(values.len())?;
        let mut out = values.to_vec();
        for c in &self.comparators {
            c.apply_in_place(&mut out)?;
        }
        Ok(out)
    }

    /// Whether the network leaves `values` in ascending order.
    pub fn sorts<T: Ord + Clone>(&self, values: &[T]) -> Result<bool> {
        let out = self.apply(values)?;
        Ok(out.windows(2).all(|w| w[0] <= w[1]))
    }

    /// Images of `inputs`, one per distinct result, in order of first
    /// appearance.
    pub fn outputs<T: Ord + Clone + Hash>(&self, inputs: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
        let mut seen = IndexSet::with_capacity(inputs.len());
        for v in inputs {
            seen.insert(self.apply(v)?);
        }
        Ok(seen.into_iter().collect())
    }

    #[inline]
    pub(crate) fn apply_word(&self, word: Word, channels: usize) -> Word {
        self.comparators
            .iter()
            .fold(word, |w, c| c.apply_word(w, channels))
    }

    /// Distinct images of a set of binary vectors.
    pub fn binary_outputs(&self, inputs: &OutputSet) -> Result<OutputSet> {
        self.check_len(inputs.channels())?;
        let channels = inputs.channels();
        Ok(inputs.map(|w| self.apply_word(w, channels)))
    }

    /// Distinct images of all `2^channels` binary vectors.
    pub fn all_outputs(&self, channels: usize) -> Result<OutputSet> {
        self.binary_outputs(&OutputSet::universe(channels)?)
    }

    /// Zero-one test: the network sorts every binary vector exactly when
    /// only the `channels + 1` sorted vectors remain.
    pub fn is_sorting(&self, channels: usize) -> Result<bool> {
        Ok(self.all_outputs(channels)?.len() == channels + 1)
    }

    /// Greedy critical-path depth.
    pub fn depth(&self) -> usize {
        let wires = self.max_channel().map_or(0, |m| m + 1);
        let mut wire_times = vec![0usize; wires];
        let mut max_depth = 0usize;
        for c in &self.comparators {
            let (i, j) = (c.channel_a(), c.channel_b());
            let t = wire_times[i].max(wire_times[j]) + 1;
            wire_times[i] = t;
            wire_times[j] = t;
            max_depth = max_depth.max(t);
        }
        max_depth
    }

    /// Comparators grouped by the parallel step at which each can run,
    /// preserving the relative order within a step.
    pub fn layers(&self) -> Vec<Vec<Comparator>> {
        let wires = self.max_channel().map_or(0, |m| m + 1);
        let mut wire_times = vec![0usize; wires];
        let mut layers: Vec<Vec<Comparator>> = Vec::new();
        for c in &self.comparators {
            let (i, j) = (c.channel_a(), c.channel_b());
            let t = wire_times[i].max(wire_times[j]);
            wire_times[i] = t + 1;
            wire_times[j] = t + 1;
            if layers.len() <= t {
                layers.push(Vec::new());
            }
            layers[t].push(*c);
        }
        layers
    }
}

impl FromIterator<Comparator> for Network {
    fn from_iter<I: IntoIterator<Item = Comparator>>(iter: I) -> Self {
        Self {
            comparators: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a Comparator;
    type IntoIter = std::slice::Iter<'a, Comparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, c) in self.comparators.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
