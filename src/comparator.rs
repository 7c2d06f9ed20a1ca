//! The compare-exchange element.

use crate::bits::{channel_bit, channel_mask, BinaryVector, Word};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair of distinct channels.
///
/// A comparator is *standard* when its first channel is the lower one.
/// Applied to a vector, a standard comparator exchanges the pair unless the
/// first entry is already strictly smaller; a non-standard comparator
/// exchanges only when the first entry is strictly smaller. Either way the
/// smaller value ends up on the lower-indexed channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Comparator {
    a: usize,
    b: usize,
}

impl Comparator {
    pub fn new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(SearchError::SameChannel { channel: a });
        }
        Ok(Self { a, b })
    }

    pub fn channel_a(&self) -> usize {
        self.a
    }

    pub fn channel_b(&self) -> usize {
        self.b
    }

    pub fn min_channel(&self) -> usize {
        self.a.min(self.b)
    }

    pub fn max_channel(&self) -> usize {
        self.a.max(self.b)
    }

    pub fn is_standard(&self) -> bool {
        self.a < self.b
    }

    /// The standard comparator on the same pair of channels.
    pub fn standardized(&self) -> Self {
        Self {
            a: self.min_channel(),
            b: self.max_channel(),
        }
    }

    #[inline]
    fn exchanges<T: Ord + ?Sized>(&self, at_a: &T, at_b: &T) -> bool {
        if at_a < at_b {
            !self.is_standard()
        } else {
            self.is_standard()
        }
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if self.max_channel() >= len {
            return Err(SearchError::out_of_range(self.max_channel(), len));
        }
        Ok(())
    }

    /// Compare-exchange in place.
    pub fn apply_in_place<T: Ord>(&self, values: &mut [T]) -> Result<()> {
        self.check_len(values.len())?;
        if self.exchanges(&values[self.a], &values[self.b]) {
            values.swap(self.a, self.b);
        }
        Ok(())
    }

    /// Compare-exchange on a copy of `values`.
    pub fn apply<T: Ord + Clone>(&self, values: &[T]) -> Result<Vec<T>> {
        let mut out = values.to_vec();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }

    pub fn apply_vector(&self, v: &BinaryVector) -> Result<BinaryVector> {
        self.check_len(v.len())?;
        Ok(BinaryVector::from_word(
            self.apply_word(v.word(), v.len()),
            v.len(),
        ))
    }

    /// Compare-exchange on a packed binary vector. Channels must be in range.
    #[inline]
    pub(crate) fn apply_word(&self, word: Word, channels: usize) -> Word {
        debug_assert!(self.max_channel() < channels);
        let at_a = channel_bit(word, self.a, channels);
        let at_b = channel_bit(word, self.b, channels);
        if at_a != at_b && self.exchanges(&at_a, &at_b) {
            word ^ (channel_mask(self.a, channels) | channel_mask(self.b, channels))
        } else {
            word
        }
    }
}

impl TryFrom<(usize, usize)> for Comparator {
    type Error = SearchError;

    fn try_from((a, b): (usize, usize)) -> Result<Self> {
        Self::new(a, b)
    }
}

impl From<Comparator> for (usize, usize) {
    fn from(c: Comparator) -> Self {
        (c.a, c.b)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

/// Every ordered pair of distinct channels below `channels`, row-major.
pub fn all_comparators(channels: usize) -> Vec<Comparator> {
    (0..channels)
        .flat_map(|a| {
            (0..channels)
                .filter(move |&b| b != a)
                .map(move |b| Comparator { a, b })
        })
        .collect()
}

/// The `n(n-1)/2` standard comparators, by increasing first then second
/// channel. Search results depend on this order.
pub fn standard_comparators(channels: usize) -> Vec<Comparator> {
    all_comparators(channels)
        .into_iter()
        .filter(Comparator::is_standard)
        .collect()
}
