//! Fixed-width binary vectors and deduplicated output sets.
//!
//! A binary vector of `n` channels is packed into one machine word with
//! channel 0 in the most significant of the `n` low bits, so the vector for
//! integer `m` reads as the `n`-bit binary expansion of `m` (MSB first).
//! With that convention an ascending (sorted) vector is a run of zeros
//! followed by a run of ones, i.e. a word of the form `2^k - 1`.

use crate::error::{Result, SearchError};
use std::fmt;

/// Packed storage for one binary vector.
pub type Word = u64;

/// Largest supported channel count.
pub const MAX_CHANNELS: usize = 24;

/// Validate a channel count for enumeration over all `2^n` binary vectors.
pub fn check_channels(channels: usize) -> Result<()> {
    if channels <= 1 {
        return Err(SearchError::TooFewChannels { channels });
    }
    if channels > MAX_CHANNELS {
        return Err(SearchError::TooManyChannels {
            channels,
            max: MAX_CHANNELS,
        });
    }
    Ok(())
}

/// Bit mask of `channel` in a word of `channels` channels.
#[inline]
pub(crate) fn channel_mask(channel: usize, channels: usize) -> Word {
    1 << (channels - 1 - channel)
}

#[inline]
pub(crate) fn channel_bit(word: Word, channel: usize, channels: usize) -> u8 {
    ((word >> (channels - 1 - channel)) & 1) as u8
}

/// A vector of 0/1 entries of fixed length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinaryVector {
    word: Word,
    len: usize,
}

impl BinaryVector {
    /// The `len`-bit expansion of `index`, most significant bit first.
    pub fn from_index(index: Word, len: usize) -> Result<Self> {
        if len > MAX_CHANNELS {
            return Err(SearchError::TooManyChannels {
                channels: len,
                max: MAX_CHANNELS,
            });
        }
        if len < Word::BITS as usize && index >> len != 0 {
            return Err(SearchError::VectorIndexOutOfRange {
                index,
                channels: len,
            });
        }
        Ok(Self { word: index, len })
    }

    /// Build from explicit entries; any non-zero entry counts as 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if bits.len() > MAX_CHANNELS {
            return Err(SearchError::TooManyChannels {
                channels: bits.len(),
                max: MAX_CHANNELS,
            });
        }
        let word = bits
            .iter()
            .fold(0 as Word, |acc, &b| (acc << 1) | Word::from(b != 0));
        Ok(Self {
            word,
            len: bits.len(),
        })
    }

    pub(crate) fn from_word(word: Word, len: usize) -> Self {
        Self { word, len }
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry at `channel`, or `None` past the end.
    pub fn get(&self, channel: usize) -> Option<u8> {
        (channel < self.len).then(|| channel_bit(self.word, channel, self.len))
    }

    pub fn to_bits(&self) -> Vec<u8> {
        (0..self.len)
            .map(|c| channel_bit(self.word, c, self.len))
            .collect()
    }

    /// Number of ones.
    pub fn weight(&self) -> u32 {
        self.word.count_ones()
    }

    /// All zeros precede all ones.
    pub fn is_sorted(&self) -> bool {
        self.word & self.word.wrapping_add(1) == 0
    }
}

impl fmt::Display for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bits() {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// A deduplicated set of binary vectors of one length, kept in ascending
/// word order so equal sets compare and hash equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutputSet {
    channels: usize,
    words: Vec<Word>,
}

impl OutputSet {
    /// Every binary vector of length `channels`.
    pub fn universe(channels: usize) -> Result<Self> {
        check_channels(channels)?;
        let count: Word = 1 << channels;
        Ok(Self {
            channels,
            words: (0..count).collect(),
        })
    }

    /// Build from arbitrary words; sorts and drops duplicates.
    pub(crate) fn from_words(channels: usize, mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { channels, words }
    }

    /// Image of the set under a word transformation, deduplicated.
    pub(crate) fn map(&self, f: impl Fn(Word) -> Word) -> Self {
        Self::from_words(self.channels, self.words.iter().map(|&w| f(w)).collect())
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn contains(&self, v: &BinaryVector) -> bool {
        v.len() == self.channels && self.words.binary_search(&v.word()).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = BinaryVector> + '_ {
        self.words
            .iter()
            .map(|&w| BinaryVector::from_word(w, self.channels))
    }

    /// Per-channel profile: entry `k` of `profile[c]` counts the vectors of
    /// weight `k` that carry a one on channel `c`. Relabeling channels
    /// permutes the profiles without changing them.
    pub fn channel_profiles(&self) -> Vec<Vec<usize>> {
        let mut profiles = vec![vec![0usize; self.channels + 1]; self.channels];
        for &w in &self.words {
            let weight = w.count_ones() as usize;
            for (c, profile) in profiles.iter_mut().enumerate() {
                if channel_bit(w, c, self.channels) == 1 {
                    profile[weight] += 1;
                }
            }
        }
        profiles
    }

    /// Words of the set after moving each channel `c` to `target[c]`,
    /// in ascending order.
    pub fn relabeled(&self, target: &[usize]) -> Vec<Word> {
        debug_assert_eq!(target.len(), self.channels);
        let n = self.channels;
        let mut out: Vec<Word> = self
            .words
            .iter()
            .map(|&w| {
                target
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| channel_bit(w, c, n) == 1)
                    .fold(0, |acc, (_, &t)| acc | channel_mask(t, n))
            })
            .collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_is_msb_first() {
        let v = BinaryVector::from_index(29, 7).unwrap();
        assert_eq!(v.to_bits(), vec![0, 0, 1, 1, 1, 0, 1]);
        assert_eq!(v.get(2), Some(1));
        assert_eq!(v.get(7), None);
        assert_eq!(v.to_string(), "0011101");
    }

    #[test]
    fn from_index_rejects_wide_values() {
        assert!(matches!(
            BinaryVector::from_index(8, 3),
            Err(SearchError::VectorIndexOutOfRange { index: 8, channels: 3 })
        ));
    }

    #[test]
    fn from_bits_round_trips_index() {
        let v = BinaryVector::from_bits(&[1, 0, 1]).unwrap();
        assert_eq!(v, BinaryVector::from_index(5, 3).unwrap());
        assert_eq!(v.weight(), 2);
    }

    #[test]
    fn sorted_means_zeros_then_ones() {
        for bits in [&[0, 0, 0][..], &[0, 0, 1], &[0, 1, 1], &[1, 1, 1]] {
            assert!(BinaryVector::from_bits(bits).unwrap().is_sorted(), "{bits:?}");
        }
        for bits in [&[1, 0, 0][..], &[0, 1, 0], &[1, 0, 1]] {
            assert!(!BinaryVector::from_bits(bits).unwrap().is_sorted(), "{bits:?}");
        }
    }

    #[test]
    fn universe_enumerates_every_vector() {
        let u = OutputSet::universe(3).unwrap();
        assert_eq!(u.len(), 8);
        let listed: Vec<Vec<u8>> = u.iter().map(|v| v.to_bits()).collect();
        assert_eq!(listed[0], vec![0, 0, 0]);
        assert_eq!(listed[1], vec![0, 0, 1]);
        assert_eq!(listed[6], vec![1, 1, 0]);
    }

    #[test]
    fn universe_checks_channel_count() {
        assert!(matches!(
            OutputSet::universe(1),
            Err(SearchError::TooFewChannels { channels: 1 })
        ));
        assert!(matches!(
            OutputSet::universe(MAX_CHANNELS + 1),
            Err(SearchError::TooManyChannels { .. })
        ));
    }

    #[test]
    fn from_words_dedups() {
        let s = OutputSet::from_words(2, vec![3, 1, 3, 0]);
        assert_eq!(s.words(), &[0, 1, 3]);
        assert!(s.contains(&BinaryVector::from_index(1, 2).unwrap()));
        assert!(!s.contains(&BinaryVector::from_index(2, 2).unwrap()));
    }

    #[test]
    fn relabel_swaps_channels() {
        // ones on channel 1 move to channel 0
        let s = OutputSet::from_words(2, vec![0b01, 0b11]);
        assert_eq!(s.relabeled(&[1, 0]), vec![0b10, 0b11]);
        assert_eq!(s.relabeled(&[0, 1]), s.words().to_vec());
    }

    #[test]
    fn profiles_count_ones_by_weight() {
        let s = OutputSet::from_words(2, vec![0b00, 0b01, 0b11]);
        let p = s.channel_profiles();
        assert_eq!(p[0], vec![0, 0, 1]);
        assert_eq!(p[1], vec![0, 1, 1]);
    }
}
