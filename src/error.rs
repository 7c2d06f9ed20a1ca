//! Error types for the sorting-network search

use thiserror::Error;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building or searching comparator networks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Comparator built on a single channel
    #[error("comparator channels must differ (both are {channel})")]
    SameChannel { channel: usize },

    /// Comparator touches a channel the vector or filter does not have
    #[error("channel {channel} out of range for {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Integer too wide for the requested binary-vector length
    #[error("index {index} does not fit in {channels} channels")]
    VectorIndexOutOfRange { index: u64, channels: usize },

    /// `max_channel` asked of a network with no comparators
    #[error("empty network has no maximum channel")]
    EmptyNetwork,

    /// Channel count below 2
    #[error("channel count must be greater than 1 (got {channels})")]
    TooFewChannels { channels: usize },

    /// Channel count does not fit a binary-vector word
    #[error("channel count {channels} exceeds the supported maximum of {max}")]
    TooManyChannels { channels: usize, max: usize },

    /// Frontier emptied without a sorting filter. Always a bug in generation
    /// or pruning, never a property of the input.
    #[error("internal error: frontier exhausted at generation {generation} for {channels} channels")]
    FrontierExhausted { generation: usize, channels: usize },

    /// Worker pool for a bounded thread count could not be started
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),

    /// Configured comparator budget reached before a sorting network appeared
    #[error("no sorting network within {limit} comparators")]
    GenerationLimit { limit: usize },
}

impl SearchError {
    pub fn out_of_range(channel: usize, channels: usize) -> Self {
        SearchError::ChannelOutOfRange { channel, channels }
    }

    /// True for failures that indicate a defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, SearchError::FrontierExhausted { .. })
    }
}
