/// Tip-state precondition violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TipError {
    /// Aspirate, dispense or drop on channels without a tip
    #[error("No tip mounted on channel(s) {channels:?}")]
    NoTipMounted {
        /// Every offending channel, ascending
        channels: Vec<usize>,
    },

    /// Pick-up on channels that already hold a tip
    #[error("Tip already mounted on channel(s) {channels:?}")]
    TipAlreadyMounted {
        /// Every offending channel, ascending
        channels: Vec<usize>,
    },

    /// The same channel appears twice in one batch
    #[error("Channel {channel} addressed more than once in the same batch")]
    DuplicateChannel {
        /// The repeated channel
        channel: usize,
    },

    /// Channel index beyond the head
    #[error("Channel {channel} out of range for a {channel_count}-channel head")]
    ChannelOutOfRange {
        /// The offending channel
        channel: usize,
        /// Channels on the head
        channel_count: usize,
    },
}
