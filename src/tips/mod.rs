//! # Tip state
//!
//! Tracks which channels of the pipetting head currently hold a tip.
//!
//! Per channel the state machine is
//!
//! ```text
//! EMPTY --pick_up--> LOADED --{aspirate, dispense}*--> LOADED --drop--> EMPTY
//! ```
//!
//! Every method checks all of its channels before changing anything, so a rejected
//! call leaves the state untouched.

mod error;

use log::warn;
use serde::{Deserialize, Serialize};

pub use error::TipError;

/// What a pick-up does on a channel that already holds a tip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipReplacePolicy {
    /// Fail with [`TipError::TipAlreadyMounted`]
    #[default]
    Reject,
    /// Treat the old tip as discarded and mount a new one
    Replace,
}

/// Per-channel "tip mounted" flags for a head with a fixed channel count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipState {
    mounted: Vec<bool>,
    policy: TipReplacePolicy,
}

impl TipState {
    /// All channels empty
    pub fn new(channel_count: usize, policy: TipReplacePolicy) -> Self {
        Self {
            mounted: vec![false; channel_count],
            policy,
        }
    }

    /// Number of channels on the head
    pub fn channel_count(&self) -> usize {
        self.mounted.len()
    }

    /// Active replace policy
    pub fn policy(&self) -> TipReplacePolicy {
        self.policy
    }

    /// Whether `channel` holds a tip; out-of-range channels never do
    pub fn is_mounted(&self, channel: usize) -> bool {
        self.mounted.get(channel).copied().unwrap_or(false)
    }

    /// Channels currently holding a tip, ascending
    pub fn mounted_channels(&self) -> Vec<usize> {
        self.mounted
            .iter()
            .enumerate()
            .filter_map(|(channel, &mounted)| mounted.then_some(channel))
            .collect()
    }

    /// Check range and uniqueness of a channel batch
    pub fn validate_channels(&self, channels: &[usize]) -> Result<(), TipError> {
        let mut seen = vec![false; self.channel_count()];
        for &channel in channels {
            let slot = seen.get_mut(channel).ok_or(TipError::ChannelOutOfRange {
                channel,
                channel_count: self.channel_count(),
            })?;
            if *slot {
                return Err(TipError::DuplicateChannel { channel });
            }
            *slot = true;
        }
        Ok(())
    }

    /// Fail with [`TipError::NoTipMounted`] listing every channel without a tip
    pub fn require_mounted(&self, channels: &[usize]) -> Result<(), TipError> {
        self.validate_channels(channels)?;
        let missing = sorted(channels.iter().copied().filter(|&c| !self.mounted[c]));
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TipError::NoTipMounted { channels: missing })
        }
    }

    /// Mount tips on `channels`.
    ///
    /// Returns the channels whose previous tip was implicitly replaced, which is
    /// always empty under [`TipReplacePolicy::Reject`].
    pub fn pick_up(&mut self, channels: &[usize]) -> Result<Vec<usize>, TipError> {
        self.validate_channels(channels)?;
        let occupied = sorted(channels.iter().copied().filter(|&c| self.mounted[c]));

        if !occupied.is_empty() {
            match self.policy {
                TipReplacePolicy::Reject => {
                    return Err(TipError::TipAlreadyMounted { channels: occupied });
                }
                TipReplacePolicy::Replace => {
                    warn!("Replacing mounted tips on channel(s) {:?}", occupied);
                }
            }
        }

        for &channel in channels {
            self.mounted[channel] = true;
        }
        Ok(occupied)
    }

    /// Eject tips from `channels`
    pub fn drop_tips(&mut self, channels: &[usize]) -> Result<(), TipError> {
        self.require_mounted(channels)?;
        for &channel in channels {
            self.mounted[channel] = false;
        }
        Ok(())
    }
}

fn sorted(channels: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut channels: Vec<usize> = channels.collect();
    channels.sort_unstable();
    channels
}
