//! Default values shared across the crate.
//!
//! Everything that would otherwise be a hidden process-wide default lives here and is
//! copied into a [`WorklistConfig`](crate::worklist::WorklistConfig) at construction.

// ========================================================================
// Liquid classes
// ========================================================================

/// Default liquid class for general use; safe for simulation and testing
pub const DEFAULT_LIQUID_CLASS: &str = "Water Free Single";

/// Alternative water class without liquid-level detection
pub const WATER_TEST_NO_DETECT: &str = "Water Test No Detect";

// ========================================================================
// Tip types
// ========================================================================

/// Default DiTi type for the fixed channel arm
pub const DEFAULT_DITI_TYPE: &str = "TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 200ul";

// ========================================================================
// Heads
// ========================================================================

/// Channel count of the Fixed Channel Arm (8-channel LiHa)
pub const FCA_CHANNELS: usize = 8;

/// Channel count of the 96-channel Multi-Channel Arm
pub const MCA_CHANNELS: usize = 96;

/// Largest head a tip mask can address (one bit per channel in a `u128`)
pub const MAX_CHANNELS: usize = 128;

// ========================================================================
// Well plate dimensions
// ========================================================================

/// Rows on a 96-well plate
pub const ROWS_96_WELL: u32 = 8;
/// Columns on a 96-well plate
pub const COLS_96_WELL: u32 = 12;

/// Rows on a 384-well plate
pub const ROWS_384_WELL: u32 = 16;
/// Columns on a 384-well plate
pub const COLS_384_WELL: u32 = 24;

/// Single-letter row names stop at Z
pub const MAX_PLATE_ROWS: u32 = 26;
