//! Protocol-wide constants shared by the parameter sets.

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const ONE_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Service bit advertised by full nodes.
pub const NODE_NETWORK: u64 = 1;

/// Block version used by every genesis block.
pub const GENESIS_BLOCK_VERSION: i32 = 1;

/// Signature checks are roughly this many times slower than checkpointed blocks.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// Delay between genesis and the start of masternode payments, in seconds.
pub const MASTERNODE_PAYMENTS_DELAY: i64 = 14_400;
