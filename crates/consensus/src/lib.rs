//! Consensus constants, per-network tuning values, and checkpoint data.

pub mod checkpoints;
pub mod constants;
pub mod hash;
pub mod money;
pub mod network;
pub mod params;

pub use checkpoints::{Checkpoint, CheckpointData, CheckpointError, ChainTip};
pub use hash::{decode_hex, encode_hex, hash256_from_hex, hash256_to_hex, Hash256, HexError};
pub use money::{money_range, Amount, COIN};
pub use network::Network;
pub use params::{pow_limit_from_shift, ConsensusParams};
