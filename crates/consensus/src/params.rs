//! Consensus parameter definitions.

use crate::hash::Hash256;
use crate::money::Amount;

#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub pow_limit: Hash256,
    pub subsidy_halving_interval: i32,
    pub max_reorganization_depth: i32,
    pub majority_enforce_block_upgrade: i32,
    pub majority_reject_block_outdated: i32,
    pub majority_window: i32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub coinbase_maturity: i32,
    pub max_money_out: Amount,
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
}

impl ConsensusParams {
    /// Blocks per difficulty retarget window.
    pub fn interval(&self) -> i64 {
        if self.target_spacing == 0 {
            return 0;
        }
        self.target_timespan / self.target_spacing
    }

    pub fn money_range(&self, value: Amount) -> bool {
        (0..=self.max_money_out).contains(&value)
    }
}

/// Internal byte order of `!0 >> shift` as a 256-bit integer.
pub fn pow_limit_from_shift(shift: u32) -> Hash256 {
    let bits = 256u32.saturating_sub(shift);
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        let low = (i as u32) * 8;
        if low + 8 <= bits {
            *byte = 0xff;
        } else if low < bits {
            *byte = ((1u16 << (bits - low)) - 1) as u8;
        }
    }
    out
}
