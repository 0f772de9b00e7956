//! Hard-coded block checkpoints and the sync progress heuristic built on them.

use crate::constants::{SECONDS_PER_DAY, SIGCHECK_VERIFICATION_FACTOR};
use crate::hash::Hash256;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointError {
    /// Heights must be strictly increasing in declaration order.
    NotIncreasing { height: u32 },
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointError::NotIncreasing { height } => {
                write!(f, "checkpoint at height {height} is out of order")
            }
        }
    }
}

impl std::error::Error for CheckpointError {}

/// The part of a chain tip the progress estimate needs.
#[derive(Clone, Copy, Debug)]
pub struct ChainTip {
    pub chain_tx: u64,
    pub block_time: i64,
}

/// Checkpoints for one network plus the annotations used to estimate sync progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointData {
    checkpoints: Vec<Checkpoint>,
    last_checkpoint_time: i64,
    transactions_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointData {
    pub fn new(
        checkpoints: Vec<Checkpoint>,
        last_checkpoint_time: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        for window in checkpoints.windows(2) {
            if window[0].height >= window[1].height {
                return Err(CheckpointError::NotIncreasing {
                    height: window[1].height,
                });
            }
        }
        Ok(Self {
            checkpoints,
            last_checkpoint_time,
            transactions_last_checkpoint,
            transactions_per_day,
        })
    }

    pub fn lookup(&self, height: u32) -> Option<Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|index| self.checkpoints[index].hash)
    }

    /// A height without a checkpoint has no opinion and is trusted.
    pub fn is_trusted(&self, height: u32, hash: &Hash256) -> bool {
        match self.lookup(height) {
            Some(expected) => expected == *hash,
            None => true,
        }
    }

    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoints
            .last()
            .map(|checkpoint| checkpoint.height)
            .unwrap_or(0)
    }

    /// Newest checkpoint whose block the caller already has.
    pub fn last_checkpoint<F>(&self, mut is_known: F) -> Option<&Checkpoint>
    where
        F: FnMut(&Hash256) -> bool,
    {
        self.checkpoints
            .iter()
            .rev()
            .find(|checkpoint| is_known(&checkpoint.hash))
    }

    /// Rough fraction of total verification work already done at `tip`.
    pub fn guess_verification_progress(
        &self,
        tip: Option<ChainTip>,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let Some(tip) = tip else {
            return 0.0;
        };
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let per_day = self.transactions_per_day;
        let days_since =
            |time: i64| (now.saturating_sub(time)).max(0) as f64 / SECONDS_PER_DAY as f64;

        let (work_before, work_after) = if tip.chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = tip.chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - tip.chain_tx) as f64;
            let expensive_after = days_since(self.last_checkpoint_time) * per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (tip.chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after = days_since(tip.block_time) * per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        if work_before <= 0.0 {
            return 0.0;
        }
        work_before / (work_before + work_after)
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    pub fn transactions_last_checkpoint(&self) -> u64 {
        self.transactions_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
