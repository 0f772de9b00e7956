//! Compact difficulty targets and proof-of-work checks.

pub mod difficulty;
pub mod validation;

pub use difficulty::{compact_to_target, compact_to_u256, hash_meets_target, CompactError};
pub use validation::{check_proof_of_work, PowError};
