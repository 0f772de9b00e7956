//! Block and transaction types, consensus serialization, and block hashing.

pub mod block;
pub mod encoding;
pub mod hash;
pub mod outpoint;
pub mod quark;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader};
pub use hash::{merkle_root, quark_hash, sha256, sha256d};
pub use outpoint::OutPoint;
pub use transaction::{Transaction, TxIn, TxOut};
