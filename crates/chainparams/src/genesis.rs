//! Genesis block construction and self-verification.

use athrd_consensus::{decode_hex, Amount, Hash256, Network};
use athrd_pow::check_proof_of_work;
use athrd_primitives::script::{pay_to_pubkey, push_data, push_script_num};
use athrd_primitives::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};

use crate::error::IntegrityError;

/// Height-proxy number pushed first in every genesis coinbase (`0x1d00ffff`).
pub const COINBASE_SCRIPT_NUMBER: i64 = 486_604_799;
pub const COINBASE_SCRIPT_TAG: i64 = 4;

/// Fixed inputs of a network's genesis block.
#[derive(Clone, Copy, Debug)]
pub struct GenesisInputs {
    pub timestamp: &'static str,
    pub pubkey_hex: &'static str,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: Amount,
}

/// Values the constructed genesis block must reproduce.
#[derive(Clone, Copy, Debug)]
pub struct GenesisExpectation {
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

fn coinbase_script_sig(timestamp: &str) -> Vec<u8> {
    let mut script = Vec::with_capacity(timestamp.len() + 10);
    push_script_num(&mut script, COINBASE_SCRIPT_NUMBER);
    push_script_num(&mut script, COINBASE_SCRIPT_TAG);
    push_data(&mut script, timestamp.as_bytes());
    script
}

/// Builds the single-coinbase genesis block; does not verify it.
pub fn build_genesis_block(
    network: Network,
    inputs: &GenesisInputs,
) -> Result<Block, IntegrityError> {
    let pubkey = decode_hex(inputs.pubkey_hex).map_err(|_| IntegrityError::InvalidConstant {
        network,
        what: "genesis public key",
    })?;

    let coinbase = Transaction {
        version: 1,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig: coinbase_script_sig(inputs.timestamp),
            sequence: u32::MAX,
        }],
        vout: vec![TxOut {
            value: inputs.reward,
            script_pubkey: pay_to_pubkey(&pubkey),
        }],
        lock_time: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version: inputs.version,
            prev_block: [0u8; 32],
            merkle_root: [0u8; 32],
            time: inputs.time,
            bits: inputs.bits,
            nonce: inputs.nonce,
        },
        transactions: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    Ok(block)
}

/// Reuses `base`'s transactions under a new header time, difficulty and nonce.
pub fn rebuild_genesis_block(base: &Block, time: u32, bits: u32, nonce: u32) -> Block {
    let mut block = base.clone();
    block.header.time = time;
    block.header.bits = bits;
    block.header.nonce = nonce;
    block
}

/// Checks merkle root, header hash and proof of work against the expected values.
pub fn verify_genesis_block(
    network: Network,
    block: &Block,
    expected: &GenesisExpectation,
    pow_limit: &Hash256,
) -> Result<(), IntegrityError> {
    let merkle_root = block.compute_merkle_root();
    if merkle_root != expected.merkle_root || block.header.merkle_root != expected.merkle_root {
        return Err(IntegrityError::MerkleRoot {
            network,
            expected: expected.merkle_root,
            actual: merkle_root,
        });
    }

    let hash = block.hash();
    if hash != expected.hash {
        return Err(IntegrityError::GenesisHash {
            network,
            expected: expected.hash,
            actual: hash,
        });
    }

    check_proof_of_work(&hash, block.header.bits, pow_limit)
        .map_err(|reason| IntegrityError::GenesisProofOfWork { network, reason })
}
