//! The per-network parameter aggregate.

use std::net::SocketAddr;
use std::sync::Arc;

use athrd_consensus::{CheckpointData, ConsensusParams, Hash256, Network};
use athrd_primitives::Block;

/// Address and key kinds that carry a base58 prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Base58Type::PubkeyAddress => "pubkey_address",
            Base58Type::ScriptAddress => "script_address",
            Base58Type::SecretKey => "secret_key",
            Base58Type::ExtPublicKey => "ext_public_key",
            Base58Type::ExtSecretKey => "ext_secret_key",
            Base58Type::ExtCoinType => "ext_coin_type",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Base58Prefixes([&'static [u8]; 6]);

impl Base58Prefixes {
    pub const fn new(
        pubkey_address: &'static [u8],
        script_address: &'static [u8],
        secret_key: &'static [u8],
        ext_public_key: &'static [u8],
        ext_secret_key: &'static [u8],
        ext_coin_type: &'static [u8],
    ) -> Self {
        Self([
            pubkey_address,
            script_address,
            secret_key,
            ext_public_key,
            ext_secret_key,
            ext_coin_type,
        ])
    }

    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        self.0[kind.index()]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// A compiled-in seed: IPv6 (or IPv4-mapped) address bytes and port.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// A fixed seed as handed to peer discovery.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: u64,
    pub last_seen: i64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NetworkFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Masternode, obfuscation pool and spork constants.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxiliaryParams {
    pub pool_max_transactions: u32,
    pub spork_key: &'static str,
    pub pool_dummy_address: &'static str,
    pub masternode_payments_start: i64,
    pub budget_fee_confirmations: u32,
    pub masternode_count_drift: u32,
}

#[derive(Clone, Debug)]
pub struct ChainParams {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    pub miner_threads: u32,
    pub consensus: ConsensusParams,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: Vec<SeedAddress>,
    pub flags: NetworkFlags,
    pub auxiliary: AuxiliaryParams,
    pub genesis: Block,
    pub checkpoints: Arc<CheckpointData>,
}

impl ChainParams {
    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.consensus.hash_genesis_block
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_indexed_by_kind() {
        let prefixes = Base58Prefixes::new(
            &[23],
            &[8],
            &[43],
            &[4, 136, 178, 30],
            &[4, 136, 173, 228],
            &[128, 0, 0, 119],
        );
        assert_eq!(prefixes.get(Base58Type::PubkeyAddress), &[23]);
        assert_eq!(prefixes.get(Base58Type::SecretKey), &[43]);
        assert_eq!(prefixes.get(Base58Type::ExtCoinType), &[128, 0, 0, 119]);
        let names: Vec<&str> = Base58Type::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[3], "ext_public_key");
    }
}
