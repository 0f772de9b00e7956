//! Human and JSON summaries of a parameter set.

use std::fmt::Write;

use athrd_chainparams::{Base58Type, ChainParams};
use athrd_consensus::{encode_hex, hash256_to_hex};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParamsReport {
    pub network: &'static str,
    pub message_start: String,
    pub default_port: u16,
    pub miner_threads: u32,
    pub alert_pub_key: String,
    pub genesis: GenesisReport,
    pub consensus: ConsensusReport,
    pub base58_prefixes: Vec<PrefixReport>,
    pub flags: FlagsReport,
    pub auxiliary: AuxiliaryReport,
    pub checkpoints: CheckpointsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeds: Option<SeedsReport>,
}

#[derive(Debug, Serialize)]
pub struct GenesisReport {
    pub hash: String,
    pub merkle_root: String,
    pub version: i32,
    pub time: u32,
    pub bits: String,
    pub nonce: u32,
}

#[derive(Debug, Serialize)]
pub struct ConsensusReport {
    pub pow_limit: String,
    pub subsidy_halving_interval: i32,
    pub max_reorganization_depth: i32,
    pub majority_enforce_block_upgrade: i32,
    pub majority_reject_block_outdated: i32,
    pub majority_window: i32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub interval: i64,
    pub coinbase_maturity: i32,
    pub max_money_out: i64,
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
}

#[derive(Debug, Serialize)]
pub struct PrefixReport {
    pub kind: &'static str,
    pub prefix: String,
}

#[derive(Debug, Serialize)]
pub struct FlagsReport {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

#[derive(Debug, Serialize)]
pub struct AuxiliaryReport {
    pub pool_max_transactions: u32,
    pub spork_key: &'static str,
    pub pool_dummy_address: &'static str,
    pub masternode_payments_start: i64,
    pub budget_fee_confirmations: u32,
    pub masternode_count_drift: u32,
}

#[derive(Debug, Serialize)]
pub struct CheckpointsReport {
    pub count: usize,
    pub total_blocks_estimate: u32,
    pub last_checkpoint_time: i64,
    pub transactions_last_checkpoint: u64,
    pub transactions_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<CheckpointEntry>>,
}

#[derive(Debug, Serialize)]
pub struct CheckpointEntry {
    pub height: u32,
    pub hash: String,
}

#[derive(Debug, Serialize)]
pub struct SeedsReport {
    pub dns: Vec<DnsSeedEntry>,
    pub fixed: Vec<FixedSeedEntry>,
}

#[derive(Debug, Serialize)]
pub struct DnsSeedEntry {
    pub name: &'static str,
    pub host: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FixedSeedEntry {
    pub addr: String,
    pub services: u64,
    pub last_seen: i64,
}

impl ParamsReport {
    pub fn new(params: &ChainParams, include_checkpoints: bool, include_seeds: bool) -> Self {
        let consensus = &params.consensus;
        let header = &params.genesis.header;
        let flags = &params.flags;
        let auxiliary = &params.auxiliary;
        let checkpoints = &params.checkpoints;

        Self {
            network: params.name(),
            message_start: encode_hex(&params.message_start),
            default_port: params.default_port,
            miner_threads: params.miner_threads,
            alert_pub_key: encode_hex(&params.alert_pub_key),
            genesis: GenesisReport {
                hash: hash256_to_hex(&params.genesis_hash()),
                merkle_root: hash256_to_hex(&header.merkle_root),
                version: header.version,
                time: header.time,
                bits: format!("{:08x}", header.bits),
                nonce: header.nonce,
            },
            consensus: ConsensusReport {
                pow_limit: hash256_to_hex(&consensus.pow_limit),
                subsidy_halving_interval: consensus.subsidy_halving_interval,
                max_reorganization_depth: consensus.max_reorganization_depth,
                majority_enforce_block_upgrade: consensus.majority_enforce_block_upgrade,
                majority_reject_block_outdated: consensus.majority_reject_block_outdated,
                majority_window: consensus.majority_window,
                target_timespan: consensus.target_timespan,
                target_spacing: consensus.target_spacing,
                interval: consensus.interval(),
                coinbase_maturity: consensus.coinbase_maturity,
                max_money_out: consensus.max_money_out,
                last_pow_block: consensus.last_pow_block,
                modifier_update_block: consensus.modifier_update_block,
            },
            base58_prefixes: Base58Type::ALL
                .iter()
                .map(|kind| PrefixReport {
                    kind: kind.name(),
                    prefix: encode_hex(params.base58_prefix(*kind)),
                })
                .collect(),
            flags: FlagsReport {
                mining_requires_peers: flags.mining_requires_peers,
                allow_min_difficulty_blocks: flags.allow_min_difficulty_blocks,
                default_consistency_checks: flags.default_consistency_checks,
                require_standard: flags.require_standard,
                mine_blocks_on_demand: flags.mine_blocks_on_demand,
                skip_proof_of_work_check: flags.skip_proof_of_work_check,
                testnet_to_be_deprecated_field_rpc: flags.testnet_to_be_deprecated_field_rpc,
                headers_first_syncing_active: flags.headers_first_syncing_active,
            },
            auxiliary: AuxiliaryReport {
                pool_max_transactions: auxiliary.pool_max_transactions,
                spork_key: auxiliary.spork_key,
                pool_dummy_address: auxiliary.pool_dummy_address,
                masternode_payments_start: auxiliary.masternode_payments_start,
                budget_fee_confirmations: auxiliary.budget_fee_confirmations,
                masternode_count_drift: auxiliary.masternode_count_drift,
            },
            checkpoints: CheckpointsReport {
                count: checkpoints.len(),
                total_blocks_estimate: checkpoints.total_blocks_estimate(),
                last_checkpoint_time: checkpoints.last_checkpoint_time(),
                transactions_last_checkpoint: checkpoints.transactions_last_checkpoint(),
                transactions_per_day: checkpoints.transactions_per_day(),
                entries: include_checkpoints.then(|| {
                    checkpoints
                        .iter()
                        .map(|checkpoint| CheckpointEntry {
                            height: checkpoint.height,
                            hash: hash256_to_hex(&checkpoint.hash),
                        })
                        .collect()
                }),
            },
            seeds: include_seeds.then(|| SeedsReport {
                dns: params
                    .dns_seeds
                    .iter()
                    .map(|seed| DnsSeedEntry {
                        name: seed.name,
                        host: seed.host,
                    })
                    .collect(),
                fixed: params
                    .fixed_seeds
                    .iter()
                    .map(|seed| FixedSeedEntry {
                        addr: seed.addr.to_string(),
                        services: seed.services,
                        last_seen: seed.last_seen,
                    })
                    .collect(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "network: {}", self.network);
        let _ = writeln!(out, "message start: {}", self.message_start);
        let _ = writeln!(out, "default port: {}", self.default_port);
        let _ = writeln!(out, "miner threads: {}", self.miner_threads);

        let genesis = &self.genesis;
        let _ = writeln!(out, "genesis hash: {}", genesis.hash);
        let _ = writeln!(out, "genesis merkle root: {}", genesis.merkle_root);
        let _ = writeln!(
            out,
            "genesis header: version={} time={} bits={} nonce={}",
            genesis.version, genesis.time, genesis.bits, genesis.nonce
        );

        let consensus = &self.consensus;
        let _ = writeln!(out, "pow limit: {}", consensus.pow_limit);
        let _ = writeln!(
            out,
            "subsidy halving interval: {}",
            consensus.subsidy_halving_interval
        );
        let _ = writeln!(
            out,
            "majorities: enforce={} reject={} window={}",
            consensus.majority_enforce_block_upgrade,
            consensus.majority_reject_block_outdated,
            consensus.majority_window
        );
        let _ = writeln!(
            out,
            "timing: timespan={}s spacing={}s interval={}",
            consensus.target_timespan, consensus.target_spacing, consensus.interval
        );
        let _ = writeln!(
            out,
            "maturity: {} max reorg depth: {}",
            consensus.coinbase_maturity, consensus.max_reorganization_depth
        );
        let _ = writeln!(out, "max money out: {}", consensus.max_money_out);
        let _ = writeln!(
            out,
            "last pow block: {} modifier update block: {}",
            consensus.last_pow_block, consensus.modifier_update_block
        );

        for prefix in &self.base58_prefixes {
            let _ = writeln!(out, "prefix {}: {}", prefix.kind, prefix.prefix);
        }

        let flags = &self.flags;
        let _ = writeln!(
            out,
            "flags: mining_requires_peers={} allow_min_difficulty_blocks={} default_consistency_checks={} require_standard={}",
            flags.mining_requires_peers,
            flags.allow_min_difficulty_blocks,
            flags.default_consistency_checks,
            flags.require_standard
        );
        let _ = writeln!(
            out,
            "flags: mine_blocks_on_demand={} skip_proof_of_work_check={} testnet_to_be_deprecated_field_rpc={} headers_first_syncing_active={}",
            flags.mine_blocks_on_demand,
            flags.skip_proof_of_work_check,
            flags.testnet_to_be_deprecated_field_rpc,
            flags.headers_first_syncing_active
        );

        let auxiliary = &self.auxiliary;
        let _ = writeln!(
            out,
            "pool: max transactions={} dummy address={}",
            auxiliary.pool_max_transactions, auxiliary.pool_dummy_address
        );
        let _ = writeln!(out, "spork key: {}", auxiliary.spork_key);
        let _ = writeln!(
            out,
            "masternodes: payments start={} count drift={} budget fee confirmations={}",
            auxiliary.masternode_payments_start,
            auxiliary.masternode_count_drift,
            auxiliary.budget_fee_confirmations
        );

        let checkpoints = &self.checkpoints;
        let _ = writeln!(
            out,
            "checkpoints: count={} newest height={} last time={} transactions={} per day={}",
            checkpoints.count,
            checkpoints.total_blocks_estimate,
            checkpoints.last_checkpoint_time,
            checkpoints.transactions_last_checkpoint,
            checkpoints.transactions_per_day
        );
        if let Some(entries) = &checkpoints.entries {
            for entry in entries {
                let _ = writeln!(out, "  checkpoint {}: {}", entry.height, entry.hash);
            }
        }

        if let Some(seeds) = &self.seeds {
            let _ = writeln!(out, "dns seeds: {}", seeds.dns.len());
            for seed in &seeds.dns {
                let _ = writeln!(out, "  {} ({})", seed.host, seed.name);
            }
            let _ = writeln!(out, "fixed seeds: {}", seeds.fixed.len());
            for seed in &seeds.fixed {
                let _ = writeln!(out, "  {} last seen {}", seed.addr, seed.last_seen);
            }
        }
        out
    }
}
