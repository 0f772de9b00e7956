//! Hard-coded parameter sets for every network.
//!
//! Testnet is built from Main, Regtest from Testnet and UnitTest from Main,
//! each by copying the finished base value and overwriting what differs.

use std::sync::Arc;

use athrd_consensus::constants::{GENESIS_BLOCK_VERSION, MASTERNODE_PAYMENTS_DELAY};
use athrd_consensus::{
    decode_hex, hash256_from_hex, pow_limit_from_shift, Checkpoint, CheckpointData,
    CheckpointError, ConsensusParams, Hash256, Network, COIN,
};

use crate::error::IntegrityError;
use crate::genesis::{
    build_genesis_block, rebuild_genesis_block, verify_genesis_block, GenesisExpectation,
    GenesisInputs,
};
use crate::params::{AuxiliaryParams, Base58Prefixes, ChainParams, NetworkFlags};
use crate::seeds::{fixed_seeds, MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS, TEST_FIXED_SEEDS};

const GENESIS_TIMESTAMP: &str =
    "Poloniex exchange have launched their official trading app for iOS and Android";
const GENESIS_PUBKEY: &str = "042f8d34b56ecc2833ab4117a9a1d60cc16f2bdbaea320de00a4d32d0e1ca63466127d844f8a633817f1cab201f86aeb572284351fd0757dbf65cc6aad7fae8f76";
const GENESIS_MERKLE_ROOT: &str =
    "6852e9739b92effcd33d6c5f6d94fa672471093fbedfee3769028780876e62f9";
const GENESIS_BITS: u32 = 0x1e0f_fff0;

const MAIN_GENESIS_HASH: &str =
    "000009411fe9341392a7fc47bdb5759bcfb7e2053e2172b2a96f33bf61736708";
const TEST_GENESIS_HASH: &str =
    "0000003c94d37c93846cd80ea6c1735c0cd0aa43de717445c81ad41eec76941f";
const REGTEST_GENESIS_HASH: &str =
    "0000069d9eb20f6108746dc243e56e5876c2ac00e524c8f3ecd81e281fc542c7";

const MAIN_ALERT_KEY: &str = "048215a5cda2785aa066404c7c1097e13e73782d6d06cbbd44e2f7d14cf56ee4e433dc16b107e4f7dd3a0c7fb86cd42316c12de132122dbb9522f0ec55ebfa7dd0";
const TEST_ALERT_KEY: &str = "04e883f82fc706ef0e70e34a64bfd82790ae942f74f18646484e4bc93026714f3492193871952d67198e101116f6112844afea52e69b0112061534580c37b07d81";

const MAIN_SPORK_KEY: &str = "049a19348282ff6c354f769301a702dabb1c8d2e46e1af12b15ed681204b034bc7eee1610e4af8a6821e4f064049d0883d5ace467ac50f063633e22719c1c2e297";
const TEST_SPORK_KEY: &str = "040d285ec5c08935c66562107d3752e8cff58248f9ba6d6dfe9d803cad0128dab507644fc44e9dfecb373b2ea23b069c8bef5b9966b73a669463cf2a14821bbec1";

const POOL_DUMMY_ADDRESS: &str = "AHcqNBVGqc9XXuzvSbVj4ffPDNfefDG2wy";

const MAIN_CHECKPOINTS: [(u32, &str); 4] = [
    (0, MAIN_GENESIS_HASH),
    (
        18_391,
        "2da47f4141966341d4e11e10dcc8de720d5873055136658fbc6fe2ec6f1a8841",
    ),
    (
        51_652,
        "69168607a69c6dc624722270818c3db58f7016d05560e1c90bbe7b5dfaf8a265",
    ),
    (
        100_000,
        "45b0db4ed7a31fbff9980c879fd621c51fb873b82c975972bc38d9d67355a86f",
    ),
];
const TEST_CHECKPOINTS: [(u32, &str); 1] = [(0, TEST_GENESIS_HASH)];
const REGTEST_CHECKPOINTS: [(u32, &str); 1] = [(0, REGTEST_GENESIS_HASH)];

fn hash_constant(
    network: Network,
    hex: &str,
    what: &'static str,
) -> Result<Hash256, IntegrityError> {
    hash256_from_hex(hex).map_err(|_| IntegrityError::InvalidConstant { network, what })
}

fn checkpoint_data(
    network: Network,
    genesis_hash: &Hash256,
    entries: &[(u32, &str)],
    last_checkpoint_time: i64,
    transactions_last_checkpoint: u64,
    transactions_per_day: f64,
) -> Result<CheckpointData, IntegrityError> {
    let checkpoints = entries
        .iter()
        .map(|(height, hex)| {
            Ok(Checkpoint {
                height: *height,
                hash: hash_constant(network, hex, "checkpoint hash")?,
            })
        })
        .collect::<Result<Vec<_>, IntegrityError>>()?;

    let data = CheckpointData::new(
        checkpoints,
        last_checkpoint_time,
        transactions_last_checkpoint,
        transactions_per_day,
    )
    .map_err(|err| match err {
        CheckpointError::NotIncreasing { height } => {
            IntegrityError::CheckpointOrder { network, height }
        }
    })?;

    check_genesis_checkpoint(network, &data, genesis_hash)?;
    Ok(data)
}

/// A height-0 checkpoint, when present, must name the genesis block.
pub fn check_genesis_checkpoint(
    network: Network,
    data: &CheckpointData,
    genesis_hash: &Hash256,
) -> Result<(), IntegrityError> {
    match data.lookup(0) {
        Some(actual) if actual != *genesis_hash => Err(IntegrityError::CheckpointGenesis {
            network,
            expected: *genesis_hash,
            actual,
        }),
        _ => Ok(()),
    }
}

fn genesis_expectation(
    network: Network,
    hash_hex: &str,
) -> Result<GenesisExpectation, IntegrityError> {
    Ok(GenesisExpectation {
        hash: hash_constant(network, hash_hex, "genesis hash")?,
        merkle_root: hash_constant(network, GENESIS_MERKLE_ROOT, "genesis merkle root")?,
    })
}

fn decode_key(network: Network, hex: &str, what: &'static str) -> Result<Vec<u8>, IntegrityError> {
    decode_hex(hex).map_err(|_| IntegrityError::InvalidConstant { network, what })
}

pub fn main_params() -> Result<ChainParams, IntegrityError> {
    let network = Network::Main;
    let consensus = ConsensusParams {
        hash_genesis_block: [0u8; 32],
        pow_limit: pow_limit_from_shift(16),
        subsidy_halving_interval: 1_050_000,
        max_reorganization_depth: 100,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        target_timespan: 60,
        target_spacing: 60,
        coinbase_maturity: 30,
        max_money_out: 100_000_000 * COIN,
        last_pow_block: 300,
        modifier_update_block: 1,
    };

    let inputs = GenesisInputs {
        timestamp: GENESIS_TIMESTAMP,
        pubkey_hex: GENESIS_PUBKEY,
        version: GENESIS_BLOCK_VERSION,
        time: 1_538_474_400,
        bits: GENESIS_BITS,
        nonce: 846_894,
        reward: 0,
    };
    let genesis = build_genesis_block(network, &inputs)?;
    let expected = genesis_expectation(network, MAIN_GENESIS_HASH)?;
    verify_genesis_block(network, &genesis, &expected, &consensus.pow_limit)?;

    let masternode_payments_start = i64::from(genesis.header.time) + MASTERNODE_PAYMENTS_DELAY;
    let checkpoints = checkpoint_data(
        network,
        &expected.hash,
        &MAIN_CHECKPOINTS,
        1_544_528_689,
        218_561,
        2_000.0,
    )?;

    Ok(ChainParams {
        network,
        message_start: [0xac, 0x2d, 0xf1, 0x05],
        alert_pub_key: decode_key(network, MAIN_ALERT_KEY, "alert public key")?,
        default_port: 23_854,
        miner_threads: 0,
        consensus: ConsensusParams {
            hash_genesis_block: expected.hash,
            ..consensus
        },
        base58_prefixes: Base58Prefixes::new(
            &[23],
            &[8],
            &[43],
            &[0x04, 0x88, 0xb2, 0x1e],
            &[0x04, 0x88, 0xad, 0xe4],
            &[0x80, 0x00, 0x00, 0x77],
        ),
        dns_seeds: &MAIN_DNS_SEEDS,
        fixed_seeds: fixed_seeds(&MAIN_FIXED_SEEDS),
        flags: NetworkFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        auxiliary: AuxiliaryParams {
            pool_max_transactions: 3,
            spork_key: MAIN_SPORK_KEY,
            pool_dummy_address: POOL_DUMMY_ADDRESS,
            masternode_payments_start,
            budget_fee_confirmations: 6,
            masternode_count_drift: 20,
        },
        genesis,
        checkpoints: Arc::new(checkpoints),
    })
}

pub fn testnet_params(main: &ChainParams) -> Result<ChainParams, IntegrityError> {
    let network = Network::Testnet;
    let mut params = main.clone();
    params.network = network;
    params.message_start = [0xad, 0x2e, 0xf2, 0x06];
    params.alert_pub_key = decode_key(network, TEST_ALERT_KEY, "alert public key")?;
    params.default_port = 24_854;
    params.miner_threads = 0;

    let consensus = &mut params.consensus;
    consensus.majority_enforce_block_upgrade = 51;
    consensus.majority_reject_block_outdated = 75;
    consensus.majority_window = 100;
    consensus.target_timespan = 60;
    consensus.target_spacing = 60;
    consensus.last_pow_block = 20_100;
    consensus.coinbase_maturity = 15;
    consensus.modifier_update_block = 1;
    consensus.max_money_out = 100_000_000 * COIN;

    params.genesis =
        rebuild_genesis_block(&main.genesis, 1_538_474_401, main.genesis.header.bits, 454_734);
    let expected = genesis_expectation(network, TEST_GENESIS_HASH)?;
    verify_genesis_block(network, &params.genesis, &expected, &params.consensus.pow_limit)?;
    params.consensus.hash_genesis_block = expected.hash;

    params.dns_seeds = &[];
    params.fixed_seeds = fixed_seeds(&TEST_FIXED_SEEDS);
    params.base58_prefixes = Base58Prefixes::new(
        &[83],
        &[13],
        &[105],
        &[0x04, 0x35, 0x87, 0xcf],
        &[0x04, 0x35, 0x83, 0x94],
        &[0x80, 0x00, 0x00, 0x01],
    );

    params.flags.mining_requires_peers = true;
    params.flags.allow_min_difficulty_blocks = false;
    params.flags.default_consistency_checks = false;
    params.flags.require_standard = false;
    params.flags.mine_blocks_on_demand = false;
    params.flags.testnet_to_be_deprecated_field_rpc = true;

    params.auxiliary = AuxiliaryParams {
        pool_max_transactions: 2,
        spork_key: TEST_SPORK_KEY,
        pool_dummy_address: POOL_DUMMY_ADDRESS,
        masternode_payments_start: i64::from(params.genesis.header.time)
            + MASTERNODE_PAYMENTS_DELAY,
        budget_fee_confirmations: 3,
        masternode_count_drift: 4,
    };

    params.checkpoints = Arc::new(checkpoint_data(
        network,
        &expected.hash,
        &TEST_CHECKPOINTS,
        1_538_474_401,
        0,
        250.0,
    )?);
    Ok(params)
}

/// Regtest keeps Testnet's masternode payment start rather than recomputing it.
pub fn regtest_params(testnet: &ChainParams) -> Result<ChainParams, IntegrityError> {
    let network = Network::Regtest;
    let mut params = testnet.clone();
    params.network = network;
    params.message_start = [0xa1, 0x2f, 0xa2, 0x07];
    params.miner_threads = 1;
    params.default_port = 25_854;

    let consensus = &mut params.consensus;
    consensus.subsidy_halving_interval = 150;
    consensus.majority_enforce_block_upgrade = 750;
    consensus.majority_reject_block_outdated = 950;
    consensus.majority_window = 1_000;
    consensus.target_timespan = 24 * 60 * 60;
    consensus.target_spacing = 60;
    consensus.pow_limit = pow_limit_from_shift(1);

    params.genesis = rebuild_genesis_block(&testnet.genesis, 1_538_474_402, GENESIS_BITS, 330_547);
    let expected = genesis_expectation(network, REGTEST_GENESIS_HASH)?;
    verify_genesis_block(network, &params.genesis, &expected, &params.consensus.pow_limit)?;
    params.consensus.hash_genesis_block = expected.hash;

    params.fixed_seeds.clear();
    params.dns_seeds = &[];

    params.flags.mining_requires_peers = false;
    params.flags.allow_min_difficulty_blocks = true;
    params.flags.default_consistency_checks = true;
    params.flags.require_standard = false;
    params.flags.mine_blocks_on_demand = true;
    params.flags.testnet_to_be_deprecated_field_rpc = false;

    params.checkpoints = Arc::new(checkpoint_data(
        network,
        &expected.hash,
        &REGTEST_CHECKPOINTS,
        1_538_474_402,
        0,
        100.0,
    )?);
    Ok(params)
}

/// UnitTest shares Main's checkpoint registry instead of copying it.
pub fn unit_test_params(main: &ChainParams) -> Result<ChainParams, IntegrityError> {
    let mut params = main.clone();
    params.network = Network::UnitTest;
    params.default_port = 26_854;
    params.fixed_seeds.clear();
    params.dns_seeds = &[];

    params.flags.mining_requires_peers = false;
    params.flags.default_consistency_checks = true;
    params.flags.allow_min_difficulty_blocks = false;
    params.flags.mine_blocks_on_demand = true;

    check_genesis_checkpoint(
        Network::UnitTest,
        &params.checkpoints,
        &params.consensus.hash_genesis_block,
    )?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use athrd_consensus::hash256_to_hex;

    #[test]
    fn main_matches_published_constants() {
        let main = main_params().expect("main");
        assert_eq!(hash256_to_hex(&main.genesis_hash()), MAIN_GENESIS_HASH);
        assert_eq!(main.genesis.hash(), main.genesis_hash());
        assert_eq!(main.consensus.interval(), 1);
        assert_eq!(main.alert_pub_key.len(), 65);
        assert_eq!(main.dns_seeds.len(), 5);
        assert_eq!(main.auxiliary.masternode_payments_start, 1_538_474_400 + 14_400);
        assert_eq!(main.checkpoints.len(), 4);
        assert_eq!(main.checkpoints.total_blocks_estimate(), 100_000);
    }

    #[test]
    fn testnet_overrides_main() {
        let main = main_params().expect("main");
        let test = testnet_params(&main).expect("testnet");
        assert_eq!(hash256_to_hex(&test.genesis_hash()), TEST_GENESIS_HASH);
        assert_eq!(test.genesis.transactions, main.genesis.transactions);
        assert_eq!(test.consensus.subsidy_halving_interval, 1_050_000);
        assert_eq!(test.consensus.pow_limit, main.consensus.pow_limit);
        assert_eq!(test.consensus.coinbase_maturity, 15);
        assert!(test.dns_seeds.is_empty());
        assert_eq!(test.auxiliary.masternode_payments_start, 1_538_474_401 + 14_400);
        assert_eq!(test.auxiliary.pool_dummy_address, main.auxiliary.pool_dummy_address);
        assert!(test.flags.testnet_to_be_deprecated_field_rpc);
        assert!(!test.flags.require_standard);
        assert_eq!(test.checkpoints.transactions_per_day(), 250.0);
    }

    #[test]
    fn regtest_overrides_testnet() {
        let main = main_params().expect("main");
        let test = testnet_params(&main).expect("testnet");
        let regtest = regtest_params(&test).expect("regtest");
        assert_eq!(hash256_to_hex(&regtest.genesis_hash()), REGTEST_GENESIS_HASH);
        assert_eq!(regtest.consensus.subsidy_halving_interval, 150);
        assert_eq!(regtest.consensus.interval(), 1_440);
        assert_eq!(regtest.consensus.coinbase_maturity, 15);
        assert_eq!(
            regtest.auxiliary.masternode_payments_start,
            test.auxiliary.masternode_payments_start
        );
        assert_eq!(regtest.auxiliary.spork_key, TEST_SPORK_KEY);
        assert_eq!(regtest.base58_prefixes, test.base58_prefixes);
        assert!(regtest.flags.mine_blocks_on_demand);
        assert_eq!(regtest.miner_threads, 1);
    }

    #[test]
    fn unit_test_shares_main_checkpoints() {
        let main = main_params().expect("main");
        let unit = unit_test_params(&main).expect("unittest");
        assert!(Arc::ptr_eq(&unit.checkpoints, &main.checkpoints));
        assert_eq!(unit.genesis_hash(), main.genesis_hash());
        assert_eq!(unit.message_start, main.message_start);
        assert!(unit.flags.default_consistency_checks);
        assert!(!unit.flags.mining_requires_peers);
    }

    #[test]
    fn misplaced_genesis_checkpoint_is_rejected() {
        let genesis =
            hash_constant(Network::Main, MAIN_GENESIS_HASH, "genesis hash").expect("hash");
        let err =
            checkpoint_data(Network::Testnet, &genesis, &TEST_CHECKPOINTS, 0, 0, 0.0).unwrap_err();
        assert!(matches!(err, IntegrityError::CheckpointGenesis { network: Network::Testnet, .. }));
    }

    #[test]
    fn unordered_checkpoints_are_rejected() {
        let genesis =
            hash_constant(Network::Main, MAIN_GENESIS_HASH, "genesis hash").expect("hash");
        let entries = [(0, MAIN_GENESIS_HASH), (500, MAIN_GENESIS_HASH), (400, MAIN_GENESIS_HASH)];
        let err = checkpoint_data(Network::Main, &genesis, &entries, 0, 0, 0.0).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::CheckpointOrder {
                network: Network::Main,
                height: 400,
            }
        );
    }

    #[test]
    fn malformed_checkpoint_hash_is_reported() {
        let genesis = [0u8; 32];
        let entries = [(10, "not-hex")];
        let err = checkpoint_data(Network::Regtest, &genesis, &entries, 0, 0, 0.0).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::InvalidConstant {
                network: Network::Regtest,
                what: "checkpoint hash",
            }
        );
    }
}
