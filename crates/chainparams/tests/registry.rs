use std::sync::Arc;

use athrd_chainparams::{Base58Type, ModifiableParams, NetworkFlags, ParamsError, ParamsRegistry};
use athrd_consensus::{hash256_to_hex, ConsensusParams, Network};
use athrd_pow::check_proof_of_work;

const GENESIS_MERKLE_ROOT: &str =
    "6852e9739b92effcd33d6c5f6d94fa672471093fbedfee3769028780876e62f9";

fn registry() -> ParamsRegistry {
    ParamsRegistry::new().expect("registry")
}

#[test]
fn every_genesis_matches_its_constants() {
    let registry = registry();
    let expected = [
        (
            Network::Main,
            "000009411fe9341392a7fc47bdb5759bcfb7e2053e2172b2a96f33bf61736708",
        ),
        (
            Network::Testnet,
            "0000003c94d37c93846cd80ea6c1735c0cd0aa43de717445c81ad41eec76941f",
        ),
        (
            Network::Regtest,
            "0000069d9eb20f6108746dc243e56e5876c2ac00e524c8f3ecd81e281fc542c7",
        ),
        (
            Network::UnitTest,
            "000009411fe9341392a7fc47bdb5759bcfb7e2053e2172b2a96f33bf61736708",
        ),
    ];
    for (network, hash) in expected {
        let params = registry.get(network);
        assert_eq!(hash256_to_hex(&params.genesis.hash()), hash, "{network}");
        assert_eq!(hash256_to_hex(&params.genesis_hash()), hash, "{network}");
        assert_eq!(
            hash256_to_hex(&params.genesis.compute_merkle_root()),
            GENESIS_MERKLE_ROOT,
            "{network}"
        );
        assert_eq!(params.genesis.header.prev_block, [0u8; 32]);
        check_proof_of_work(
            &params.genesis.hash(),
            params.genesis.header.bits,
            &params.consensus.pow_limit,
        )
        .expect("genesis pow");
    }
}

#[test]
fn checkpoints_are_ordered_and_anchored_at_genesis() {
    let registry = registry();
    for network in Network::ALL {
        let params = registry.get(network);
        let heights: Vec<u32> = params.checkpoints.iter().map(|c| c.height).collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{network}");
        if let Some(hash) = params.checkpoints.lookup(0) {
            assert_eq!(hash, params.genesis_hash(), "{network}");
        }
    }
}

#[test]
fn main_checkpoint_annotations() {
    let main = registry().get(Network::Main);
    assert_eq!(main.checkpoints.last_checkpoint_time(), 1_544_528_689);
    assert_eq!(main.checkpoints.transactions_last_checkpoint(), 218_561);
    assert_eq!(main.checkpoints.transactions_per_day(), 2_000.0);
    assert_eq!(
        main.checkpoints.lookup(51_652).map(|h| hash256_to_hex(&h)).as_deref(),
        Some("69168607a69c6dc624722270818c3db58f7016d05560e1c90bbe7b5dfaf8a265")
    );
    assert!(main.checkpoints.is_trusted(51_653, &[7u8; 32]));
    assert!(!main.checkpoints.is_trusted(18_391, &[7u8; 32]));
}

#[test]
fn testnet_scenario() {
    let registry = registry();
    registry.select(Network::Testnet);
    let active = registry.active().expect("active");
    assert_eq!(active.default_port, 24_854);
    assert_eq!(active.name(), "test");
    assert_eq!(
        active.checkpoints.lookup(0).map(|h| hash256_to_hex(&h)).as_deref(),
        Some("0000003c94d37c93846cd80ea6c1735c0cd0aa43de717445c81ad41eec76941f")
    );
    assert_eq!(active.base58_prefix(Base58Type::PubkeyAddress), &[83]);
    assert_eq!(
        active.base58_prefix(Base58Type::ExtCoinType),
        &[0x80, 0x00, 0x00, 0x01]
    );
}

#[test]
fn regtest_scenario() {
    let registry = registry();
    registry.select(Network::Regtest);
    let active = registry.active().expect("active");
    assert!(active.flags.allow_min_difficulty_blocks);
    assert!(!active.flags.mining_requires_peers);
    assert!(active.flags.mine_blocks_on_demand);
    assert!(active.fixed_seeds.is_empty());
    assert!(active.dns_seeds.is_empty());
    assert_eq!(active.message_start, [0xa1, 0x2f, 0xa2, 0x07]);
}

type Setter = fn(&ModifiableParams<'_>);
type Expect = fn(&mut ConsensusParams, &mut NetworkFlags);

#[test]
fn unit_test_setters_touch_only_their_field() {
    let cases: [(&str, Setter, Expect); 7] = [
        (
            "subsidy_halving_interval",
            |handle| handle.set_subsidy_halving_interval(210_000),
            |consensus, _| consensus.subsidy_halving_interval = 210_000,
        ),
        (
            "enforce_block_upgrade_majority",
            |handle| handle.set_enforce_block_upgrade_majority(1),
            |consensus, _| consensus.majority_enforce_block_upgrade = 1,
        ),
        (
            "reject_block_outdated_majority",
            |handle| handle.set_reject_block_outdated_majority(2),
            |consensus, _| consensus.majority_reject_block_outdated = 2,
        ),
        (
            "to_check_block_upgrade_majority",
            |handle| handle.set_to_check_block_upgrade_majority(3),
            |consensus, _| consensus.majority_window = 3,
        ),
        (
            "default_consistency_checks",
            |handle| handle.set_default_consistency_checks(false),
            |_, flags| flags.default_consistency_checks = false,
        ),
        (
            "allow_min_difficulty_blocks",
            |handle| handle.set_allow_min_difficulty_blocks(true),
            |_, flags| flags.allow_min_difficulty_blocks = true,
        ),
        (
            "skip_proof_of_work_check",
            |handle| handle.set_skip_proof_of_work_check(true),
            |_, flags| flags.skip_proof_of_work_check = true,
        ),
    ];

    for (field, apply, expect) in cases {
        let registry = registry();
        registry.select(Network::UnitTest);
        let before = registry.active().expect("active");
        let mut consensus = before.consensus.clone();
        let mut flags = before.flags;
        expect(&mut consensus, &mut flags);
        assert!(
            consensus != before.consensus || flags != before.flags,
            "{field} already holds the test value"
        );

        apply(&registry.modifiable().expect("modifiable"));

        let after = registry.active().expect("active");
        assert_eq!(after.consensus, consensus, "{field}");
        assert_eq!(after.flags, flags, "{field}");
        assert_eq!(after.default_port, before.default_port, "{field}");
        assert_eq!(after.genesis_hash(), before.genesis_hash(), "{field}");
        assert_eq!(after.auxiliary, before.auxiliary, "{field}");
        assert_eq!(before.consensus.subsidy_halving_interval, 1_050_000);
        assert!(before.flags.default_consistency_checks);
    }
}

#[test]
fn only_unit_test_is_modifiable() {
    let registry = registry();
    for network in [Network::Main, Network::Testnet, Network::Regtest] {
        registry.select(network);
        match registry.modifiable() {
            Err(ParamsError::NotModifiable(actual)) => assert_eq!(actual, network),
            other => panic!("unexpected result {other:?}"),
        }
    }
}

#[test]
fn setters_leave_main_untouched() {
    let registry = registry();
    registry.select(Network::UnitTest);
    registry
        .modifiable()
        .expect("modifiable")
        .set_allow_min_difficulty_blocks(true);
    let main = registry.get(Network::Main);
    assert!(!main.flags.allow_min_difficulty_blocks);
    assert!(main.flags.mining_requires_peers);
}

#[test]
fn unit_test_shares_main_checkpoints() {
    let registry = registry();
    let main = registry.get(Network::Main);
    let unit = registry.get(Network::UnitTest);
    assert!(Arc::ptr_eq(&main.checkpoints, &unit.checkpoints));
    assert!(!Arc::ptr_eq(
        &main.checkpoints,
        &registry.get(Network::Testnet).checkpoints
    ));
}
