use athrd_consensus::{encode_hex, hash256_from_hex, hash256_to_hex};
use athrd_primitives::quark::{blake512, bmw512, groestl512, jh512, keccak512, skein512};
use athrd_primitives::BlockHeader;

const GENESIS_MERKLE: &str = "6852e9739b92effcd33d6c5f6d94fa672471093fbedfee3769028780876e62f9";

fn genesis_header(time: u32, nonce: u32) -> BlockHeader {
    BlockHeader {
        version: 1,
        prev_block: [0u8; 32],
        merkle_root: hash256_from_hex(GENESIS_MERKLE).expect("merkle"),
        time,
        bits: 0x1e0f_fff0,
        nonce,
    }
}

#[test]
fn component_hashes_are_distinct() {
    let data = [0u8; 64];
    let digests = [
        blake512(&data),
        bmw512(&data),
        groestl512(&data),
        jh512(&data),
        keccak512(&data),
        skein512(&data),
    ];
    for (i, a) in digests.iter().enumerate() {
        for b in &digests[i + 1..] {
            assert_ne!(encode_hex(a), encode_hex(b));
        }
    }
}

#[test]
fn main_genesis_header_hash() {
    let header = genesis_header(1_538_474_400, 846_894);
    assert_eq!(
        hash256_to_hex(&header.hash()),
        "000009411fe9341392a7fc47bdb5759bcfb7e2053e2172b2a96f33bf61736708"
    );
}

#[test]
fn testnet_genesis_header_hash() {
    let header = genesis_header(1_538_474_401, 454_734);
    assert_eq!(
        hash256_to_hex(&header.hash()),
        "0000003c94d37c93846cd80ea6c1735c0cd0aa43de717445c81ad41eec76941f"
    );
}

#[test]
fn regtest_genesis_header_hash() {
    let header = genesis_header(1_538_474_402, 330_547);
    assert_eq!(
        hash256_to_hex(&header.hash()),
        "0000069d9eb20f6108746dc243e56e5876c2ac00e524c8f3ecd81e281fc542c7"
    );
}

#[test]
fn nonce_changes_hash() {
    let a = genesis_header(1_538_474_400, 846_894).hash();
    let b = genesis_header(1_538_474_400, 846_895).hash();
    assert_ne!(a, b);
}
